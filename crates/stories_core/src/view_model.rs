#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub search_term: String,
    pub is_loading: bool,
    pub is_error: bool,
    pub stories: Vec<StoryRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryRowView {
    pub object_id: String,
    pub title: String,
    pub url: String,
    pub author: String,
    pub num_comments: u32,
    pub points: i64,
}
