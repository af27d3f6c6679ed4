/// One search-result record. Immutable once fetched; identity is `object_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub object_id: String,
    pub title: String,
    pub url: String,
    pub author: String,
    pub num_comments: u32,
    pub points: i64,
}
