use url::Url;

use crate::view_model::{AppViewModel, StoryRowView};
use crate::{reduce, RequestId, StoriesAction, Story};

/// Default search endpoint; the shell may supply another.
pub const API_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search";

/// State of the story list across one fetch lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoriesState {
    /// Stories in API response order.
    pub data: Vec<Story>,
    pub is_loading: bool,
    pub is_error: bool,
}

impl StoriesState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Top-level application state: the search term, the URL derived from it at
/// the last submit, and the story list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    endpoint: String,
    search_term: String,
    url: String,
    stories: StoriesState,
    next_request_id: RequestId,
}

impl AppState {
    /// Creates the initial state with the URL already derived from the
    /// initial term, matching the first-mount behaviour of the search flow.
    pub fn new(endpoint: impl Into<String>, initial_term: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        let search_term = initial_term.into();
        let url = search_url(&endpoint, &search_term);
        Self {
            endpoint,
            search_term,
            url,
            stories: StoriesState::new(),
            next_request_id: 0,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The URL of the most recently committed search.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn stories(&self) -> &StoriesState {
        &self.stories
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            search_term: self.search_term.clone(),
            is_loading: self.stories.is_loading,
            is_error: self.stories.is_error,
            stories: self
                .stories
                .data
                .iter()
                .map(|story| StoryRowView {
                    object_id: story.object_id.clone(),
                    title: story.title.clone(),
                    url: story.url.clone(),
                    author: story.author.clone(),
                    num_comments: story.num_comments,
                    points: story.points,
                })
                .collect(),
        }
    }

    pub(crate) fn set_search_term(&mut self, term: String) {
        self.search_term = term;
    }

    /// Rebuilds the committed URL from the current term and allocates a
    /// request id for log correlation.
    pub(crate) fn submit_search(&mut self) -> (RequestId, String) {
        self.url = search_url(&self.endpoint, &self.search_term);
        self.next_request_id += 1;
        (self.next_request_id, self.url.clone())
    }

    pub(crate) fn apply_stories(&mut self, action: StoriesAction) {
        self.stories = reduce(std::mem::take(&mut self.stories), action);
    }
}

/// Builds `<endpoint>?query=<term>` with the term percent-encoded. An
/// endpoint that does not parse as a URL falls back to naive concatenation
/// and is reported by the fetch layer as an invalid URL.
pub fn search_url(endpoint: &str, term: &str) -> String {
    match Url::parse(endpoint) {
        Ok(mut url) => {
            url.query_pairs_mut().clear().append_pair("query", term);
            url.to_string()
        }
        Err(_) => format!("{endpoint}?query={term}"),
    }
}
