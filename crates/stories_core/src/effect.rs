/// Correlates a fetch request with its completion in the logs. Overlapping
/// requests are not cancelled or deduplicated; the last one to resolve wins.
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue a GET against the search endpoint; the result comes back as a
    /// `Msg::Stories` terminal action.
    FetchStories { request_id: RequestId, url: String },
    /// Mirror the committed search term into the durable key-value store.
    PersistSearchTerm { value: String },
}
