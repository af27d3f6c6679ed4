use crate::Story;

/// Actions accepted by the stories reducer.
///
/// The enum is closed, so an unrecognized action kind cannot reach the
/// reducer at runtime; the fatal-default-case contract of the original
/// dispatch table is enforced by the type system instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesAction {
    /// A fetch is about to go out; mark the list loading.
    FetchInit,
    /// A fetch resolved; the payload replaces the list wholesale.
    FetchSuccess(Vec<Story>),
    /// A fetch failed for any reason (network, status, decode).
    FetchFailure,
    /// Drop every entry whose `object_id` matches the payload's.
    Remove(Story),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search input box.
    SearchInputChanged(String),
    /// User submitted the current search term.
    SearchSubmitted,
    /// Reducer action for the story list (fetch lifecycle, removal).
    Stories(StoriesAction),
    /// Fallback for placeholder wiring.
    NoOp,
}
