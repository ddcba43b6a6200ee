#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search input box (uncommitted text).
    InputChanged(String),
    /// User submitted the current input as a search.
    SearchSubmitted,
    /// A fetch round-trip is starting.
    FetchInit,
    /// Fetch resolved with the ranked hits from the index.
    FetchSucceeded(Vec<crate::Story>),
    /// Fetch failed; the previous result set is kept.
    FetchFailed,
    /// User dismissed one story from the visible set.
    RemoveStory(crate::StoryId),
    /// Fallback for placeholder wiring.
    NoOp,
}
