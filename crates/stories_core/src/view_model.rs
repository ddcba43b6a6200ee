use crate::story::Story;

/// Read-only snapshot of [`crate::AppState`] for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Current (possibly uncommitted) text in the search input.
    pub search_input: String,
    /// The term behind the result set currently on screen.
    pub submitted_term: String,
    pub stories: Vec<Story>,
    pub is_loading: bool,
    pub is_error: bool,
    pub dirty: bool,
}
