use crate::story::{Story, StoryId};
use crate::view_model::AppViewModel;

/// Application state owned by the single-writer update loop.
///
/// The result set is only ever changed through [`crate::update`]; callers
/// observe it through read-only snapshots via [`AppState::view`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pending_term: String,
    submitted_term: String,
    stories: Vec<Story>,
    is_loading: bool,
    is_error: bool,
    data_version: u64,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state with the search input pre-filled from a persisted term.
    pub fn with_term(term: impl Into<String>) -> Self {
        Self {
            pending_term: term.into(),
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            search_input: self.pending_term.clone(),
            submitted_term: self.submitted_term.clone(),
            stories: self.stories.clone(),
            is_loading: self.is_loading,
            is_error: self.is_error,
            dirty: self.dirty,
        }
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// Counter bumped every time the result set itself changes.
    ///
    /// Loading/error flips leave it untouched, which is what lets the
    /// aggregate memoize on it.
    pub fn data_version(&self) -> u64 {
        self.data_version
    }

    pub fn pending_term(&self) -> &str {
        &self.pending_term
    }

    pub fn submitted_term(&self) -> &str {
        &self.submitted_term
    }

    /// Returns whether the state changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_pending_term(&mut self, term: String) {
        if self.pending_term != term {
            self.pending_term = term;
            self.mark_dirty();
        }
    }

    pub(crate) fn commit_term(&mut self) -> String {
        self.submitted_term = self.pending_term.clone();
        self.mark_dirty();
        self.submitted_term.clone()
    }

    /// Enter the loading state. The result set is left as-is so a failed
    /// re-query keeps showing the previous results.
    pub(crate) fn begin_fetch(&mut self) {
        self.is_loading = true;
        self.is_error = false;
        self.mark_dirty();
    }

    /// Replace the result set with a freshly fetched payload.
    ///
    /// Ranking order is preserved; duplicate ids from a misbehaving index are
    /// dropped after their first occurrence so ids stay unique at all times.
    pub(crate) fn apply_stories(&mut self, payload: Vec<Story>) {
        let mut seen: std::collections::HashSet<StoryId> = std::collections::HashSet::new();
        let mut stories = Vec::with_capacity(payload.len());
        for story in payload {
            if seen.insert(story.id.clone()) {
                stories.push(story);
            }
        }
        self.stories = stories;
        self.is_loading = false;
        self.is_error = false;
        self.data_version += 1;
        self.mark_dirty();
    }

    pub(crate) fn apply_fetch_failure(&mut self) {
        self.is_loading = false;
        self.is_error = true;
        self.mark_dirty();
    }

    /// Remove every story with the given id, keeping the relative order of
    /// the remainder. Removing an absent id is a no-op.
    pub(crate) fn remove_story(&mut self, id: &StoryId) {
        let before = self.stories.len();
        self.stories.retain(|story| story.id != *id);
        if self.stories.len() != before {
            self.data_version += 1;
            self.mark_dirty();
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
