use crate::AppState;

/// Memoized sum of comment counts over the committed result set.
///
/// Keyed on [`AppState::data_version`] rather than reference identity, so the
/// O(n) sum runs only when the result set actually changed. Loading and error
/// flips do not bump the version and therefore never trigger a recompute.
#[derive(Debug, Default)]
pub struct CommentTally {
    cached: Option<(u64, u64)>,
    recomputes: u64,
}

impl CommentTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total comment count across the current result set.
    pub fn total(&mut self, state: &AppState) -> u64 {
        if let Some((version, total)) = self.cached {
            if version == state.data_version() {
                return total;
            }
        }
        let total = state
            .stories()
            .iter()
            .map(|story| u64::from(story.comment_count))
            .sum();
        self.cached = Some((state.data_version(), total));
        self.recomputes += 1;
        total
    }

    /// How many times the sum has actually been recomputed.
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }
}
