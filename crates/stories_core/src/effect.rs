#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run one search round-trip against the remote index.
    FetchStories { term: String },
    /// Persist the submitted term so it survives a restart.
    PersistTerm { term: String },
}
