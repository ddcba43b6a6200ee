use stories_core::Story;
use thiserror::Error;

/// Why a search round-trip failed.
///
/// The variants exist for logging; at the reducer boundary every one of them
/// collapses into the same failed-fetch transition with no detail retained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("invalid search url: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

/// Event delivered from the engine thread back to the update loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SearchCompleted {
        term: String,
        result: Result<Vec<Story>, FetchError>,
    },
}
