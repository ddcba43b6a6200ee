//! Stories engine: IO side of the search client.
//!
//! Everything that suspends or touches durable storage lives here: the async
//! fetcher against the remote index, the engine thread bridging it to the
//! synchronous update loop, and the preference store for the persisted term.
mod engine;
mod fetch;
mod prefs;
mod types;

pub use engine::EngineHandle;
pub use fetch::{search_url, ReqwestStoryFetcher, SearchSettings, StoryFetcher};
pub use prefs::{FilePreferenceStore, PersistedTerm, PreferenceStore, SEARCH_TERM_KEY};
pub use types::{EngineEvent, FetchError};
