use std::sync::mpsc;

use stories_core::{Effect, Msg};
use stories_engine::{
    EngineEvent, EngineHandle, FilePreferenceStore, PersistedTerm, SearchSettings,
};
use stories_logging::{stories_info, stories_warn};

use crate::app::AppEvent;

/// Runs the effects the update function asks for and pumps engine
/// completions back into the message loop.
pub struct EffectRunner {
    engine: EngineHandle,
    term_store: PersistedTerm<FilePreferenceStore>,
    tx: mpsc::Sender<AppEvent>,
}

impl EffectRunner {
    pub fn new(
        settings: SearchSettings,
        term_store: PersistedTerm<FilePreferenceStore>,
        tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            engine: EngineHandle::new(settings),
            term_store,
            tx,
        }
    }

    pub fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PersistTerm { term } => {
                    self.term_store.commit(&term);
                }
                Effect::FetchStories { term } => {
                    stories_info!("Searching for {:?}", term);
                    // The loading transition goes through the queue so every
                    // state change stays serialized in the one update loop.
                    let _ = self.tx.send(AppEvent::Msg(Msg::FetchInit));
                    self.engine.search(term);
                }
            }
        }
    }

    /// Drain completed searches into the message loop.
    ///
    /// Completions are forwarded in arrival order; when searches overlapped,
    /// whichever finished last ends up owning the result set.
    pub fn pump(&self) {
        while let Some(event) = self.engine.try_recv() {
            match event {
                EngineEvent::SearchCompleted { term, result } => {
                    let msg = match result {
                        Ok(stories) => {
                            stories_info!("Search {:?} returned {} hits", term, stories.len());
                            Msg::FetchSucceeded(stories)
                        }
                        Err(err) => {
                            // Detail stops here; the state machine only
                            // learns that the fetch failed.
                            stories_warn!("Search {:?} failed: {}", term, err);
                            Msg::FetchFailed
                        }
                    };
                    let _ = self.tx.send(AppEvent::Msg(msg));
                }
            }
        }
    }
}
