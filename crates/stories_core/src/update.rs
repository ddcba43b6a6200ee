use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// Identical `(state, msg)` pairs always yield identical results; every IO
/// consequence is expressed as an [`Effect`] for the caller to run. The fetch
/// lifecycle messages (`FetchInit`, `FetchSucceeded`, `FetchFailed`) may
/// arrive from any state: re-querying while showing results or an error is
/// valid, and a completion is applied whenever it lands.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(term) => {
            state.set_pending_term(term);
            Vec::new()
        }
        Msg::SearchSubmitted => {
            // The submit control is disabled on empty input; guard anyway so
            // the machine never issues a query for the empty term.
            if state.pending_term().is_empty() {
                return (state, Vec::new());
            }
            let term = state.commit_term();
            vec![
                Effect::PersistTerm { term: term.clone() },
                Effect::FetchStories { term },
            ]
        }
        Msg::FetchInit => {
            state.begin_fetch();
            Vec::new()
        }
        Msg::FetchSucceeded(payload) => {
            state.apply_stories(payload);
            Vec::new()
        }
        Msg::FetchFailed => {
            state.apply_fetch_failure();
            Vec::new()
        }
        Msg::RemoveStory(id) => {
            state.remove_story(&id);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
