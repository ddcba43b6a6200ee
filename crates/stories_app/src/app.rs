use std::io::BufRead;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use stories_core::{update, AppState, CommentTally, Msg};
use stories_engine::{FilePreferenceStore, PersistedTerm, SearchSettings, SEARCH_TERM_KEY};
use stories_logging::stories_info;

use crate::effects::EffectRunner;
use crate::render;

const PREFS_FILENAME: &str = ".stories_prefs.ron";
const DEFAULT_TERM: &str = "React";

/// Everything the single-writer loop multiplexes over.
pub enum AppEvent {
    Msg(Msg),
    Quit,
}

pub fn run() -> anyhow::Result<()> {
    let store = FilePreferenceStore::new(PREFS_FILENAME);
    let term = PersistedTerm::load(store, SEARCH_TERM_KEY, DEFAULT_TERM);
    let initial_term = term.current().to_string();
    stories_info!("Starting with persisted term {:?}", initial_term);

    let (tx, rx) = mpsc::channel::<AppEvent>();
    let mut runner = EffectRunner::new(SearchSettings::default(), term, tx.clone());
    spawn_stdin_reader(tx.clone());

    let mut state = AppState::with_term(initial_term);
    let mut tally = CommentTally::new();

    // The original fetches for the restored term on startup.
    let _ = tx.send(AppEvent::Msg(Msg::SearchSubmitted));

    loop {
        runner.pump();
        let event = match rx.recv_timeout(Duration::from_millis(50)) {
            Ok(event) => event,
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        };

        match event {
            AppEvent::Quit => break,
            AppEvent::Msg(msg) => {
                let (next, effects) = update(std::mem::take(&mut state), msg);
                state = next;
                runner.run_effects(effects);
                if state.consume_dirty() {
                    render::render(&state.view(), tally.total(&state));
                }
            }
        }
    }

    stories_info!("Exiting");
    Ok(())
}

/// Translate terminal lines into messages on a dedicated thread, so the loop
/// never blocks on user input.
fn spawn_stdin_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line == "quit" || line == "exit" {
                let _ = tx.send(AppEvent::Quit);
                return;
            }
            if let Some(id) = line.strip_prefix("rm ") {
                let _ = tx.send(AppEvent::Msg(Msg::RemoveStory(id.trim().to_string())));
                continue;
            }
            let _ = tx.send(AppEvent::Msg(Msg::InputChanged(line.to_string())));
            if tx.send(AppEvent::Msg(Msg::SearchSubmitted)).is_err() {
                return;
            }
        }
        let _ = tx.send(AppEvent::Quit);
    });
}
