use std::sync::{mpsc, Arc};
use std::thread;

use crate::fetch::{search_url, ReqwestStoryFetcher, SearchSettings, StoryFetcher};
use crate::EngineEvent;

enum EngineCommand {
    Search { term: String },
}

/// Handle to the engine thread that runs searches.
///
/// Each search is spawned as its own task; overlapping searches are not
/// sequenced or cancelled, so completions are delivered in whatever order the
/// network resolves them. The update loop applies them in arrival order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: SearchSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestStoryFetcher::new());

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                let settings = settings.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), &settings, command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn search(&self, term: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Search { term: term.into() });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn StoryFetcher,
    settings: &SearchSettings,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Search { term } => {
            let result = match search_url(&settings.base_url, &term) {
                Ok(url) => fetcher.fetch(url).await,
                Err(err) => Err(err),
            };
            let _ = event_tx.send(EngineEvent::SearchCompleted { term, result });
        }
    }
}
