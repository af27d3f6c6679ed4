use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use app_logging::app_debug;

use crate::fetch::{FetchSettings, ReqwestSearchClient, SearchClient};
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    Search { request_id: RequestId, url: String },
}

/// Handle to the background search loop: commands go in over a channel, and
/// completions come back as [`EngineEvent`]s.
///
/// Requests run concurrently on the shared runtime. Overlapping searches are
/// not cancelled; completions arrive in whatever order the network resolves.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(ReqwestSearchClient::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    /// Fire-and-forget: the completion surfaces later via `try_recv`.
    pub fn search(&self, request_id: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Search {
            request_id,
            url: url.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    client: &dyn SearchClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Search { request_id, url } => {
            app_debug!("Search request {} -> {}", request_id, url);
            let result = client.search(&url).await;
            let _ = event_tx.send(EngineEvent::SearchCompleted { request_id, result });
        }
    }
}
