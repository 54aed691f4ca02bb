use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use console_logging::console_debug;

use crate::api::{
    ClearOutcome, ClientSettings, ConsoleApi, CrawlOutcome, CrawlRequest, HttpConsoleApi,
    IndexStats,
};
use crate::error::ApiError;

/// Token correlating a command with its completion event. Minted by the
/// caller; the bridge carries it through unchanged.
pub type RequestId = u64;

enum ClientCommand {
    SubmitCrawl {
        request_id: RequestId,
        request: CrawlRequest,
    },
    FetchStats {
        request_id: RequestId,
        delay: Option<Duration>,
    },
    ClearIndex {
        request_id: RequestId,
    },
}

/// Completion of one issued command.
#[derive(Debug)]
pub enum ClientEvent {
    CrawlFinished {
        request_id: RequestId,
        result: Result<CrawlOutcome, ApiError>,
    },
    StatsFetched {
        request_id: RequestId,
        result: Result<IndexStats, ApiError>,
    },
    ClearFinished {
        request_id: RequestId,
        result: Result<ClearOutcome, ApiError>,
    },
}

/// Handle to the background client thread: commands in over a channel,
/// completion events out over another. Commands run concurrently on the
/// thread's runtime, so a slow crawl never blocks a stats refresh.
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<ClientEvent>>>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let api = Arc::new(HttpConsoleApi::new(settings)?);
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn submit_crawl(&self, request_id: RequestId, request: CrawlRequest) {
        let _ = self.cmd_tx.send(ClientCommand::SubmitCrawl {
            request_id,
            request,
        });
    }

    /// Fetches fresh index stats, optionally after a fixed pause.
    pub fn fetch_stats(&self, request_id: RequestId, delay: Option<Duration>) {
        let _ = self
            .cmd_tx
            .send(ClientCommand::FetchStats { request_id, delay });
    }

    pub fn clear_index(&self, request_id: RequestId) {
        let _ = self.cmd_tx.send(ClientCommand::ClearIndex { request_id });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    api: &dyn ConsoleApi,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::SubmitCrawl {
            request_id,
            request,
        } => {
            console_debug!("crawl {} -> {}", request_id, request.url);
            let result = api.submit_crawl(&request).await;
            let _ = event_tx.send(ClientEvent::CrawlFinished { request_id, result });
        }
        ClientCommand::FetchStats { request_id, delay } => {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            console_debug!("stats {}", request_id);
            let result = api.fetch_stats().await;
            let _ = event_tx.send(ClientEvent::StatsFetched { request_id, result });
        }
        ClientCommand::ClearIndex { request_id } => {
            console_debug!("clear {}", request_id);
            let result = api.clear_index().await;
            let _ = event_tx.send(ClientEvent::ClearFinished { request_id, result });
        }
    }
}
