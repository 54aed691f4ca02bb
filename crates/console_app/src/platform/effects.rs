use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use console_client::{ApiError, ClientEvent, ClientHandle, ClientSettings, CrawlRequest};
use console_core::{CrawlDone, Effect, Msg, RequestFailure, StatsSnapshot};
use console_logging::{console_info, console_warn};

pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, msg_tx: mpsc::Sender<Msg>) -> Result<Self, ApiError> {
        let client = ClientHandle::new(settings)?;
        let runner = Self { client };
        runner.spawn_event_pump(msg_tx);
        Ok(runner)
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitCrawl {
                    request_id,
                    url,
                    max_pages,
                    max_depth,
                } => {
                    console_info!(
                        "SubmitCrawl request_id={} url={} max_pages={:?} max_depth={:?}",
                        request_id,
                        url,
                        max_pages,
                        max_depth
                    );
                    self.client.submit_crawl(
                        request_id,
                        CrawlRequest {
                            url,
                            max_pages,
                            max_depth,
                        },
                    );
                }
                Effect::RefreshStats { request_id, delay } => {
                    self.client.fetch_stats(request_id, delay);
                }
                Effect::ClearIndex { request_id } => {
                    console_info!("ClearIndex request_id={}", request_id);
                    self.client.clear_index(request_id);
                }
            }
        }
    }

    fn spawn_event_pump(&self, msg_tx: mpsc::Sender<Msg>) {
        let client = self.client.clone();
        thread::spawn(move || loop {
            if let Some(event) = client.try_recv() {
                if msg_tx.send(map_event(event)).is_err() {
                    return;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::CrawlFinished { request_id, result } => Msg::CrawlFinished {
            request_id,
            result: match result {
                Ok(outcome) => Ok(CrawlDone {
                    pages: outcome.pages.len(),
                }),
                Err(err) => {
                    console_warn!("Crawl {} failed: {}", request_id, err);
                    Err(request_failure(err))
                }
            },
        },
        ClientEvent::StatsFetched { request_id, result } => Msg::StatsRefreshed {
            request_id,
            result: match result {
                Ok(stats) => Ok(StatsSnapshot {
                    document_count: stats.document_count,
                }),
                Err(err) => {
                    // Stats failures stay in the log; the screen keeps the
                    // last known count.
                    console_warn!("Stats refresh {} failed: {}", request_id, err);
                    Err(request_failure(err))
                }
            },
        },
        ClientEvent::ClearFinished { request_id, result } => Msg::ClearFinished {
            request_id,
            result: match result {
                Ok(_) => Ok(()),
                Err(err) => {
                    console_warn!("Clear {} failed: {}", request_id, err);
                    Err(request_failure(err))
                }
            },
        },
    }
}

fn request_failure(err: ApiError) -> RequestFailure {
    RequestFailure {
        detail: err.detail().map(str::to_owned),
    }
}
