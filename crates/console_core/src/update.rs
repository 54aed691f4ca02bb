use std::time::Duration;

use crate::effect::Effect;
use crate::msg::Msg;
use crate::state::{
    AppState, CrawlDone, Notice, NoticeKind, RequestFailure, RequestId, StatsSnapshot, StatusKind,
    StatusMessage,
};

/// Pause between a successful crawl and the follow-up stats fetch, giving the
/// service time to finish committing the new documents.
pub const STATS_REFRESH_DELAY: Duration = Duration::from_secs(1);

const EMPTY_URL_TEXT: &str = "Please enter a valid URL";
const CRAWL_LOADING_TEXT: &str = "Crawling and indexing website... This may take a while.";
const CRAWL_FALLBACK_TEXT: &str = "Failed to crawl website";
const CLEAR_FALLBACK_TEXT: &str = "Failed to clear index";
const CLEAR_SUCCESS_TEXT: &str = "Search index cleared successfully";

/// Pure update function: applies a message to the state and returns the new
/// state together with the effects the platform layer must run.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FieldInput(ch) => {
            state.push_input(ch);
            Vec::new()
        }
        Msg::FieldBackspace => {
            state.pop_input();
            Vec::new()
        }
        Msg::FocusNext => {
            state.focus_next();
            Vec::new()
        }
        Msg::FocusPrev => {
            state.focus_prev();
            Vec::new()
        }
        Msg::CrawlSubmitted => submit_crawl(&mut state),
        Msg::CrawlFinished { request_id, result } => crawl_finished(&mut state, request_id, result),
        Msg::StatsTick => {
            let request_id = state.issue_stats();
            vec![Effect::RefreshStats {
                request_id,
                delay: None,
            }]
        }
        Msg::StatsRefreshed { request_id, result } => stats_refreshed(&mut state, request_id, result),
        Msg::ClearRequested => {
            state.open_confirm();
            Vec::new()
        }
        Msg::ClearConfirmed => {
            if state.close_confirm() {
                let request_id = state.issue_clear();
                vec![Effect::ClearIndex { request_id }]
            } else {
                Vec::new()
            }
        }
        Msg::ClearDeclined => {
            state.close_confirm();
            Vec::new()
        }
        Msg::ClearFinished { request_id, result } => clear_finished(&mut state, request_id, result),
        Msg::NoticeDismissed => {
            state.dismiss_notice();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };
    (state, effects)
}

fn submit_crawl(state: &mut AppState) -> Vec<Effect> {
    let url = state.url_input().trim().to_string();
    if url.is_empty() {
        state.set_status(StatusMessage {
            text: EMPTY_URL_TEXT.to_string(),
            kind: StatusKind::Error,
        });
        return Vec::new();
    }
    let max_pages = parse_count(state.max_pages_input());
    let max_depth = parse_count(state.max_depth_input());
    state.set_status(StatusMessage {
        text: CRAWL_LOADING_TEXT.to_string(),
        kind: StatusKind::Loading,
    });
    let request_id = state.issue_crawl();
    vec![Effect::SubmitCrawl {
        request_id,
        url,
        max_pages,
        max_depth,
    }]
}

/// Unparsable input is sent as an absent count, leaving the choice of a
/// default to the service.
fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

fn crawl_finished(
    state: &mut AppState,
    request_id: RequestId,
    result: Result<CrawlDone, RequestFailure>,
) -> Vec<Effect> {
    if !state.settle_crawl(request_id) {
        return Vec::new();
    }
    match result {
        Ok(done) => {
            state.set_status(StatusMessage {
                text: format!("Success! Crawled and indexed {} pages.", done.pages),
                kind: StatusKind::Success,
            });
            let request_id = state.issue_stats();
            vec![Effect::RefreshStats {
                request_id,
                delay: Some(STATS_REFRESH_DELAY),
            }]
        }
        Err(failure) => {
            state.set_status(StatusMessage {
                text: error_text(failure, CRAWL_FALLBACK_TEXT),
                kind: StatusKind::Error,
            });
            Vec::new()
        }
    }
}

fn stats_refreshed(
    state: &mut AppState,
    request_id: RequestId,
    result: Result<StatsSnapshot, RequestFailure>,
) -> Vec<Effect> {
    if !state.settle_stats(request_id) {
        return Vec::new();
    }
    // A failed stats fetch is logged by the platform layer and leaves the
    // last known count on screen.
    if let Ok(snapshot) = result {
        state.set_document_count(snapshot.document_count);
    }
    Vec::new()
}

fn clear_finished(
    state: &mut AppState,
    request_id: RequestId,
    result: Result<(), RequestFailure>,
) -> Vec<Effect> {
    if !state.settle_clear(request_id) {
        return Vec::new();
    }
    match result {
        Ok(()) => {
            state.show_notice(Notice {
                text: CLEAR_SUCCESS_TEXT.to_string(),
                kind: NoticeKind::Success,
            });
            let request_id = state.issue_stats();
            vec![Effect::RefreshStats {
                request_id,
                delay: None,
            }]
        }
        Err(failure) => {
            state.show_notice(Notice {
                text: error_text(failure, CLEAR_FALLBACK_TEXT),
                kind: NoticeKind::Error,
            });
            Vec::new()
        }
    }
}

fn error_text(failure: RequestFailure, fallback: &str) -> String {
    match failure.detail {
        Some(detail) if !detail.is_empty() => format!("Error: {detail}"),
        _ => format!("Error: {fallback}"),
    }
}
