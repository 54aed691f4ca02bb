use crate::{CrawlDone, RequestFailure, RequestId, StatsSnapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Character typed into the focused form field.
    FieldInput(char),
    /// Backspace in the focused form field.
    FieldBackspace,
    /// Move focus to the next form field.
    FocusNext,
    /// Move focus to the previous form field.
    FocusPrev,
    /// User submitted the crawl form.
    CrawlSubmitted,
    /// The crawl call settled.
    CrawlFinished {
        request_id: RequestId,
        result: Result<CrawlDone, RequestFailure>,
    },
    /// Startup, poll timer, or manual request for fresh index stats.
    StatsTick,
    /// The stats call settled.
    StatsRefreshed {
        request_id: RequestId,
        result: Result<StatsSnapshot, RequestFailure>,
    },
    /// User asked to clear the index; opens the confirmation gate.
    ClearRequested,
    /// User confirmed the pending clear.
    ClearConfirmed,
    /// User declined the pending clear.
    ClearDeclined,
    /// The clear call settled.
    ClearFinished {
        request_id: RequestId,
        result: Result<(), RequestFailure>,
    },
    /// User dismissed the one-shot notice.
    NoticeDismissed,
    /// Fallback for placeholder wiring.
    NoOp,
}
