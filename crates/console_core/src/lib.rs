//! Console core: pure controller state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AppState, CrawlDone, FormField, Notice, NoticeKind, RequestFailure, RequestId, StatsSnapshot,
    StatusKind, StatusMessage, DEFAULT_MAX_DEPTH, DEFAULT_MAX_PAGES,
};
pub use update::{update, STATS_REFRESH_DELAY};
pub use view_model::{ConsoleViewModel, FormView, CONFIRM_CLEAR_PROMPT};
