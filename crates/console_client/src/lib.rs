//! Console client: typed HTTP surface of the search service and the
//! background bridge that runs calls off the UI thread.
mod api;
mod bridge;
mod error;

pub use api::{
    ClearOutcome, ClientSettings, ConsoleApi, CrawlOutcome, CrawlPage, CrawlRequest,
    HttpConsoleApi, IndexStats, DEFAULT_BASE_URL,
};
pub use bridge::{ClientEvent, ClientHandle, RequestId};
pub use error::{ApiError, ApiErrorKind};
