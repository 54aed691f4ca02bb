use std::time::Duration;

use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the crawl request to the collaborator service.
    SubmitCrawl {
        request_id: RequestId,
        url: String,
        max_pages: Option<u32>,
        max_depth: Option<u32>,
    },
    /// GET fresh index stats, optionally after a fixed delay.
    RefreshStats {
        request_id: RequestId,
        delay: Option<Duration>,
    },
    /// DELETE the search index.
    ClearIndex { request_id: RequestId },
}
