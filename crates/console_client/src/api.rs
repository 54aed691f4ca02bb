use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiErrorKind};

/// Base URL used when the operator has not configured one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const CRAWL_PATH: &str = "/api/crawl";
const STATS_PATH: &str = "/api/stats";
const CLEAR_PATH: &str = "/api/clear";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Overall per-request deadline. `None` leaves the request open-ended so
    /// a long crawl can run to completion.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

/// Body of `POST /api/crawl`. Absent counts serialize as JSON `null`,
/// leaving the choice of a default to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlRequest {
    pub url: String,
    pub max_pages: Option<u32>,
    pub max_depth: Option<u32>,
}

/// Success body of `POST /api/crawl`. A response without `pages` is treated
/// as a decode failure, not an empty crawl.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CrawlOutcome {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    pub pages: Vec<CrawlPage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CrawlPage {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// Success body of `GET /api/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IndexStats {
    pub document_count: u64,
    #[serde(default)]
    pub collection_name: Option<String>,
    #[serde(default)]
    pub persist_directory: Option<String>,
}

/// Success body of `DELETE /api/clear`; the server promises nothing beyond
/// a JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClearOutcome {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body the server attaches to non-success responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// The three calls the console makes against the search service.
#[async_trait::async_trait]
pub trait ConsoleApi: Send + Sync {
    async fn submit_crawl(&self, request: &CrawlRequest) -> Result<CrawlOutcome, ApiError>;
    async fn fetch_stats(&self) -> Result<IndexStats, ApiError>;
    async fn clear_index(&self) -> Result<ClearOutcome, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpConsoleApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpConsoleApi {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::new(ApiErrorKind::Network, err.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait::async_trait]
impl ConsoleApi for HttpConsoleApi {
    async fn submit_crawl(&self, request: &CrawlRequest) -> Result<CrawlOutcome, ApiError> {
        let response = self
            .client
            .post(self.endpoint(CRAWL_PATH))
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode_response(response).await
    }

    async fn fetch_stats(&self) -> Result<IndexStats, ApiError> {
        let response = self
            .client
            .get(self.endpoint(STATS_PATH))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode_response(response).await
    }

    async fn clear_index(&self) -> Result<ClearOutcome, ApiError> {
        let response = self
            .client
            .delete(self.endpoint(CLEAR_PATH))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode_response(response).await
    }
}

/// Reads the whole body, then maps the response: non-success statuses are
/// probed for a `detail` field, success bodies must decode as `T`.
async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(map_reqwest_error)?;

    if !status.is_success() {
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|body| body.detail);
        return Err(ApiError::new(
            ApiErrorKind::Status {
                code: status.as_u16(),
                detail,
            },
            status.to_string(),
        ));
    }

    serde_json::from_str(&body).map_err(|err| ApiError::new(ApiErrorKind::Decode, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(ApiErrorKind::Timeout, err.to_string());
    }
    ApiError::new(ApiErrorKind::Network, err.to_string())
}
