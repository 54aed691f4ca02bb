use std::time::Duration;

use console_client::{ApiErrorKind, ClientSettings, ConsoleApi, CrawlRequest, HttpConsoleApi};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> HttpConsoleApi {
    HttpConsoleApi::new(ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    })
    .expect("client")
}

fn crawl_request(url: &str) -> CrawlRequest {
    CrawlRequest {
        url: url.to_string(),
        max_pages: Some(10),
        max_depth: Some(2),
    }
}

#[tokio::test]
async fn crawl_posts_body_and_parses_pages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/crawl"))
        .and(body_json(json!({
            "url": "https://example.com",
            "max_pages": 10,
            "max_depth": 2,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Crawled and indexed 2 pages",
            "pages": [
                {"url": "https://example.com/", "title": "Home"},
                {"url": "https://example.com/about", "title": null},
            ],
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let outcome = api
        .submit_crawl(&crawl_request("https://example.com"))
        .await
        .expect("crawl ok");

    assert_eq!(outcome.pages.len(), 2);
    assert_eq!(outcome.pages[0].url, "https://example.com/");
    assert_eq!(outcome.pages[0].title.as_deref(), Some("Home"));
    assert_eq!(outcome.pages[1].title, None);
    assert_eq!(outcome.status.as_deref(), Some("success"));
}

#[tokio::test]
async fn unparsed_counts_go_on_the_wire_as_null() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/crawl"))
        .and(body_json(json!({
            "url": "https://example.com",
            "max_pages": null,
            "max_depth": null,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"pages": []})))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let outcome = api
        .submit_crawl(&CrawlRequest {
            url: "https://example.com".to_string(),
            max_pages: None,
            max_depth: None,
        })
        .await
        .expect("crawl ok");

    assert!(outcome.pages.is_empty());
}

#[tokio::test]
async fn error_status_carries_server_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/crawl"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "bad url"})))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api
        .submit_crawl(&crawl_request("https://example.com"))
        .await
        .unwrap_err();

    assert_eq!(
        err.kind,
        ApiErrorKind::Status {
            code: 400,
            detail: Some("bad url".to_string()),
        }
    );
    assert_eq!(err.detail(), Some("bad url"));
}

#[tokio::test]
async fn error_status_without_detail_has_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/crawl"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api
        .submit_crawl(&crawl_request("https://example.com"))
        .await
        .unwrap_err();

    assert_eq!(
        err.kind,
        ApiErrorKind::Status {
            code: 500,
            detail: None,
        }
    );
    // The caller falls back to its own generic wording.
    assert_eq!(err.detail(), None);
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/crawl"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api
        .submit_crawl(&crawl_request("https://example.com"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Decode);
    assert!(err.detail().is_some());
}

#[tokio::test]
async fn success_body_without_pages_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/crawl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api
        .submit_crawl(&crawl_request("https://example.com"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Decode);
}

#[tokio::test]
async fn stats_parses_count_and_tolerates_extras() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "document_count": 42,
            "collection_name": "semantic_search",
            "persist_directory": "/data/chroma",
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let stats = api.fetch_stats().await.expect("stats ok");

    assert_eq!(stats.document_count, 42);
    assert_eq!(stats.collection_name.as_deref(), Some("semantic_search"));
}

#[tokio::test]
async fn stats_needs_only_the_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"document_count": 0})))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let stats = api.fetch_stats().await.expect("stats ok");

    assert_eq!(stats.document_count, 0);
    assert_eq!(stats.collection_name, None);
}

#[tokio::test]
async fn clear_accepts_minimal_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/clear"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let outcome = api.clear_index().await.expect("clear ok");

    assert_eq!(outcome.status, None);
    assert_eq!(outcome.message, None);
}

#[tokio::test]
async fn clear_failure_surfaces_detail() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/clear"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"detail": "index is locked"})),
        )
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.clear_index().await.unwrap_err();

    assert_eq!(err.detail(), Some("index is locked"));
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({"document_count": 1})),
        )
        .mount(&server)
        .await;

    let api = HttpConsoleApi::new(ClientSettings {
        base_url: server.uri(),
        request_timeout: Some(Duration::from_millis(50)),
        ..ClientSettings::default()
    })
    .expect("client");

    let err = api.fetch_stats().await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Timeout);
    // Transport failures surface their own message.
    assert_eq!(err.detail(), Some(err.message.as_str()));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Bind and drop a listener so the port is known to be closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let api = HttpConsoleApi::new(ClientSettings {
        base_url: format!("http://{addr}"),
        ..ClientSettings::default()
    })
    .expect("client");

    let err = api.fetch_stats().await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Network);
    assert!(!err.message.is_empty());
}

#[tokio::test]
async fn base_url_trailing_slash_is_tolerated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"document_count": 7})))
        .mount(&server)
        .await;

    let api = HttpConsoleApi::new(ClientSettings {
        base_url: format!("{}/", server.uri()),
        ..ClientSettings::default()
    })
    .expect("client");

    let stats = api.fetch_stats().await.expect("stats ok");
    assert_eq!(stats.document_count, 7);
}
