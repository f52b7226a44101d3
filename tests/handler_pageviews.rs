mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use pageview_analyzer::domain::sources::FetchError;
use std::sync::Arc;

use common::{StubSource, create_test_router, date};

#[tokio::test]
async fn test_pageviews_success() {
    let source = Arc::new(StubSource::september());
    let server = TestServer::new(create_test_router(source.clone())).unwrap();

    let response = server
        .get("/api/pageviews")
        .add_query_param("title", "Machine learning")
        .add_query_param("start", "2024-09-01")
        .add_query_param("end", "2024-09-02")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["title"], "Machine learning");
    assert_eq!(json["article"], "Machine_learning");
    assert_eq!(json["project"], "en.wikipedia");
    assert_eq!(json["status"], "ok");
    assert_eq!(json["total_views"], 215);
    assert_eq!(json["peak"]["date"], "2024-09-01");
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
    assert_eq!(json["items"][0]["date"], "2024-09-01");
    assert_eq!(json["items"][0]["views"], 120);
    assert_eq!(json["items"][1]["date"], "2024-09-02");
    assert_eq!(json["items"][1]["views"], 95);

    let query = source.last_query().unwrap();
    assert_eq!(query.start, date(2024, 9, 1));
    assert_eq!(query.end, date(2024, 9, 2));
}

#[tokio::test]
async fn test_pageviews_missing_items_reports_no_data() {
    let source = Arc::new(StubSource::failing(FetchError::MissingItems));
    let server = TestServer::new(create_test_router(source)).unwrap();

    let response = server
        .get("/api/pageviews")
        .add_query_param("title", "Not a real article")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "no_data");
    assert_eq!(json["reason"], "missing_items");
    assert_eq!(
        json["message"],
        "No data available for the given article and date range."
    );
    assert!(json["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_pageviews_upstream_status_reports_no_data() {
    let source = Arc::new(StubSource::failing(FetchError::Status(502)));
    let server = TestServer::new(create_test_router(source)).unwrap();

    let response = server
        .get("/api/pageviews")
        .add_query_param("title", "Rust")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "no_data");
    assert_eq!(json["reason"], "status");
}

#[tokio::test]
async fn test_pageviews_defaults_dates() {
    let source = Arc::new(StubSource::september());
    let server = TestServer::new(create_test_router(source.clone())).unwrap();

    let response = server
        .get("/api/pageviews")
        .add_query_param("title", "Rust")
        .add_query_param("start", "")
        .await;

    response.assert_status_ok();

    let query = source.last_query().unwrap();
    assert_eq!(query.start, date(2024, 1, 1));
    assert!(query.end >= date(2024, 1, 1));
}

#[tokio::test]
async fn test_pageviews_blank_title_rejected() {
    let source = Arc::new(StubSource::september());
    let server = TestServer::new(create_test_router(source.clone())).unwrap();

    let response = server
        .get("/api/pageviews")
        .add_query_param("title", "  ")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn test_pageviews_reversed_range_rejected() {
    let source = Arc::new(StubSource::september());
    let server = TestServer::new(create_test_router(source.clone())).unwrap();

    let response = server
        .get("/api/pageviews")
        .add_query_param("title", "Rust")
        .add_query_param("start", "2024-09-30")
        .add_query_param("end", "2024-09-01")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["error"]["message"],
        "Start date must not be after end date"
    );
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn test_pageviews_malformed_date_returns_error_envelope() {
    let source = Arc::new(StubSource::september());
    let server = TestServer::new(create_test_router(source.clone())).unwrap();

    let response = server
        .get("/api/pageviews")
        .add_query_param("title", "Rust")
        .add_query_param("start", "yesterday")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Failed to deserialize query string")
    );
    assert_eq!(source.calls(), 0);
}
