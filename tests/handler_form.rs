mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use pageview_analyzer::domain::sources::FetchError;
use std::sync::Arc;

use common::{StubSource, create_test_router, date};

const NO_DATA: &str = "No data available for the given article and date range.";

#[tokio::test]
async fn test_form_page_defaults() {
    let source = Arc::new(StubSource::september());
    let server = TestServer::new(create_test_router(source.clone())).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Wikipedia Pageview Analyzer"));
    assert!(html.contains("Wikipedia Article Title"));
    assert!(html.contains(r#"value="2024-01-01""#));
    assert!(html.contains("Pageviews Over Time"));
    assert!(!html.contains("<svg"));
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn test_form_page_lists_examples() {
    let source = Arc::new(StubSource::september());
    let server = TestServer::new(create_test_router(source)).unwrap();

    let html = server.get("/").await.text();

    assert!(html.contains("Machine learning"));
    assert!(html.contains("Artificial intelligence"));
    assert!(html.contains("Deep learning"));
    assert!(html.contains("/plot?title=Machine+learning"));
    assert!(html.contains("end=2024-09-30"));
}

#[tokio::test]
async fn test_plot_renders_chart() {
    let source = Arc::new(StubSource::september());
    let server = TestServer::new(create_test_router(source.clone())).unwrap();

    let response = server
        .get("/plot")
        .add_query_param("title", "Machine learning")
        .add_query_param("start", "2024-09-01")
        .add_query_param("end", "2024-09-02")
        .await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("<svg"));
    assert!(!html.contains(NO_DATA));
    assert!(html.contains(r#"value="Machine learning""#));
    assert!(html.contains(r#"value="2024-09-01""#));
    assert!(html.contains(r#"value="2024-09-02""#));

    let query = source.last_query().unwrap();
    assert_eq!(query.title.display(), "Machine learning");
    assert_eq!(query.title.path_segment(), "Machine_learning");
    assert_eq!(query.start, date(2024, 9, 1));
}

#[tokio::test]
async fn test_plot_without_data_shows_message() {
    let source = Arc::new(StubSource::failing(FetchError::MissingItems));
    let server = TestServer::new(create_test_router(source)).unwrap();

    let response = server
        .get("/plot")
        .add_query_param("title", "Not a real article")
        .add_query_param("start", "2024-09-01")
        .add_query_param("end", "2024-09-30")
        .await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains(NO_DATA));
    assert!(!html.contains("<svg"));
}

#[tokio::test]
async fn test_plot_with_empty_series_shows_message() {
    let source = Arc::new(StubSource::with_rows(vec![]));
    let server = TestServer::new(create_test_router(source)).unwrap();

    let response = server
        .get("/plot")
        .add_query_param("title", "Rust")
        .await;

    response.assert_status_ok();
    assert!(response.text().contains(NO_DATA));
}

#[tokio::test]
async fn test_plot_transport_error_shows_same_message() {
    let source = Arc::new(StubSource::failing(FetchError::Transport(
        "connection refused".to_string(),
    )));
    let server = TestServer::new(create_test_router(source)).unwrap();

    let response = server
        .get("/plot")
        .add_query_param("title", "Rust")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(NO_DATA));
    assert!(!html.contains("connection refused"));
}

#[tokio::test]
async fn test_plot_blank_title_shows_validation_message() {
    let source = Arc::new(StubSource::september());
    let server = TestServer::new(create_test_router(source.clone())).unwrap();

    let response = server
        .get("/plot")
        .add_query_param("title", "")
        .add_query_param("start", "2024-09-01")
        .add_query_param("end", "2024-09-30")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("Article title must not be empty"));
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn test_plot_malformed_date_shows_message() {
    let source = Arc::new(StubSource::september());
    let server = TestServer::new(create_test_router(source.clone())).unwrap();

    let response = server
        .get("/plot")
        .add_query_param("title", "Rust")
        .add_query_param("start", "yesterday")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("Failed to deserialize query string"));
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn test_plot_escapes_title() {
    let source = Arc::new(StubSource::failing(FetchError::MissingItems));
    let server = TestServer::new(create_test_router(source)).unwrap();

    let response = server
        .get("/plot")
        .add_query_param("title", "<script>alert(1)</script>")
        .await;

    let html = response.text();
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("alert(1)"));
}

#[tokio::test]
async fn test_plot_chart_escapes_title() {
    let source = Arc::new(StubSource::september());
    let server = TestServer::new(create_test_router(source)).unwrap();

    let response = server
        .get("/plot")
        .add_query_param("title", "<img src=x onerror=alert(1)>")
        .add_query_param("start", "2024-09-01")
        .add_query_param("end", "2024-09-02")
        .await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("<svg"));
    assert!(!html.contains("<img src=x onerror=alert(1)>"));
    assert!(html.contains("onerror=alert(1)"));
}

#[tokio::test]
async fn test_plot_chart_caption_drawn_once() {
    let source = Arc::new(StubSource::september());
    let server = TestServer::new(create_test_router(source)).unwrap();

    let html = server
        .get("/plot")
        .add_query_param("title", "Machine learning")
        .add_query_param("start", "2024-09-01")
        .add_query_param("end", "2024-09-02")
        .await
        .text();

    assert!(html.contains("Pageviews for"));
    assert!(!html.contains("<figcaption"));
}
