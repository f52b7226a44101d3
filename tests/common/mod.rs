#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get};
use chrono::NaiveDate;
use pageview_analyzer::api;
use pageview_analyzer::api::handlers::health_handler;
use pageview_analyzer::application::services::ChartService;
use pageview_analyzer::domain::entities::{PageviewRow, PageviewSeries, QueryParams};
use pageview_analyzer::domain::sources::{FetchError, PageviewSource};
use pageview_analyzer::state::AppState;
use pageview_analyzer::web;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Source that answers every lookup with a fixed outcome and records queries.
pub struct StubSource {
    outcome: Result<Vec<PageviewRow>, FetchError>,
    calls: AtomicUsize,
    queries: Mutex<Vec<QueryParams>>,
}

impl StubSource {
    pub fn with_rows(rows: Vec<PageviewRow>) -> Self {
        Self {
            outcome: Ok(rows),
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: FetchError) -> Self {
        Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Two September days: 120 and 95 views.
    pub fn september() -> Self {
        Self::with_rows(vec![
            PageviewRow::new(date(2024, 9, 1), 120),
            PageviewRow::new(date(2024, 9, 2), 95),
        ])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<QueryParams> {
        self.queries.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl PageviewSource for StubSource {
    async fn daily_pageviews(&self, query: &QueryParams) -> Result<PageviewSeries, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.clone());

        self.outcome
            .clone()
            .map(|rows| PageviewSeries::new(query.title.display(), rows))
    }

    fn describe(&self) -> String {
        "stub".to_string()
    }
}

pub fn create_test_state(source: Arc<StubSource>) -> AppState {
    AppState::new(source, ChartService::default(), date(2024, 1, 1))
}

/// Router with every application route, without trailing-slash normalization.
pub fn create_test_router(source: Arc<StubSource>) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .with_state(create_test_state(source))
}
