//! API route configuration.

use crate::api::handlers::pageviews_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes.
///
/// # Endpoints
///
/// - `GET /pageviews` - Daily pageview series for an article
pub fn routes() -> Router<AppState> {
    Router::new().route("/pageviews", get(pageviews_handler))
}
