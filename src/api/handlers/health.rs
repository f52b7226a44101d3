//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "pageview_source": {
///       "status": "ok",
///       "message": "https://wikimedia.org/api/rest_v1 (en.wikipedia)"
///     }
///   }
/// }
/// ```
///
/// The upstream API is not called.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let source_check = CheckStatus {
        status: "ok".to_string(),
        message: Some(state.pageview_service.source_description()),
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            pageview_source: source_check,
        },
    })
}
