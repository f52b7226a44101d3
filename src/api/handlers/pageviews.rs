//! Handler for the JSON pageview lookup.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use chrono::Local;
use serde_json::json;

use crate::api::dto::pageviews::{PageviewQuery, PageviewsResponse};
use crate::application::services::NO_DATA_MESSAGE;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the daily pageview series for an article.
///
/// # Endpoint
///
/// `GET /api/pageviews`
///
/// # Query Parameters
///
/// - `title` (required): Article title as typed, spaces allowed
/// - `start` (optional): First day, `YYYY-MM-DD` (default: configured start date)
/// - `end` (optional): Last day, `YYYY-MM-DD` (default: today)
///
/// # Response
///
/// ```json
/// {
///   "title": "Machine learning",
///   "article": "Machine_learning",
///   "project": "en.wikipedia",
///   "start": "2024-09-01",
///   "end": "2024-09-02",
///   "status": "ok",
///   "message": null,
///   "total_views": 215,
///   "peak": { "date": "2024-09-01", "views": 120 },
///   "items": [
///     { "date": "2024-09-01", "views": 120 },
///     { "date": "2024-09-02", "views": 95 }
///   ]
/// }
/// ```
///
/// Upstream failures are not errors: the response has `"status": "no_data"`,
/// an empty `items` array and a `reason` naming the failure kind.
///
/// # Errors
///
/// Returns 400 Bad Request if a date is malformed, the title is blank or the
/// range is reversed.
pub async fn pageviews_handler(
    State(state): State<AppState>,
    query: Result<Query<PageviewQuery>, QueryRejection>,
) -> Result<Json<PageviewsResponse>, AppError> {
    let Query(query) =
        query.map_err(|rejection| AppError::bad_request(rejection.body_text(), json!({})))?;
    let params = query.into_params(state.default_start_date, Local::now().date_naive())?;

    let response = match state.pageview_service.try_fetch(&params).await {
        Ok(series) if series.is_empty() => PageviewsResponse {
            message: Some(NO_DATA_MESSAGE.to_string()),
            ..PageviewsResponse::from_series(&params, &series)
        },
        Ok(series) => PageviewsResponse::from_series(&params, &series),
        Err(e) => PageviewsResponse::no_data(&params, e.kind(), NO_DATA_MESSAGE.to_string()),
    };

    Ok(Json(response))
}
