//! Form submission handler.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Local;
use tracing::{debug, info};

use super::FormTemplate;
use crate::api::dto::pageviews::PageviewQuery;
use crate::state::AppState;
use crate::web::form::{FormOutput, FormValues};

/// Renders the form together with the chart for the submitted inputs.
///
/// # Endpoint
///
/// `GET /plot?title=...&start=YYYY-MM-DD&end=YYYY-MM-DD`
///
/// # Output
///
/// - Inline SVG line chart when the article has pageviews in the range
/// - "No data available for the given article and date range." otherwise
///
/// # Errors
///
/// Malformed dates, a blank title or a reversed range re-render the form with
/// the problem in the output panel and status 400.
pub async fn plot_handler(
    State(state): State<AppState>,
    query: Result<Query<PageviewQuery>, QueryRejection>,
) -> impl IntoResponse {
    let today = Local::now().date_naive();
    let default_start = state.default_start_date;

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            debug!(error = %rejection, "Rejected form submission");
            let values = FormValues::new("", default_start, today);
            let output = FormOutput::Message(rejection.body_text());
            return (StatusCode::BAD_REQUEST, FormTemplate::new(values, output));
        }
    };

    let values = FormValues::new(
        query.title.clone(),
        query.start.unwrap_or(default_start),
        query.end.unwrap_or(today),
    );

    let params = match query.into_params(default_start, today) {
        Ok(params) => params,
        Err(e) => {
            debug!(error = e.message(), "Invalid form submission");
            let output = FormOutput::Message(e.message().to_string());
            return (StatusCode::BAD_REQUEST, FormTemplate::new(values, output));
        }
    };

    info!(title = %params.title, start = %params.start, end = %params.end, "Plotting pageviews");

    let presentation = state.presenter_service.present(&params).await;

    (StatusCode::OK, FormTemplate::new(values, presentation.into()))
}
