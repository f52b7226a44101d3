//! Web form route configuration.

use crate::state::AppState;
use crate::web::handlers::{form_handler, plot_handler};
use axum::{Router, routing::get};

/// Form routes.
///
/// # Endpoints
///
/// - `GET /` - Empty form with default dates and example inputs
/// - `GET /plot` - Form submission; renders the chart or fallback message
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(form_handler))
        .route("/plot", get(plot_handler))
}
