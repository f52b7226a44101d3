//! Application layer services implementing the pageview pipeline.
//!
//! Services are plain structs that the HTTP layer calls into. They hold no
//! per-request state, so a single instance is shared by all handlers.
//!
//! # Available Services
//!
//! - [`services::pageview_service::PageviewService`] - Fetches a series, collapsing failures to "no data"
//! - [`services::chart_service::ChartService`] - Renders a series as an SVG line chart
//! - [`services::presenter_service::PresenterService`] - Chart or fallback message for a query

pub mod services;
