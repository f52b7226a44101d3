//! # Wikipedia Pageview Analyzer
//!
//! Fetches daily pageview counts for an English Wikipedia article from the
//! Wikimedia REST API and renders them as a line chart behind a small web form.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Titles, queries, series and the source trait
//! - **Application Layer** ([`application`]) - Fetch, chart and present services
//! - **Infrastructure Layer** ([`infrastructure`]) - Wikimedia HTTP client
//! - **API Layer** ([`api`]) - JSON endpoints, DTOs and middleware
//! - **Web Layer** ([`web`]) - HTML form and chart output
//!
//! ## Pipeline
//!
//! 1. The form submits a title and an inclusive date range
//! 2. [`application::services::PageviewService`] asks the source for the series;
//!    every failure collapses into an empty series
//! 3. [`application::services::PresenterService`] renders a chart, or returns
//!    the "no data" message for an empty series
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run                      # http://127.0.0.1:7860
//! cargo run -- --share           # bind on all interfaces
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        Chart, ChartService, NO_DATA_MESSAGE, PageviewService, Presentation, PresenterService,
    };
    pub use crate::domain::entities::{ArticleTitle, PageviewRow, PageviewSeries, QueryParams};
    pub use crate::domain::sources::{FetchError, PageviewSource};
    pub use crate::error::AppError;
    pub use crate::infrastructure::wikimedia::WikimediaClient;
    pub use crate::state::AppState;
}
