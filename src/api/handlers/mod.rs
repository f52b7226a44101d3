//! HTTP request handlers for API endpoints.

pub mod health;
pub mod pageviews;

pub use health::health_handler;
pub use pageviews::pageviews_handler;
