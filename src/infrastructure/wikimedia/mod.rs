//! Wikimedia REST API pageviews integration.
//!
//! Provides [`WikimediaClient`], the production [`crate::domain::sources::PageviewSource`],
//! and the response parser it relies on.
//!
//! # Endpoint
//!
//! ```text
//! GET {base}/metrics/pageviews/per-article/{project}/{access}/{agent}/{title}/daily/{start}/{end}
//! ```

mod client;
mod response;

pub use client::WikimediaClient;
pub use response::parse_pageviews;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://wikimedia.org/api/rest_v1";

/// Wiki project queried for every article.
pub const PROJECT: &str = "en.wikipedia";

/// Access method filter (desktop, mobile app and mobile web combined).
pub const ACCESS: &str = "all-access";

/// Agent filter (users, spiders and automated agents combined).
pub const AGENT: &str = "all-agents";

/// Browser identity sent with every request. The API rejects clients that do
/// not identify themselves.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
