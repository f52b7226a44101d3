//! Pageview source trait and its failure kinds.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{PageviewSeries, QueryParams};

/// Why a pageview lookup produced no series.
///
/// Callers on the user-facing path collapse every variant into the same
/// "no data" outcome; the variants exist so the cause can be logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, connect, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// The upstream answered with a non-success status.
    #[error("upstream returned HTTP {0}")]
    Status(u16),

    /// A valid JSON body without an `items` collection.
    #[error("response contains no `items` field")]
    MissingItems,

    /// The body was not the expected JSON.
    #[error("failed to decode response body: {message}")]
    Decode { message: String, body: String },

    /// An item timestamp did not start with a `YYYYMMDD` date.
    #[error("invalid item timestamp `{0}`")]
    InvalidTimestamp(String),
}

impl FetchError {
    /// Short machine-readable name for logs and API responses.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Status(_) => "status",
            Self::MissingItems => "missing_items",
            Self::Decode { .. } => "decode",
            Self::InvalidTimestamp(_) => "invalid_timestamp",
        }
    }
}

/// Daily per-article pageview lookup.
///
/// # Implementations
///
/// - [`crate::infrastructure::wikimedia::WikimediaClient`] - Wikimedia REST API client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageviewSource: Send + Sync {
    /// Fetches daily views for `query.title` between `query.start` and
    /// `query.end`, both inclusive.
    ///
    /// # Returns
    ///
    /// - `Ok(series)` with one row per day the upstream reported, possibly empty
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] describing why no series could be produced.
    async fn daily_pageviews(&self, query: &QueryParams) -> Result<PageviewSeries, FetchError>;

    /// Human-readable description of where the data comes from.
    fn describe(&self) -> String;
}
