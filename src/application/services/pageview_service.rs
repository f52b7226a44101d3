//! Pageview lookup service.

use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::domain::entities::{PageviewSeries, QueryParams};
use crate::domain::sources::{FetchError, PageviewSource};

/// Fetches daily pageview series from a [`PageviewSource`].
///
/// [`fetch`](Self::fetch) never fails: transport errors, error statuses,
/// responses without data and undecodable bodies are logged and turned into an
/// empty series. [`try_fetch`](Self::try_fetch) keeps the cause for callers
/// that want it.
pub struct PageviewService<S: PageviewSource + ?Sized> {
    source: Arc<S>,
}

impl<S: PageviewSource + ?Sized> PageviewService<S> {
    /// Creates a new pageview service over `source`.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Fetches the series for `query`, or an empty series labeled with the
    /// title on any failure.
    pub async fn fetch(&self, query: &QueryParams) -> PageviewSeries {
        self.try_fetch(query)
            .await
            .unwrap_or_else(|_| PageviewSeries::empty(query.title.display()))
    }

    /// Fetches the series for `query`, logging any failure before returning it.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] reported by the source.
    #[instrument(skip(self, query), fields(title = %query.title))]
    pub async fn try_fetch(&self, query: &QueryParams) -> Result<PageviewSeries, FetchError> {
        match self.source.daily_pageviews(query).await {
            Ok(series) => {
                info!(rows = series.len(), "Fetched pageviews");
                Ok(series)
            }
            Err(err) => {
                log_fetch_error(query.title.display(), &err);
                Err(err)
            }
        }
    }

    /// Describes the underlying source.
    pub fn source_description(&self) -> String {
        self.source.describe()
    }
}

fn log_fetch_error(title: &str, err: &FetchError) {
    match err {
        FetchError::MissingItems => {
            warn!(kind = err.kind(), "No data found for {title}");
        }
        FetchError::Transport(_) | FetchError::Status(_) => {
            error!(kind = err.kind(), "Error fetching data for {title}: {err}");
        }
        FetchError::Decode { message, body } => {
            error!(kind = err.kind(), "Error decoding JSON for {title}: {message}");
            if body.is_empty() {
                warn!("No response content to display for {title}.");
            } else {
                info!("Raw response content for {title}: {body}");
            }
        }
        FetchError::InvalidTimestamp(_) => {
            error!(kind = err.kind(), "Error reading pageviews for {title}: {err}");
        }
    }
}
