//! HTTP client for the Wikimedia pageviews API.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

use super::{ACCESS, AGENT, PROJECT, parse_pageviews};
use crate::domain::entities::{PageviewSeries, QueryParams};
use crate::domain::sources::{FetchError, PageviewSource};

/// [`PageviewSource`] backed by the Wikimedia REST API.
///
/// Issues exactly one GET per lookup. No retries, no caching and no timeout
/// beyond the `reqwest` defaults.
#[derive(Debug, Clone)]
pub struct WikimediaClient {
    http: reqwest::Client,
    base_url: Url,
}

impl WikimediaClient {
    /// Creates a client for the API rooted at `base_url`, identifying itself
    /// with `user_agent`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("Invalid API base URL: {base_url}"))?;

        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            anyhow::bail!("API base URL must be an http(s) URL, got '{}'", base_url);
        }

        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, base_url })
    }

    /// Builds the per-article daily pageviews URL for `query`.
    ///
    /// The title is normalized to its path form and then percent-encoded as a
    /// single path segment.
    pub fn request_url(&self, query: &QueryParams) -> Url {
        let title = query.title.path_segment();
        let start = query.start_compact();
        let end = query.end_compact();

        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                "metrics",
                "pageviews",
                "per-article",
                PROJECT,
                ACCESS,
                AGENT,
                title.as_str(),
                "daily",
                start.as_str(),
                end.as_str(),
            ]);
        }
        url
    }
}

#[async_trait]
impl PageviewSource for WikimediaClient {
    async fn daily_pageviews(&self, query: &QueryParams) -> Result<PageviewSeries, FetchError> {
        let url = self.request_url(query);
        debug!(url = %url, "Requesting pageviews");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(status = %status, "Received pageviews response");

        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        parse_pageviews(query.title.display(), &body)
    }

    fn describe(&self) -> String {
        format!("{} ({PROJECT})", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::wikimedia::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
    use chrono::NaiveDate;

    fn client() -> WikimediaClient {
        WikimediaClient::new(DEFAULT_BASE_URL, DEFAULT_USER_AGENT).unwrap()
    }

    fn query(title: &str) -> QueryParams {
        QueryParams::new(
            title,
            NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 9, 30).unwrap(),
        )
    }

    #[test]
    fn test_request_url() {
        let url = client().request_url(&query("Machine learning"));

        assert_eq!(
            url.as_str(),
            "https://wikimedia.org/api/rest_v1/metrics/pageviews/per-article/en.wikipedia/all-access/all-agents/Machine_learning/daily/20240901/20240930"
        );
    }

    #[test]
    fn test_request_url_with_trailing_slash_base() {
        let client =
            WikimediaClient::new("https://wikimedia.org/api/rest_v1/", DEFAULT_USER_AGENT).unwrap();
        let url = client.request_url(&query("Rust"));

        assert_eq!(
            url.path(),
            "/api/rest_v1/metrics/pageviews/per-article/en.wikipedia/all-access/all-agents/Rust/daily/20240901/20240930"
        );
    }

    #[test]
    fn test_request_url_encodes_reserved_characters() {
        let url = client().request_url(&query("AC/DC"));

        assert!(url.path().contains("/all-agents/AC%2FDC/daily/"));
    }

    #[test]
    fn test_rejects_non_http_base() {
        assert!(WikimediaClient::new("ftp://example.com", DEFAULT_USER_AGENT).is_err());
        assert!(WikimediaClient::new("not a url", DEFAULT_USER_AGENT).is_err());
    }
}
