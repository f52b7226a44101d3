//! Parsing of the per-article pageviews response body.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::entities::query::COMPACT_DATE_FORMAT;
use crate::domain::entities::{PageviewRow, PageviewSeries};
use crate::domain::sources::FetchError;

/// Top-level response object. `items` is absent when the API has nothing for
/// the requested title and range.
#[derive(Debug, Deserialize)]
struct PageviewsResponse {
    items: Option<Vec<PageviewItem>>,
}

/// One day of pageviews as returned by the API.
///
/// Other fields (`project`, `article`, `granularity`, `access`, `agent`) are
/// ignored.
#[derive(Debug, Deserialize)]
struct PageviewItem {
    /// `YYYYMMDDHH`; only the first eight characters are meaningful.
    timestamp: String,
    views: u64,
}

/// Parses a raw response body into a series labeled `label`.
///
/// Rows keep the order the API delivered them in.
///
/// # Errors
///
/// - [`FetchError::Decode`] if the body is not the expected JSON shape
/// - [`FetchError::MissingItems`] if the JSON has no `items` field
/// - [`FetchError::InvalidTimestamp`] if an item timestamp has no leading date
pub fn parse_pageviews(label: &str, body: &str) -> Result<PageviewSeries, FetchError> {
    let response: PageviewsResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode {
            message: e.to_string(),
            body: body.to_string(),
        })?;

    let items = response.items.ok_or(FetchError::MissingItems)?;

    let rows = items
        .into_iter()
        .map(|item| {
            let date = timestamp_date(&item.timestamp)?;
            Ok(PageviewRow::new(date, item.views))
        })
        .collect::<Result<Vec<_>, FetchError>>()?;

    Ok(PageviewSeries::new(label, rows))
}

/// Extracts the calendar date from the first eight characters of a timestamp.
fn timestamp_date(timestamp: &str) -> Result<NaiveDate, FetchError> {
    let prefix: String = timestamp.chars().take(8).collect();
    if prefix.len() != 8 {
        return Err(FetchError::InvalidTimestamp(timestamp.to_string()));
    }

    NaiveDate::parse_from_str(&prefix, COMPACT_DATE_FORMAT)
        .map_err(|_| FetchError::InvalidTimestamp(timestamp.to_string()))
}
