//! Query parameters for a single pageview lookup.

use chrono::NaiveDate;

use super::ArticleTitle;

/// Compact date layout used in API paths and timestamps (`YYYYMMDD`).
pub const COMPACT_DATE_FORMAT: &str = "%Y%m%d";

/// One form submission: article title and inclusive date range.
///
/// `start <= end` is not enforced here. Out-of-order ranges are passed to the
/// upstream API as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub title: ArticleTitle,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl QueryParams {
    pub fn new(title: impl Into<ArticleTitle>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            title: title.into(),
            start,
            end,
        }
    }

    /// Start date as `YYYYMMDD`.
    pub fn start_compact(&self) -> String {
        self.start.format(COMPACT_DATE_FORMAT).to_string()
    }

    /// End date as `YYYYMMDD`.
    pub fn end_compact(&self) -> String {
        self.end.format(COMPACT_DATE_FORMAT).to_string()
    }

    /// Returns true if the range runs backwards.
    pub fn is_range_reversed(&self) -> bool {
        self.start > self.end
    }
}
