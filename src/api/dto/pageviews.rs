//! DTOs for the pageview lookup, shared by the JSON API and the web form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::{NoneAsEmptyString, serde_as};
use validator::{Validate, ValidationError};

use crate::domain::entities::{PageviewRow, PageviewSeries, QueryParams};
use crate::error::AppError;
use crate::infrastructure::wikimedia::PROJECT;

/// Query string of `GET /plot` and `GET /api/pageviews`.
///
/// Browsers submit empty date inputs as `start=`; those are read as missing
/// and replaced by the form defaults.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PageviewQuery {
    #[serde(default)]
    #[validate(
        length(max = 256, message = "Article title must be at most 256 characters"),
        custom(function = "validate_title")
    )]
    pub title: String,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub start: Option<NaiveDate>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Article title must not be empty".into());
        return Err(error);
    }
    Ok(())
}

impl PageviewQuery {
    /// Validates the query and resolves missing dates.
    ///
    /// `default_start` fills a missing start date and `today` a missing end
    /// date. The title is trimmed; inner spaces are kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the title is blank or too long, or
    /// if the resolved start date falls after the end date.
    pub fn into_params(
        self,
        default_start: NaiveDate,
        today: NaiveDate,
    ) -> Result<QueryParams, AppError> {
        self.validate()?;

        let params = QueryParams::new(
            self.title.trim(),
            self.start.unwrap_or(default_start),
            self.end.unwrap_or(today),
        );

        if params.is_range_reversed() {
            return Err(AppError::bad_request(
                "Start date must not be after end date",
                json!({ "start": params.start, "end": params.end }),
            ));
        }

        Ok(params)
    }
}

/// One day in a pageviews response.
#[derive(Debug, Serialize)]
pub struct PageviewItem {
    pub date: NaiveDate,
    pub views: u64,
}

impl From<&PageviewRow> for PageviewItem {
    fn from(row: &PageviewRow) -> Self {
        Self {
            date: row.date,
            views: row.views,
        }
    }
}

/// Response of `GET /api/pageviews`.
///
/// `status` is `"ok"` when the upstream returned data and `"no_data"`
/// otherwise; `reason` then names the failure kind.
#[derive(Debug, Serialize)]
pub struct PageviewsResponse {
    pub title: String,
    pub article: String,
    pub project: &'static str,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    pub message: Option<String>,
    pub total_views: u64,
    /// Busiest day in the range.
    pub peak: Option<PageviewItem>,
    pub items: Vec<PageviewItem>,
}

impl PageviewsResponse {
    pub fn from_series(params: &QueryParams, series: &PageviewSeries) -> Self {
        Self {
            title: series.label().to_string(),
            article: params.title.path_segment(),
            project: PROJECT,
            start: params.start,
            end: params.end,
            status: if series.is_empty() { "no_data" } else { "ok" },
            reason: None,
            message: None,
            total_views: series.total_views(),
            peak: series.peak().as_ref().map(PageviewItem::from),
            items: series.rows().iter().map(PageviewItem::from).collect(),
        }
    }

    pub fn no_data(params: &QueryParams, reason: &'static str, message: String) -> Self {
        Self {
            title: params.title.display().to_string(),
            article: params.title.path_segment(),
            project: PROJECT,
            start: params.start,
            end: params.end,
            status: "no_data",
            reason: Some(reason),
            message: Some(message),
            total_views: 0,
            peak: None,
            items: Vec::new(),
        }
    }
}
