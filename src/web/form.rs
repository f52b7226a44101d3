//! Form state shared by the web handlers.

use chrono::NaiveDate;

use crate::application::services::Presentation;

/// Application name shown in the page header.
pub const APP_TITLE: &str = "Wikipedia Pageview Analyzer";

/// One-line description under the header.
pub const APP_DESCRIPTION: &str = "Enter a Wikipedia article title and a date range to visualize its daily pageview history.";

/// Label of the output panel.
pub const OUTPUT_LABEL: &str = "Pageviews Over Time";

/// Pre-filled inputs listed under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormExample {
    pub title: &'static str,
    pub start: &'static str,
    pub end: &'static str,
}

impl FormExample {
    /// Submission URL for this example.
    pub fn href(&self) -> String {
        plot_href(self.title, self.start, self.end)
    }
}

pub const EXAMPLES: [FormExample; 3] = [
    FormExample {
        title: "Machine learning",
        start: "2024-09-01",
        end: "2024-09-30",
    },
    FormExample {
        title: "Artificial intelligence",
        start: "2024-08-15",
        end: "2024-09-15",
    },
    FormExample {
        title: "Deep learning",
        start: "2024-07-01",
        end: "2024-12-31",
    },
];

/// Builds a `/plot` URL with a form-encoded query string.
pub fn plot_href(title: &str, start: &str, end: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("title", title)
        .append_pair("start", start)
        .append_pair("end", end)
        .finish();
    format!("/plot?{query}")
}

/// What the output panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutput {
    /// Nothing submitted yet.
    Empty,
    Chart { caption: String, svg: String },
    Message(String),
}

impl From<Presentation> for FormOutput {
    fn from(presentation: Presentation) -> Self {
        match presentation {
            Presentation::Chart(chart) => Self::Chart {
                caption: chart.caption,
                svg: chart.svg,
            },
            Presentation::Message(message) => Self::Message(message),
        }
    }
}

/// Values echoed back into the form inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub title: String,
    pub start: String,
    pub end: String,
}

impl FormValues {
    pub fn new(title: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            title: title.into(),
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_href_is_form_encoded() {
        assert_eq!(
            EXAMPLES[0].href(),
            "/plot?title=Machine+learning&start=2024-09-01&end=2024-09-30"
        );
    }

    #[test]
    fn test_plot_href_escapes_reserved_characters() {
        assert_eq!(
            plot_href("AT&T", "2024-01-01", "2024-01-31"),
            "/plot?title=AT%26T&start=2024-01-01&end=2024-01-31"
        );
    }

    #[test]
    fn test_form_values_use_iso_dates() {
        let values = FormValues::new(
            "Rust",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        );

        assert_eq!(values.start, "2024-01-01");
        assert_eq!(values.end, "2024-12-31");
    }
}
