//! Chart-or-message presentation of a pageview query.

use std::sync::Arc;

use tracing::{error, instrument};

use super::chart_service::{Chart, ChartService};
use super::pageview_service::PageviewService;
use crate::domain::entities::QueryParams;
use crate::domain::sources::PageviewSource;

/// Text shown in place of a chart when a query yields no rows.
pub const NO_DATA_MESSAGE: &str = "No data available for the given article and date range.";

/// Outcome of presenting a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    Chart(Chart),
    Message(String),
}

impl Presentation {
    pub fn no_data() -> Self {
        Self::Message(NO_DATA_MESSAGE.to_string())
    }

    pub fn chart(&self) -> Option<&Chart> {
        match self {
            Self::Chart(chart) => Some(chart),
            Self::Message(_) => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Chart(_) => None,
            Self::Message(message) => Some(message),
        }
    }
}

/// Turns a query into a rendered chart, or the fallback message when there is
/// nothing to draw.
pub struct PresenterService<S: PageviewSource + ?Sized> {
    pageviews: Arc<PageviewService<S>>,
    charts: ChartService,
}

impl<S: PageviewSource + ?Sized> PresenterService<S> {
    /// Creates a presenter over a pageview service and chart renderer.
    pub fn new(pageviews: Arc<PageviewService<S>>, charts: ChartService) -> Self {
        Self { pageviews, charts }
    }

    /// Fetches the series for `query` and renders it.
    ///
    /// Returns [`Presentation::Message`] with [`NO_DATA_MESSAGE`] when the
    /// series is empty or cannot be drawn.
    #[instrument(skip(self, query), fields(title = %query.title))]
    pub async fn present(&self, query: &QueryParams) -> Presentation {
        let series = self.pageviews.fetch(query).await;
        if series.is_empty() {
            return Presentation::no_data();
        }

        match self.charts.render_line_chart(&series).await {
            Ok(chart) => Presentation::Chart(chart),
            Err(e) => {
                error!(error = %e, "Failed to render pageview chart");
                Presentation::no_data()
            }
        }
    }
}
