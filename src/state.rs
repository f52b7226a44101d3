//! Shared application state injected into every handler.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::application::services::{ChartService, PageviewService, PresenterService};
use crate::domain::sources::PageviewSource;

/// Services and form defaults shared by all handlers.
///
/// Cloning is cheap; every field is reference-counted or `Copy`.
#[derive(Clone)]
pub struct AppState {
    pub pageview_service: Arc<PageviewService<dyn PageviewSource>>,
    pub presenter_service: Arc<PresenterService<dyn PageviewSource>>,
    /// Start date pre-filled in the form.
    pub default_start_date: NaiveDate,
}

impl AppState {
    /// Wires the services around a single pageview source.
    pub fn new(
        source: Arc<dyn PageviewSource>,
        charts: ChartService,
        default_start_date: NaiveDate,
    ) -> Self {
        let pageview_service = Arc::new(PageviewService::new(source));
        let presenter_service = Arc::new(PresenterService::new(pageview_service.clone(), charts));

        Self {
            pageview_service,
            presenter_service,
            default_start_date,
        }
    }
}
