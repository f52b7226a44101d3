//! Business logic services for the application layer.

pub mod chart_service;
pub mod pageview_service;
pub mod presenter_service;

pub use chart_service::{Chart, ChartOptions, ChartService};
pub use pageview_service::PageviewService;
pub use presenter_service::{NO_DATA_MESSAGE, Presentation, PresenterService};
