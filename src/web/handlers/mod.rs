//! HTML template rendering handlers for the pageview form.

mod form;
mod plot;

pub use form::{FormTemplate, form_handler};
pub use plot::plot_handler;
