//! Form page handler and template.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use chrono::Local;

use crate::state::AppState;
use crate::web::form::{
    APP_DESCRIPTION, APP_TITLE, EXAMPLES, FormExample, FormOutput, FormValues, OUTPUT_LABEL,
};

/// Template for the pageview form.
///
/// Renders `templates/index.html` with:
/// - Title, start date and end date inputs
/// - Example inputs as links
/// - Output panel holding an inline SVG chart or a plain-text message
///
/// The chart draws its own caption; `chart_caption` only labels the figure
/// for screen readers.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct FormTemplate {
    pub app_title: &'static str,
    pub description: &'static str,
    pub output_label: &'static str,
    pub values: FormValues,
    pub examples: &'static [FormExample],
    pub chart_caption: String,
    pub chart_svg: Option<String>,
    pub message: Option<String>,
}

impl FormTemplate {
    pub fn new(values: FormValues, output: FormOutput) -> Self {
        let (chart_caption, chart_svg, message) = match output {
            FormOutput::Empty => (String::new(), None, None),
            FormOutput::Chart { caption, svg } => (caption, Some(svg), None),
            FormOutput::Message(message) => (String::new(), None, Some(message)),
        };

        Self {
            app_title: APP_TITLE,
            description: APP_DESCRIPTION,
            output_label: OUTPUT_LABEL,
            values,
            examples: &EXAMPLES,
            chart_caption,
            chart_svg,
            message,
        }
    }
}

/// Renders the empty form.
///
/// # Endpoint
///
/// `GET /`
///
/// # Defaults
///
/// Start date is the configured default, end date is today.
pub async fn form_handler(State(state): State<AppState>) -> impl IntoResponse {
    let values = FormValues::new("", state.default_start_date, Local::now().date_naive());
    FormTemplate::new(values, FormOutput::Empty)
}
