//! Line chart rendering for pageview series.

use anyhow::{Context, Result};
use plotters::prelude::*;
use tracing::debug;

use crate::domain::entities::PageviewSeries;

/// Date layout used on the x axis.
const AXIS_DATE_FORMAT: &str = "%Y-%m-%d";

/// Rendering options for pageview charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    /// Upper bound on the number of date labels drawn on the x axis.
    pub max_x_labels: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 960,
            height: 480,
            max_x_labels: 8,
        }
    }
}

/// A rendered chart ready to embed in a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    /// Caption drawn above the plot, e.g. `Pageviews for 'Rust'`.
    pub caption: String,
    /// Standalone `<svg>` document.
    pub svg: String,
    /// Number of plotted days.
    pub points: usize,
}

/// Renders pageview series as SVG line charts.
#[derive(Debug, Clone, Default)]
pub struct ChartService {
    options: ChartOptions,
}

impl ChartService {
    pub fn new(options: ChartOptions) -> Self {
        Self { options }
    }

    /// Draws views against date for `series`, captioned with its label.
    ///
    /// Drawing runs on the blocking pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the series is empty or drawing fails.
    pub async fn render_line_chart(&self, series: &PageviewSeries) -> Result<Chart> {
        if series.is_empty() {
            anyhow::bail!("Cannot render a chart for an empty series");
        }

        let caption = format!("Pageviews for '{}'", series.label());
        let label = series.label().to_string();
        let x_labels: Vec<String> = series
            .rows()
            .iter()
            .map(|row| row.date.format(AXIS_DATE_FORMAT).to_string())
            .collect();
        let y_data: Vec<i64> = series
            .rows()
            .iter()
            .map(|row| i64::try_from(row.views).unwrap_or(i64::MAX))
            .collect();
        let options = self.options;
        let draw_caption = caption.clone();

        let svg = tokio::task::spawn_blocking(move || {
            draw_svg(&draw_caption, &label, &x_labels, &y_data, options)
        })
        .await
        .context("Chart drawing task failed")??;

        debug!(points = series.len(), bytes = svg.len(), "Rendered pageview chart");

        Ok(Chart {
            caption,
            svg,
            points: series.len(),
        })
    }
}

fn draw_svg(
    caption: &str,
    label: &str,
    x_labels: &[String],
    y_data: &[i64],
    options: ChartOptions,
) -> Result<String> {
    let (y_min, y_max) = y_range(y_data);
    let x_max = x_labels.len().saturating_sub(1).max(1);

    let line_color = RGBColor(31, 119, 180);
    let grid_color = RGBColor(225, 225, 225);
    let text_color = RGBColor(60, 60, 60);

    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (options.width, options.height))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(caption, ("sans-serif", 22).into_font().color(&text_color))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(0..x_max, y_min..y_max)?;

        chart
            .configure_mesh()
            .x_desc("date")
            .y_desc("views")
            .x_labels(x_labels.len().min(options.max_x_labels))
            .y_labels(8)
            .light_line_style(ShapeStyle::from(&grid_color).stroke_width(1))
            .bold_line_style(ShapeStyle::from(&grid_color).stroke_width(1))
            .x_label_style(("sans-serif", 12).into_font().color(&text_color))
            .y_label_style(("sans-serif", 12).into_font().color(&text_color))
            .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
            .y_label_formatter(&|y| format_thousands(*y))
            .draw()?;

        chart
            .draw_series(LineSeries::new(
                y_data.iter().enumerate().map(|(i, &y)| (i, y)),
                ShapeStyle::from(&line_color).stroke_width(2),
            ))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], line_color.stroke_width(2))
            });

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(&grid_color)
            .label_font(("sans-serif", 13).into_font().color(&text_color))
            .draw()?;

        root.present()?;
    }

    Ok(buffer)
}

/// Y axis bounds with 10% padding, never below zero and never degenerate.
fn y_range(values: &[i64]) -> (i64, i64) {
    let (Some(&min_val), Some(&max_val)) = (values.iter().min(), values.iter().max()) else {
        return (0, 100);
    };

    let padding = ((max_val - min_val) as f64 * 0.1).max(1.0) as i64;

    let y_min = (min_val - padding).max(0);
    let y_max = max_val.saturating_add(padding);

    (y_min, y_max)
}

/// Formats an integer with comma thousands separators.
fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
