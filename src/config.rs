//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="127.0.0.1:7860"
//! export SHARE="true"                      # bind on all interfaces
//! export PAGEVIEWS_API_BASE="https://wikimedia.org/api/rest_v1"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `127.0.0.1:7860`)
//! - `SHARE` - When `true`, the listen port is bound on `0.0.0.0` (default: `false`)
//! - `PAGEVIEWS_API_BASE` - Wikimedia REST API root
//! - `PAGEVIEWS_USER_AGENT` - Browser identity sent upstream
//! - `DEFAULT_START_DATE` - Form default start date, `YYYY-MM-DD` (default: `2024-01-01`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CHART_WIDTH` / `CHART_HEIGHT` - Chart size in pixels (default: `960` x `480`)
//! - `CHART_MAX_X_LABELS` - Most date labels on the x axis (default: `8`)

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::env;
use std::net::SocketAddr;

use crate::application::services::ChartOptions;
use crate::infrastructure::wikimedia::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

/// Default bind address for local use.
pub const DEFAULT_LISTEN: &str = "127.0.0.1:7860";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// When true, the server accepts connections from other hosts.
    pub share: bool,
    pub api_base_url: String,
    pub user_agent: String,
    /// Start date pre-filled in the form.
    pub default_start_date: NaiveDate,
    pub log_level: String,
    pub log_format: String,
    pub chart_width: u32,
    pub chart_height: u32,
    pub chart_max_x_labels: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DEFAULT_START_DATE` is set but not a `YYYY-MM-DD`
    /// date, or a chart setting is set but not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.to_string());

        let share = env::var("SHARE")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let api_base_url =
            env::var("PAGEVIEWS_API_BASE").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let user_agent =
            env::var("PAGEVIEWS_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let default_start_date = match env::var("DEFAULT_START_DATE") {
            Ok(value) => NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                .with_context(|| format!("DEFAULT_START_DATE must be YYYY-MM-DD, got '{value}'"))?,
            Err(_) => default_start_date(),
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let chart_defaults = ChartOptions::default();
        let chart_width = parse_env("CHART_WIDTH", chart_defaults.width)?;
        let chart_height = parse_env("CHART_HEIGHT", chart_defaults.height)?;
        let chart_max_x_labels = parse_env("CHART_MAX_X_LABELS", chart_defaults.max_x_labels)?;

        Ok(Self {
            listen_addr,
            share,
            api_base_url,
            user_agent,
            default_start_date,
            log_level,
            log_format,
            chart_width,
            chart_height,
            chart_max_x_labels,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not a socket address
    /// - `api_base_url` is not an http(s) URL
    /// - `user_agent` is empty
    /// - `log_format` is not `text` or `json`
    /// - a chart dimension or the label count is zero
    pub fn validate(&self) -> Result<()> {
        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "PAGEVIEWS_API_BASE must start with 'http://' or 'https://', got '{}'",
                self.api_base_url
            );
        }

        if self.user_agent.trim().is_empty() {
            anyhow::bail!("PAGEVIEWS_USER_AGENT must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.chart_width == 0 || self.chart_height == 0 {
            anyhow::bail!(
                "CHART_WIDTH and CHART_HEIGHT must be positive, got {}x{}",
                self.chart_width,
                self.chart_height
            );
        }

        if self.chart_max_x_labels == 0 {
            anyhow::bail!("CHART_MAX_X_LABELS must be positive");
        }

        Ok(())
    }

    /// Rendering options for the chart service.
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            width: self.chart_width,
            height: self.chart_height,
            max_x_labels: self.chart_max_x_labels,
        }
    }

    /// Address the server binds to.
    ///
    /// With `share` enabled the configured port is bound on every interface.
    ///
    /// # Errors
    ///
    /// Returns an error if `listen_addr` is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let mut addr: SocketAddr = self
            .listen_addr
            .parse()
            .with_context(|| format!("Invalid listen address '{}'", self.listen_addr))?;

        if self.share {
            addr.set_ip([0, 0, 0, 0].into());
        }

        Ok(addr)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Share: {}", self.share);
        tracing::info!("  Pageviews API: {}", self.api_base_url);
        tracing::info!("  Default start date: {}", self.default_start_date);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Chart: {}x{}, up to {} date labels",
            self.chart_width,
            self.chart_height,
            self.chart_max_x_labels
        );
    }
}

impl Default for Config {
    fn default() -> Self {
        let chart = ChartOptions::default();
        Self {
            listen_addr: DEFAULT_LISTEN.to_string(),
            share: false,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_start_date: default_start_date(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            chart_width: chart.width,
            chart_height: chart.height,
            chart_max_x_labels: chart.max_x_labels,
        }
    }
}

/// Reads a numeric variable, falling back to `default` when unset.
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{key} must be a number, got '{value}'")),
        Err(_) => Ok(default),
    }
}

/// 2024-01-01, the form's default start date.
fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}
