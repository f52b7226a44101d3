//! HTTP server initialization and runtime setup.
//!
//! Builds the upstream client and services, then runs the Axum server until
//! Ctrl-C.

use crate::application::services::ChartService;
use crate::config::Config;
use crate::domain::sources::PageviewSource;
use crate::infrastructure::wikimedia::WikimediaClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application state for `config`.
///
/// # Errors
///
/// Returns an error if the upstream client cannot be constructed.
pub fn build_state(config: &Config) -> Result<AppState> {
    let client = WikimediaClient::new(&config.api_base_url, &config.user_agent)?;
    let source: Arc<dyn PageviewSource> = Arc::new(client);
    tracing::info!("Pageview source: {}", source.describe());

    Ok(AppState::new(
        source,
        ChartService::new(config.chart_options()),
        config.default_start_date,
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The upstream client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    let app = app_router(state);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);
    if config.share {
        tracing::info!("Sharing enabled: reachable from other hosts on port {}", addr.port());
    }

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
