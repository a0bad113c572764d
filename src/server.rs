//! HTTP server initialization and runtime setup.
//!
//! Builds the RxNav client and translator, then runs the Axum server until
//! Ctrl-C.

use crate::application::services::TranslationService;
use crate::config::Config;
use crate::infrastructure::rxnav::RxNavClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = RxNavClient::new(config.rxnav_timeout()).context("Failed to build HTTP client")?;
    tracing::info!(
        "RxNav client ready (timeout {}s)",
        client.timeout().as_secs()
    );

    let translator = Arc::new(TranslationService::new(
        Arc::new(client),
        config.rxnav_base_url.clone(),
    ));

    let state = AppState::new(translator, config.annotate_ndc_names);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
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
