//! Top-level router configuration combining pages and API routes.
//!
//! # Route Structure
//!
//! - `GET|POST /`          - NDC → RXCUI page
//! - `GET|POST /rxcui`     - RXCUI → NDC page
//! - `POST /download_json` - JSON download of a rendered result
//! - `GET  /health`        - Liveness
//! - `/api/*`              - JSON translation API
//! - `/static/*`           - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// All routes with state applied, without path normalization.
///
/// Used directly by integration tests.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
