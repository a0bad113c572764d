//! API route configuration.

use crate::api::handlers::{ndc_handler, rxcui_ndcs_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Translation API, nested under `/api`.
///
/// # Endpoints
///
/// - `GET /ndc/{ndc}` - NDC → RXCUI with properties
/// - `GET /rxcui/{rxcui}/ndcs` - RXCUI → NDC list (`?names=true|false`)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ndc/{ndc}", get(ndc_handler))
        .route("/rxcui/{rxcui}/ndcs", get(rxcui_ndcs_handler))
}
