//! Converter page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    download_json_handler, ndc_convert_handler, ndc_form_handler, rxcui_convert_handler,
    rxcui_form_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Converter pages.
///
/// # Endpoints
///
/// - `GET  /` - NDC → RXCUI form
/// - `POST /` - NDC → RXCUI conversion
/// - `GET  /rxcui` - RXCUI → NDC form
/// - `POST /rxcui` - RXCUI → NDC conversion
/// - `POST /download_json` - Re-serialise a rendered result as `result.json`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(ndc_form_handler).post(ndc_convert_handler))
        .route("/rxcui", get(rxcui_form_handler).post(rxcui_convert_handler))
        .route("/download_json", post(download_json_handler))
}
