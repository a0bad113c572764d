//! Handlers for translation endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::translate::NdcsQuery;
use crate::domain::entities::{NdcTranslation, RxcuiTranslation};
use crate::error::AppError;
use crate::state::AppState;

/// Translates an NDC to its RXCUI and properties.
///
/// # Endpoint
///
/// `GET /api/ndc/{ndc}`
///
/// # Response
///
/// ```json
/// {
///   "ndc": "0069-4405-68",
///   "rxcui": "206765",
///   "term_type": "IN",
///   "name": "Losartan",
///   "ndc_url": "https://rxnav.nlm.nih.gov/REST/ndcstatus.json?ndc=0069-4405-68",
///   "rxcui_url": "https://rxnav.nlm.nih.gov/REST/rxcui/206765/properties.json"
/// }
/// ```
///
/// # Errors
///
/// - **404 Not Found**: RxNav has no RXCUI or properties for the NDC
/// - **502 Bad Gateway**: RxNav answered with a non-200 status or was unreachable
pub async fn ndc_handler(
    State(state): State<AppState>,
    Path(ndc): Path<String>,
) -> Result<Json<NdcTranslation>, AppError> {
    let translation = state.translator.translate_ndc(&ndc).await?;
    Ok(Json(translation))
}

/// Lists the NDCs of an RXCUI.
///
/// # Endpoint
///
/// `GET /api/rxcui/{rxcui}/ndcs?names=true`
///
/// # Response
///
/// ```json
/// {
///   "rxcui": "206765",
///   "ndcs": [
///     { "ndc": "0002-1200-30", "name": "Losartan 50 MG" },
///     { "ndc": "0002-1200-50", "name": "Unknown" }
///   ],
///   "annotated": true,
///   "source_url": "https://rxnav.nlm.nih.gov/REST/rxcui/206765/ndcs.json"
/// }
/// ```
///
/// # Errors
///
/// - **404 Not Found**: RxNav returned no NDC list
/// - **502 Bad Gateway**: RxNav answered with a non-200 status or was unreachable
pub async fn rxcui_ndcs_handler(
    State(state): State<AppState>,
    Path(rxcui): Path<String>,
    Query(query): Query<NdcsQuery>,
) -> Result<Json<RxcuiTranslation>, AppError> {
    let annotate = query.names.unwrap_or(state.annotate_ndc_names);
    let translation = state.translator.translate_rxcui(&rxcui, annotate).await?;
    Ok(Json(translation))
}
