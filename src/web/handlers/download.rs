//! JSON download of a rendered NDC result.

use axum::{
    Form, Json,
    http::header,
    response::IntoResponse,
};

use crate::web::forms::ResultDocument;

/// Echoes the hidden result fields back as an attachment.
///
/// # Endpoint
///
/// `POST /download_json`
///
/// No upstream call is made; the document is exactly what the page rendered.
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
pub async fn download_json_handler(Form(document): Form<ResultDocument>) -> impl IntoResponse {
    (
        [(
            header::CONTENT_DISPOSITION,
            "attachment; filename=result.json",
        )],
        Json(document),
    )
}
