//! NDC → RXCUI page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::IntoResponse};
use validator::Validate;

use crate::domain::entities::NdcTranslation;
use crate::state::AppState;
use crate::web::forms::{NdcForm, first_message};

/// Renders `templates/ndc.html`.
///
/// Shows the form, then either the translation (RXCUI, TTY, name, RxNav
/// link, download button) or a single error line.
#[derive(Template, WebTemplate)]
#[template(path = "ndc.html")]
pub struct NdcPageTemplate {
    pub ndc: String,
    pub show_urls: bool,
    pub result: Option<NdcTranslation>,
    pub error: Option<String>,
}

impl NdcPageTemplate {
    pub fn empty() -> Self {
        Self {
            ndc: String::new(),
            show_urls: false,
            result: None,
            error: None,
        }
    }
}

/// `GET /`
pub async fn ndc_form_handler() -> impl IntoResponse {
    NdcPageTemplate::empty()
}

/// Converts a submitted NDC.
///
/// # Endpoint
///
/// `POST /` with form fields `ndc` and optional `show_urls`.
///
/// Always answers `200 OK`; upstream failures are rendered as
/// `Error: <message>` in place of the result.
pub async fn ndc_convert_handler(
    State(state): State<AppState>,
    Form(form): Form<NdcForm>,
) -> impl IntoResponse {
    let form = form.trimmed();
    let mut page = NdcPageTemplate {
        ndc: form.ndc.clone(),
        show_urls: form.show_urls(),
        ..NdcPageTemplate::empty()
    };

    if let Err(errors) = form.validate() {
        page.error = Some(first_message(&errors));
        return page;
    }

    match state.translator.translate_ndc(&form.ndc).await {
        Ok(translation) => page.result = Some(translation),
        Err(e) => {
            tracing::info!(ndc = %form.ndc, error = %e, "NDC translation failed");
            page.error = Some(e.to_string());
        }
    }

    page
}
