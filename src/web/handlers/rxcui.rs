//! RXCUI → NDC page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::IntoResponse};
use validator::Validate;

use crate::domain::entities::RxcuiTranslation;
use crate::state::AppState;
use crate::web::forms::{RxcuiForm, first_message};

/// Renders `templates/rxcui.html`.
#[derive(Template, WebTemplate)]
#[template(path = "rxcui.html")]
pub struct RxcuiPageTemplate {
    pub rxcui: String,
    pub show_urls: bool,
    pub result: Option<RxcuiTranslation>,
    pub error: Option<String>,
}

impl RxcuiPageTemplate {
    pub fn empty() -> Self {
        Self {
            rxcui: String::new(),
            show_urls: false,
            result: None,
            error: None,
        }
    }
}

/// `GET /rxcui`
pub async fn rxcui_form_handler() -> impl IntoResponse {
    RxcuiPageTemplate::empty()
}

/// Lists the NDCs of a submitted RXCUI.
///
/// # Endpoint
///
/// `POST /rxcui` with form fields `rxcui` and optional `show_urls`.
///
/// Names are looked up per NDC when annotation is enabled; an NDC whose
/// lookup fails is listed as `Unknown`.
pub async fn rxcui_convert_handler(
    State(state): State<AppState>,
    Form(form): Form<RxcuiForm>,
) -> impl IntoResponse {
    let form = form.trimmed();
    let mut page = RxcuiPageTemplate {
        rxcui: form.rxcui.clone(),
        show_urls: form.show_urls(),
        ..RxcuiPageTemplate::empty()
    };

    if let Err(errors) = form.validate() {
        page.error = Some(first_message(&errors));
        return page;
    }

    match state
        .translator
        .translate_rxcui(&form.rxcui, state.annotate_ndc_names)
        .await
    {
        Ok(translation) => {
            let unknown = translation.ndcs.iter().filter(|n| n.is_unknown()).count();
            if unknown > 0 {
                tracing::debug!(rxcui = %form.rxcui, unknown, "Some NDC names could not be resolved");
            }
            page.result = Some(translation);
        }
        Err(e) => {
            tracing::info!(rxcui = %form.rxcui, error = %e, "RXCUI translation failed");
            page.error = Some(e.to_string());
        }
    }

    page
}
