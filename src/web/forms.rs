//! Form payloads posted by the converter pages.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// `POST /` body.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct NdcForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "NDC is required"))]
    pub ndc: String,

    /// Present (any value) when the "Show API URLs" box is ticked.
    pub show_urls: Option<String>,
}

impl NdcForm {
    /// Trims surrounding whitespace; the identifier itself is not validated.
    pub fn trimmed(mut self) -> Self {
        self.ndc = self.ndc.trim().to_string();
        self
    }

    pub fn show_urls(&self) -> bool {
        self.show_urls.is_some()
    }
}

/// `POST /rxcui` body.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct RxcuiForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "RXCUI is required"))]
    pub rxcui: String,

    pub show_urls: Option<String>,
}

impl RxcuiForm {
    pub fn trimmed(mut self) -> Self {
        self.rxcui = self.rxcui.trim().to_string();
        self
    }

    pub fn show_urls(&self) -> bool {
        self.show_urls.is_some()
    }
}

/// `POST /download_json` body, echoed back as the downloaded document.
///
/// Missing fields are written as `null`.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ResultDocument {
    pub ndc: Option<String>,
    pub rxcui: Option<String>,
    pub term_type: Option<String>,
    pub name: Option<String>,
    pub ndc_url: Option<String>,
    pub rxcui_url: Option<String>,
}

/// First human-readable message out of a validation failure.
pub fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid input".to_string())
}
