//! HTML page handlers and the JSON download.

mod download;
mod ndc;
mod rxcui;

pub use download::download_json_handler;
pub use ndc::{NdcPageTemplate, ndc_convert_handler, ndc_form_handler};
pub use rxcui::{RxcuiPageTemplate, rxcui_convert_handler, rxcui_form_handler};
