//! HTTP request handlers for API endpoints.

pub mod health;
pub mod translate;

pub use health::health_handler;
pub use translate::{ndc_handler, rxcui_ndcs_handler};
