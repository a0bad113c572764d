//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::TranslationService;

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<TranslationService>,
    /// Default for per-NDC name lookups on RXCUI listings.
    pub annotate_ndc_names: bool,
}

impl AppState {
    pub fn new(translator: Arc<TranslationService>, annotate_ndc_names: bool) -> Self {
        Self {
            translator,
            annotate_ndc_names,
        }
    }
}
