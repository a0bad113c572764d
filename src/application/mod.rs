//! Application layer services implementing the translation logic.
//!
//! Services consume the [`crate::domain::upstream::UpstreamClient`] boundary
//! and provide a clean API for the CLI, HTML and JSON handlers.
//!
//! # Available Services
//!
//! - [`services::translation_service::TranslationService`] - NDC ⇄ RXCUI translation

pub mod services;
