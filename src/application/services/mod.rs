//! Business logic services for the application layer.

pub mod translation_service;

pub use translation_service::TranslationService;
