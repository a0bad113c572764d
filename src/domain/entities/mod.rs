//! Core domain entities for identifier translation.
//!
//! Entities are plain per-request values: nothing here is persisted, cached,
//! or shared between requests.
//!
//! # Entity Types
//!
//! - [`DrugProperties`] - Display name and term type (TTY) of an RXCUI
//! - [`AnnotatedNdc`] - An NDC paired with its best-effort drug name
//! - [`RxcuiResolution`] / [`PropertiesResolution`] / [`NdcListing`] - Results
//!   of a single upstream call, each carrying the URL that was queried
//! - [`NdcTranslation`] / [`RxcuiTranslation`] - Composite results rendered by
//!   the CLI and web layers

pub mod drug;
pub mod translation;

pub use drug::{AnnotatedNdc, DrugProperties, UNKNOWN_NAME};
pub use translation::{
    NdcListing, NdcTranslation, PropertiesResolution, RxcuiResolution, RxcuiTranslation,
};
