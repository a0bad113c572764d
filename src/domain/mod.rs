//! Domain layer: identifiers, results, failures, and the upstream boundary.
//!
//! # Architecture
//!
//! - [`entities`] - Per-request result types
//! - [`error`] - The two-kind [`error::TranslationError`]
//! - [`upstream`] - [`upstream::UpstreamClient`] trait and RxNorm wire shapes
//!
//! # Design Principles
//!
//! - No dependency on infrastructure or presentation layers
//! - The HTTP transport is injected through [`upstream::UpstreamClient`]
//! - Translation logic lives in [`crate::application::services`]

pub mod entities;
pub mod error;
pub mod upstream;
