//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`rxnav`] - HTTP client for the RxNorm REST API

pub mod rxnav;

pub use rxnav::RxNavClient;
