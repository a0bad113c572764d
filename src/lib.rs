//! # NDC ⇄ RXCUI
//!
//! Translates between National Drug Codes (NDC) and RxNorm concept
//! identifiers (RXCUI) using the public RxNorm REST API.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Result types, the two-kind failure, and the upstream trait
//! - **Application Layer** ([`application`]) - The translator
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` client for RxNav
//! - **API Layer** ([`api`]) - JSON endpoints and middleware
//! - **Web Layer** ([`web`]) - HTML converter pages and JSON download
//!
//! ## Quick Start
//!
//! ```bash
//! # Web form on http://localhost:8080
//! cargo run
//!
//! # One-off lookups
//! cargo run --bin translate -- ndc 0069-4405-68 --properties
//! cargo run --bin translate -- rxcui 206765 --names
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod telemetry;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;
