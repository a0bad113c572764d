//! Browser-facing converter pages.
//!
//! Server-rendered with Askama, which HTML-escapes every interpolated value,
//! including identifiers typed by the user and names returned by RxNav.
//!
//! # Modules
//!
//! - [`forms`] - Form payloads posted by the pages
//! - [`handlers`] - Page rendering and JSON download handlers
//! - [`routes`] - Page route configuration

pub mod forms;
pub mod handlers;
pub mod routes;
