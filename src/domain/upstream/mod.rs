//! Boundary to the RxNorm REST service.
//!
//! The translator never talks HTTP directly. It hands a fully built URL to an
//! [`UpstreamClient`] and interprets the status and body it gets back, so the
//! transport can be swapped for a stub in tests.
//!
//! # Implementations
//!
//! - [`crate::infrastructure::rxnav::RxNavClient`] - `reqwest`-backed client
//! - `MockUpstreamClient` - generated by `mockall` under `cfg(test)`

pub mod wire;

use crate::domain::error::TranslationError;
use async_trait::async_trait;

/// Raw upstream reply: status code and undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Shorthand for a `200 OK` reply.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }
}

/// Performs read-only GET requests against the upstream API.
///
/// Implementations return `Ok` for any HTTP response, whatever its status;
/// status interpretation belongs to the caller. `Err` is reserved for
/// failures where no response was obtained.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Issues a GET to `url` and returns the status and body.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::Transport`] with no status when the request
    /// could not be completed.
    async fn get(&self, url: &str) -> Result<UpstreamResponse, TranslationError>;
}
