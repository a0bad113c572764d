//! `reqwest`-backed client for the RxNorm REST API.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::error::TranslationError;
use crate::domain::upstream::{UpstreamClient, UpstreamResponse};

/// Public RxNav endpoint.
pub const DEFAULT_BASE_URL: &str = "https://rxnav.nlm.nih.gov/REST";

/// HTTP client for RxNav.
///
/// Wraps a pooled [`reqwest::Client`] with an explicit per-request timeout.
/// Every response is handed back with its status, successful or not; only
/// failures to obtain a response become errors.
#[derive(Clone)]
pub struct RxNavClient {
    http: reqwest::Client,
    timeout: Duration,
}

impl RxNavClient {
    /// Builds a client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self { http, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl UpstreamClient for RxNavClient {
    async fn get(&self, url: &str) -> Result<UpstreamResponse, TranslationError> {
        debug!(url, "GET upstream");

        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!(url, error = %e, "Upstream request failed");
                TranslationError::unreachable(describe(&e))
            })?;

        let status = response.status().as_u16();

        let body = response.text().await.map_err(|e| {
            warn!(url, status, error = %e, "Failed to read upstream body");
            TranslationError::unreachable(describe(&e))
        })?;

        debug!(url, status, bytes = body.len(), "Upstream responded");

        Ok(UpstreamResponse { status, body })
    }
}

/// Short description of a transport error for display.
fn describe(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        "could not connect to upstream".to_string()
    } else if error.is_builder() {
        "invalid request URL".to_string()
    } else {
        error.to_string()
    }
}
