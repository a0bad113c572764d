//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:8080"
//! export RXNAV_BASE_URL="https://rxnav.nlm.nih.gov/REST"
//! export RXNAV_TIMEOUT_SECS="10"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RXNAV_BASE_URL` - RxNorm REST root (default: public RxNav)
//! - `RXNAV_TIMEOUT_SECS` - Upstream request timeout (default: 10, range: 1-300)
//! - `ANNOTATE_NDC_NAMES` - Look up a drug name for every listed NDC (default: `true`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

use crate::infrastructure::rxnav::DEFAULT_BASE_URL;

/// Bounds of `RXNAV_TIMEOUT_SECS` (and the CLI `--timeout`), in seconds.
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Root of the RxNorm REST API, without a trailing slash.
    pub rxnav_base_url: String,
    /// Timeout applied to every upstream request, in seconds.
    pub rxnav_timeout_secs: u64,
    /// When false, the RXCUI page lists bare NDCs and skips the per-NDC lookups.
    pub annotate_ndc_names: bool,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a number, or if
    /// `ANNOTATE_NDC_NAMES` is not a recognised boolean.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let rxnav_base_url = env::var("RXNAV_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let rxnav_timeout_secs = match env::var("RXNAV_TIMEOUT_SECS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("RXNAV_TIMEOUT_SECS must be a number, got '{}'", v))?,
            Err(_) => 10,
        };

        let annotate_ndc_names = match env::var("ANNOTATE_NDC_NAMES") {
            Ok(v) => parse_flag(&v).with_context(|| {
                format!("ANNOTATE_NDC_NAMES must be true/false or 1/0, got '{}'", v)
            })?,
            Err(_) => true,
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            listen_addr,
            rxnav_base_url,
            rxnav_timeout_secs,
            annotate_ndc_names,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `rxnav_base_url` is not an absolute http(s) URL
    /// - `rxnav_timeout_secs` is outside 1-300
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        check_base_url(&self.rxnav_base_url).context("Invalid RXNAV_BASE_URL")?;

        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.rxnav_timeout_secs) {
            anyhow::bail!(
                "RXNAV_TIMEOUT_SECS must be between {} and {}, got {}",
                MIN_TIMEOUT_SECS,
                MAX_TIMEOUT_SECS,
                self.rxnav_timeout_secs
            );
        }

        Ok(())
    }

    pub fn rxnav_timeout(&self) -> Duration {
        Duration::from_secs(self.rxnav_timeout_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  RxNav base URL: {}", self.rxnav_base_url);
        tracing::info!("  RxNav timeout: {}s", self.rxnav_timeout_secs);
        tracing::info!(
            "  NDC name annotation: {}",
            if self.annotate_ndc_names {
                "enabled"
            } else {
                "disabled"
            }
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Checks that `value` is an absolute http(s) URL.
///
/// # Errors
///
/// Returns an error naming the offending value.
pub fn check_base_url(value: &str) -> Result<()> {
    let url = Url::parse(value)
        .with_context(|| format!("must be an absolute URL, got '{}'", value))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("must start with 'http://' or 'https://', got '{}'", value);
    }
    Ok(())
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => anyhow::bail!("unrecognised boolean '{}'", value),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
