//! Error type for the JSON API surface.
//!
//! HTML pages never return [`AppError`]; they render failures inline.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::error::TranslationError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload returned under the `error` key.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Failure of a JSON API request.
///
/// Only upstream failures reach this type: a missing resource is `404`, an
/// upstream that failed or answered with a non-200 status is `502`.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String, details: Value },
    BadGateway { message: String, details: Value },
}

impl AppError {
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn bad_gateway(message: impl Into<String>, details: Value) -> Self {
        Self::BadGateway {
            message: message.into(),
            details,
        }
    }

    fn parts(self) -> (StatusCode, &'static str, String, Value) {
        match self {
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::BadGateway { message, details } => {
                (StatusCode::BAD_GATEWAY, "upstream_error", message, details)
            }
        }
    }
}

impl From<TranslationError> for AppError {
    fn from(err: TranslationError) -> Self {
        let message = err.to_string();
        match err {
            TranslationError::Transport { status, .. } => {
                AppError::bad_gateway(message, json!({ "upstream_status": status }))
            }
            TranslationError::NotFound { .. } => AppError::not_found(message, json!({})),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = self.parts();

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}
