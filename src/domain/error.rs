//! Failure type shared by every translation operation.

/// Why a translation did not produce a result.
///
/// There are exactly two kinds. Neither is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslationError {
    /// The upstream call did not come back with a success status.
    ///
    /// `status` is `None` when no HTTP response was received at all
    /// (connection refused, timeout, unreadable body).
    #[error("{}", transport_message(.status, .message))]
    Transport { status: Option<u16>, message: String },

    /// The upstream call succeeded but the expected field was absent.
    #[error("{reason}")]
    NotFound { reason: String },
}

fn transport_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("API request failed with status code {}", code),
        None => format!("API request failed: {}", message),
    }
}

impl TranslationError {
    /// Upstream answered with a non-success status.
    pub fn status(code: u16) -> Self {
        Self::Transport {
            status: Some(code),
            message: String::new(),
        }
    }

    /// Upstream could not be reached or its response could not be read.
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Transport {
            status: None,
            message: message.into(),
        }
    }

    pub fn not_found(reason: impl Into<String>) -> Self {
        Self::NotFound {
            reason: reason.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// HTTP status carried by a transport failure, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            Self::NotFound { .. } => None,
        }
    }
}
