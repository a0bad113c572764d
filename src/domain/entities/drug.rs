//! Drug descriptors returned by the RxNorm API.

use serde::Serialize;

/// Placeholder name used when the name lookup for an NDC fails.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Descriptive properties of an RXCUI.
///
/// `term_type` is the RxNorm TTY code (e.g. `IN`, `SCD`, `BPCK`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrugProperties {
    pub name: String,
    pub term_type: String,
}

impl DrugProperties {
    pub fn new(name: impl Into<String>, term_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            term_type: term_type.into(),
        }
    }
}

/// An NDC, with the drug name found for it when names were looked up.
///
/// When the name lookup fails the name is [`UNKNOWN_NAME`]. Without a lookup
/// there is no name and none is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedNdc {
    pub ndc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AnnotatedNdc {
    pub fn new(ndc: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ndc: ndc.into(),
            name: Some(name.into()),
        }
    }

    /// Creates an entry for which no name lookup was made.
    pub fn bare(ndc: impl Into<String>) -> Self {
        Self {
            ndc: ndc.into(),
            name: None,
        }
    }

    /// Creates an entry whose name could not be resolved.
    pub fn unknown(ndc: impl Into<String>) -> Self {
        Self::new(ndc, UNKNOWN_NAME)
    }

    /// Returns true if the name lookup degraded to the placeholder.
    pub fn is_unknown(&self) -> bool {
        self.name.as_deref() == Some(UNKNOWN_NAME)
    }
}
