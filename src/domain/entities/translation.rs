//! Translation results.
//!
//! Every result keeps the upstream URL it was resolved from. The URL is only
//! ever displayed or exported; it is never fetched again.

use super::drug::{AnnotatedNdc, DrugProperties};
use serde::Serialize;

/// Result of resolving an NDC to its RXCUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RxcuiResolution {
    pub rxcui: String,
    pub source_url: String,
}

/// Result of looking up the properties of an RXCUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertiesResolution {
    pub properties: DrugProperties,
    pub source_url: String,
}

/// NDCs associated with an RXCUI, in upstream order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdcListing {
    pub ndcs: Vec<String>,
    pub source_url: String,
}

/// Full NDC → RXCUI translation: the concept and its properties.
///
/// Field names match the JSON document offered for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NdcTranslation {
    pub ndc: String,
    pub rxcui: String,
    pub term_type: String,
    pub name: String,
    pub ndc_url: String,
    pub rxcui_url: String,
}

impl NdcTranslation {
    pub fn new(
        ndc: impl Into<String>,
        resolution: RxcuiResolution,
        properties: PropertiesResolution,
    ) -> Self {
        Self {
            ndc: ndc.into(),
            rxcui: resolution.rxcui,
            term_type: properties.properties.term_type,
            name: properties.properties.name,
            ndc_url: resolution.source_url,
            rxcui_url: properties.source_url,
        }
    }
}

/// Full RXCUI → NDC translation.
///
/// `ndcs` has the same order and length as the upstream list. Names are
/// filled in only when annotation was requested; otherwise every entry
/// has no name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RxcuiTranslation {
    pub rxcui: String,
    pub ndcs: Vec<AnnotatedNdc>,
    pub annotated: bool,
    pub source_url: String,
}

impl RxcuiTranslation {
    /// Builds an unannotated translation straight from a listing.
    pub fn from_listing(rxcui: impl Into<String>, listing: NdcListing) -> Self {
        Self {
            rxcui: rxcui.into(),
            ndcs: listing
                .ndcs
                .into_iter()
                .map(AnnotatedNdc::bare)
                .collect(),
            annotated: false,
            source_url: listing.source_url,
        }
    }

    pub fn len(&self) -> usize {
        self.ndcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ndcs.is_empty()
    }
}
