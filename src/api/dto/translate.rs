//! DTOs for translation endpoints.

use serde::Deserialize;

/// Query string of `GET /api/rxcui/{rxcui}/ndcs`.
#[derive(Debug, Default, Deserialize)]
pub struct NdcsQuery {
    /// Look up a drug name per NDC. Defaults to the server setting.
    pub names: Option<bool>,
}
