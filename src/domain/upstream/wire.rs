//! JSON shapes of the RxNorm responses used by the translator.
//!
//! Every field is optional: an absent field is a resolution failure decided
//! by the translator, never a decoding error. Unknown fields are ignored, and
//! a field of an unexpected type reads as absent without affecting its
//! siblings (RxNav sends `"active": "YES"` next to `rxcui`, for instance).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decodes a field as `Some(T)` when it has the expected shape, `None` otherwise.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// `GET /ndcstatus.json?ndc={ndc}`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NdcStatusEnvelope {
    #[serde(default, deserialize_with = "lenient")]
    pub ndc_status: Option<NdcStatus>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NdcStatus {
    #[serde(default, deserialize_with = "lenient")]
    pub rxcui: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub active: Option<ActiveConcept>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ActiveConcept {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

impl NdcStatusEnvelope {
    pub fn rxcui(self) -> Option<String> {
        self.ndc_status?.rxcui
    }

    pub fn active_name(self) -> Option<String> {
        self.ndc_status?.active?.name
    }
}

/// `GET /rxcui/{rxcui}/properties.json`
#[derive(Debug, Default, Deserialize)]
pub struct PropertiesEnvelope {
    #[serde(default, deserialize_with = "lenient")]
    pub properties: Option<Properties>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Properties {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub tty: Option<String>,
}

/// `GET /rxcui/{rxcui}/ndcs.json`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NdcGroupEnvelope {
    #[serde(default, deserialize_with = "lenient")]
    pub ndc_group: Option<NdcGroup>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NdcGroup {
    #[serde(default, deserialize_with = "lenient")]
    pub ndc_list: Option<NdcList>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NdcList {
    #[serde(default, deserialize_with = "lenient")]
    pub ndc: Option<Vec<String>>,
}

impl NdcGroupEnvelope {
    pub fn ndcs(self) -> Option<Vec<String>> {
        self.ndc_group?.ndc_list?.ndc
    }
}
