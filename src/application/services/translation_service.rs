//! NDC ⇄ RXCUI translation over the RxNorm REST API.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::domain::entities::{
    AnnotatedNdc, DrugProperties, NdcListing, NdcTranslation, PropertiesResolution,
    RxcuiResolution, RxcuiTranslation,
};
use crate::domain::error::TranslationError;
use crate::domain::upstream::UpstreamClient;
use crate::domain::upstream::wire::{NdcGroupEnvelope, NdcStatusEnvelope, PropertiesEnvelope};

pub const RXCUI_NOT_FOUND: &str = "RXCUI not found for the given NDC";
pub const PROPERTIES_NOT_FOUND: &str = "Properties not found for the given RXCUI";
pub const NDC_NOT_FOUND: &str = "NDC not found for the given RXCUI";
pub const NAME_NOT_FOUND: &str = "Name not found for the given NDC";

/// Translates between NDCs and RXCUIs.
///
/// Every operation is one or two sequential GETs built from `base_url`.
/// Identifiers are substituted into URLs verbatim, without validation or
/// re-encoding. The service keeps no state between calls and does no logging;
/// callers decide how failures are shown.
pub struct TranslationService {
    client: Arc<dyn UpstreamClient>,
    base_url: String,
}

impl TranslationService {
    /// Creates a translator over `client`, rooted at `base_url`
    /// (e.g. `https://rxnav.nlm.nih.gov/REST`). A trailing `/` is ignored.
    pub fn new(client: Arc<dyn UpstreamClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn ndc_status_url(&self, ndc: &str) -> String {
        format!("{}/ndcstatus.json?ndc={}", self.base_url, ndc)
    }

    pub fn properties_url(&self, rxcui: &str) -> String {
        format!("{}/rxcui/{}/properties.json", self.base_url, rxcui)
    }

    pub fn ndcs_url(&self, rxcui: &str) -> String {
        format!("{}/rxcui/{}/ndcs.json", self.base_url, rxcui)
    }

    /// Resolves an NDC to its RXCUI.
    ///
    /// # Errors
    ///
    /// - [`TranslationError::Transport`] if upstream does not answer `200`
    /// - [`TranslationError::NotFound`] if `ndcStatus.rxcui` is absent
    pub async fn resolve_rxcui(&self, ndc: &str) -> Result<RxcuiResolution, TranslationError> {
        let url = self.ndc_status_url(ndc);
        let envelope: NdcStatusEnvelope = self.fetch(&url).await?;

        let rxcui = envelope
            .rxcui()
            .ok_or_else(|| TranslationError::not_found(RXCUI_NOT_FOUND))?;

        Ok(RxcuiResolution {
            rxcui,
            source_url: url,
        })
    }

    /// Looks up the name and term type of an RXCUI.
    ///
    /// # Errors
    ///
    /// - [`TranslationError::Transport`] if upstream does not answer `200`
    /// - [`TranslationError::NotFound`] if `properties` (or its `name`/`tty`) is absent
    pub async fn resolve_properties(
        &self,
        rxcui: &str,
    ) -> Result<PropertiesResolution, TranslationError> {
        let url = self.properties_url(rxcui);
        let envelope: PropertiesEnvelope = self.fetch(&url).await?;

        let properties = envelope
            .properties
            .and_then(|p| Some(DrugProperties::new(p.name?, p.tty?)))
            .ok_or_else(|| TranslationError::not_found(PROPERTIES_NOT_FOUND))?;

        Ok(PropertiesResolution {
            properties,
            source_url: url,
        })
    }

    /// Lists the NDCs associated with an RXCUI, in upstream order.
    ///
    /// # Errors
    ///
    /// - [`TranslationError::Transport`] if upstream does not answer `200`
    /// - [`TranslationError::NotFound`] if `ndcGroup.ndcList.ndc` is absent
    pub async fn resolve_ndcs(&self, rxcui: &str) -> Result<NdcListing, TranslationError> {
        let url = self.ndcs_url(rxcui);
        let envelope: NdcGroupEnvelope = self.fetch(&url).await?;

        let ndcs = envelope
            .ndcs()
            .ok_or_else(|| TranslationError::not_found(NDC_NOT_FOUND))?;

        Ok(NdcListing {
            ndcs,
            source_url: url,
        })
    }

    /// Looks up the active concept name of a single NDC.
    ///
    /// # Errors
    ///
    /// Same as [`Self::resolve_rxcui`], with `ndcStatus.active.name` as the
    /// required field.
    pub async fn resolve_ndc_name(&self, ndc: &str) -> Result<String, TranslationError> {
        let url = self.ndc_status_url(ndc);
        let envelope: NdcStatusEnvelope = self.fetch(&url).await?;

        envelope
            .active_name()
            .ok_or_else(|| TranslationError::not_found(NAME_NOT_FOUND))
    }

    /// Pairs each NDC with its name, one lookup at a time.
    ///
    /// A failed lookup yields [`AnnotatedNdc::unknown`] for that entry only;
    /// the output always has the same length and order as `ndcs`.
    pub async fn annotate_ndcs(&self, ndcs: Vec<String>) -> Vec<AnnotatedNdc> {
        let mut annotated = Vec::with_capacity(ndcs.len());

        for ndc in ndcs {
            let entry = match self.resolve_ndc_name(&ndc).await {
                Ok(name) => AnnotatedNdc::new(ndc, name),
                Err(_) => AnnotatedNdc::unknown(ndc),
            };
            annotated.push(entry);
        }

        annotated
    }

    /// NDC → RXCUI followed by the properties lookup.
    ///
    /// # Errors
    ///
    /// The first failure of either call is returned unchanged.
    pub async fn translate_ndc(&self, ndc: &str) -> Result<NdcTranslation, TranslationError> {
        let resolution = self.resolve_rxcui(ndc).await?;
        let properties = self.resolve_properties(&resolution.rxcui).await?;

        Ok(NdcTranslation::new(ndc, resolution, properties))
    }

    /// RXCUI → NDCs, optionally annotated with names.
    ///
    /// # Errors
    ///
    /// Only the listing call can fail the translation; annotation failures
    /// degrade per entry.
    pub async fn translate_rxcui(
        &self,
        rxcui: &str,
        annotate: bool,
    ) -> Result<RxcuiTranslation, TranslationError> {
        let listing = self.resolve_ndcs(rxcui).await?;

        if !annotate {
            return Ok(RxcuiTranslation::from_listing(rxcui, listing));
        }

        let ndcs = self.annotate_ndcs(listing.ndcs).await;

        Ok(RxcuiTranslation {
            rxcui: rxcui.to_string(),
            ndcs,
            annotated: true,
            source_url: listing.source_url,
        })
    }

    /// GETs `url`, rejects non-200 statuses, and decodes the body.
    ///
    /// A body that is not JSON at all decodes to `T::default()`, so the caller
    /// reports it as a missing field rather than a transport failure. Within a
    /// JSON body each field is decoded on its own (see the wire shapes).
    async fn fetch<T>(&self, url: &str) -> Result<T, TranslationError>
    where
        T: DeserializeOwned + Default,
    {
        let response = self.client.get(url).await?;

        if response.status != 200 {
            return Err(TranslationError::status(response.status));
        }

        Ok(serde_json::from_str(&response.body).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::upstream::{MockUpstreamClient, UpstreamResponse};

    const BASE: &str = "https://rxnav.test/REST";

    fn service(mock: MockUpstreamClient) -> TranslationService {
        TranslationService::new(Arc::new(mock), BASE)
    }

    #[tokio::test]
    async fn test_resolve_rxcui_success() {
        let mut mock = MockUpstreamClient::new();
        mock.expect_get()
            .withf(|url| url == "https://rxnav.test/REST/ndcstatus.json?ndc=0069-4405-68")
            .times(1)
            .returning(|_| Ok(UpstreamResponse::ok(r#"{"ndcStatus":{"rxcui":"206765"}}"#)));

        let result = service(mock).resolve_rxcui("0069-4405-68").await.unwrap();

        assert_eq!(result.rxcui, "206765");
        assert_eq!(
            result.source_url,
            "https://rxnav.test/REST/ndcstatus.json?ndc=0069-4405-68"
        );
    }

    const NDC_STATUS_BODY: &str = r#"{"ndcStatus":{"ndc11":"00069440568","status":"ACTIVE","active":"YES","rxnormNdc":"YES","rxcui":"206765","conceptName":"losartan potassium 50 MG Oral Tablet","conceptStatus":"ACTIVE","sourceList":{"sourceName":["DM_SPL","GS"]},"altNdc":null,"comment":"","ndcHistory":[{"activeRxcui":"206765","originalRxcui":"206765","startDate":"200706","endDate":"202409"}]}}"#;

    const PROPERTIES_BODY: &str = r#"{"properties":{"rxcui":"206765","name":"losartan potassium 50 MG Oral Tablet","synonym":"","tty":"SCD","language":"ENG","suppress":"N","umlscui":""}}"#;

    const NDCS_BODY: &str = r#"{"ndcGroup":{"rxcui":null,"rxnormId":"206765","ndcList":{"ndc":["00093736598","00378088805"]}}}"#;

    #[tokio::test]
    async fn test_resolve_rxcui_from_full_ndc_status_body() {
        let mut mock = MockUpstreamClient::new();
        mock.expect_get()
            .times(1)
            .returning(|_| Ok(UpstreamResponse::ok(NDC_STATUS_BODY)));

        let result = service(mock).resolve_rxcui("0069-4405-68").await.unwrap();

        assert_eq!(result.rxcui, "206765");
    }

    #[tokio::test]
    async fn test_resolve_properties_from_full_body() {
        let mut mock = MockUpstreamClient::new();
        mock.expect_get()
            .times(1)
            .returning(|_| Ok(UpstreamResponse::ok(PROPERTIES_BODY)));

        let result = service(mock).resolve_properties("206765").await.unwrap();

        assert_eq!(
            result.properties,
            DrugProperties::new("losartan potassium 50 MG Oral Tablet", "SCD")
        );
    }

    #[tokio::test]
    async fn test_resolve_ndcs_from_full_body() {
        let mut mock = MockUpstreamClient::new();
        mock.expect_get()
            .times(1)
            .returning(|_| Ok(UpstreamResponse::ok(NDCS_BODY)));

        let listing = service(mock).resolve_ndcs("206765").await.unwrap();

        assert_eq!(listing.ndcs, vec!["00093736598", "00378088805"]);
    }

    #[tokio::test]
    async fn test_name_lookup_on_full_body_without_active_object_is_unknown() {
        let mut mock = MockUpstreamClient::new();
        mock.expect_get()
            .times(1)
            .returning(|_| Ok(UpstreamResponse::ok(NDC_STATUS_BODY)));

        let annotated = service(mock)
            .annotate_ndcs(vec!["00069440568".to_string()])
            .await;

        assert_eq!(annotated, vec![AnnotatedNdc::unknown("00069440568")]);
    }

    #[tokio::test]
    async fn test_resolve_rxcui_substitutes_ndc_verbatim() {
        let mut mock = MockUpstreamClient::new();
        mock.expect_get()
            .withf(|url| url.ends_with("?ndc=00069440568"))
            .times(1)
            .returning(|_| Ok(UpstreamResponse::ok(r#"{"ndcStatus":{"rxcui":"1"}}"#)));

        let result = service(mock).resolve_rxcui("00069440568").await.unwrap();
        assert!(result.source_url.ends_with("ndc=00069440568"));
    }

    #[tokio::test]
    async fn test_resolve_rxcui_missing_field_is_not_found() {
        for body in [
            r#"{"ndcStatus":{"ndc":"0069-4405-68"}}"#,
            r#"{}"#,
            "not json",
            "",
        ] {
            let mut mock = MockUpstreamClient::new();
            mock.expect_get()
                .times(1)
                .returning(move |_| Ok(UpstreamResponse::ok(body)));

            let err = service(mock).resolve_rxcui("0069-4405-68").await.unwrap_err();

            assert!(err.is_not_found(), "body {body:?} gave {err:?}");
            assert_eq!(err.to_string(), RXCUI_NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn test_non_200_status_is_transport_regardless_of_body() {
        for status in [201, 204, 404, 500, 503] {
            let mut mock = MockUpstreamClient::new();
            mock.expect_get().times(1).returning(move |_| {
                Ok(UpstreamResponse::new(
                    status,
                    r#"{"ndcStatus":{"rxcui":"206765"}}"#,
                ))
            });

            let err = service(mock).resolve_rxcui("0069-4405-68").await.unwrap_err();

            assert!(err.is_transport());
            assert_eq!(err.status_code(), Some(status));
        }
    }

    #[tokio::test]
    async fn test_503_message_includes_code() {
        let mut mock = MockUpstreamClient::new();
        mock.expect_get()
            .times(3)
            .returning(|_| Ok(UpstreamResponse::new(503, "Service Unavailable")));

        let svc = service(mock);

        let errors = [
            svc.resolve_rxcui("0069-4405-68").await.unwrap_err(),
            svc.resolve_properties("206765").await.unwrap_err(),
            svc.resolve_ndcs("206765").await.unwrap_err(),
        ];

        for err in errors {
            assert_eq!(err.status_code(), Some(503));
            assert!(err.to_string().contains("503"));
        }
    }

    #[tokio::test]
    async fn test_unreachable_upstream_propagates() {
        let mut mock = MockUpstreamClient::new();
        mock.expect_get()
            .times(1)
            .returning(|_| Err(TranslationError::unreachable("timed out")));

        let err = service(mock).resolve_ndcs("206765").await.unwrap_err();

        assert!(err.is_transport());
        assert_eq!(err.status_code(), None);
    }

    #[tokio::test]
    async fn test_resolve_properties_success() {
        let mut mock = MockUpstreamClient::new();
        mock.expect_get()
            .withf(|url| url == "https://rxnav.test/REST/rxcui/206765/properties.json")
            .times(1)
            .returning(|_| {
                Ok(UpstreamResponse::ok(
                    r#"{"properties":{"rxcui":"206765","name":"Losartan","tty":"IN"}}"#,
                ))
            });

        let result = service(mock).resolve_properties("206765").await.unwrap();

        assert_eq!(result.properties, DrugProperties::new("Losartan", "IN"));
        assert!(result.source_url.ends_with("/rxcui/206765/properties.json"));
    }

    #[tokio::test]
    async fn test_resolve_properties_missing_object() {
        let mut mock = MockUpstreamClient::new();
        mock.expect_get()
            .times(1)
            .returning(|_| Ok(UpstreamResponse::ok("{}")));

        let err = service(mock).resolve_properties("206765").await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), PROPERTIES_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_resolve_ndcs_preserves_order_and_length() {
        let mut mock = MockUpstreamClient::new();
        mock.expect_get()
            .withf(|url| url == "https://rxnav.test/REST/rxcui/206765/ndcs.json")
            .times(1)
            .returning(|_| {
                Ok(UpstreamResponse::ok(
                    r#"{"ndcGroup":{"ndcList":{"ndc":["0002-1200-50","0002-1200-30","0002-1200-50"]}}}"#,
                ))
            });

        let listing = service(mock).resolve_ndcs("206765").await.unwrap();

        assert_eq!(
            listing.ndcs,
            vec!["0002-1200-50", "0002-1200-30", "0002-1200-50"]
        );
    }

    #[tokio::test]
    async fn test_resolve_ndcs_two_elements() {
        let mut mock = MockUpstreamClient::new();
        mock.expect_get().times(1).returning(|_| {
            Ok(UpstreamResponse::ok(
                r#"{"ndcGroup":{"ndcList":{"ndc":["0002-1200-30","0002-1200-50"]}}}"#,
            ))
        });

        let listing = service(mock).resolve_ndcs("206765").await.unwrap();

        assert_eq!(listing.ndcs, vec!["0002-1200-30", "0002-1200-50"]);
    }

    #[tokio::test]
    async fn test_resolve_ndcs_missing_list() {
        let mut mock = MockUpstreamClient::new();
        mock.expect_get()
            .times(1)
            .returning(|_| Ok(UpstreamResponse::ok(r#"{"ndcGroup":{"rxnormId":"1"}}"#)));

        let err = service(mock).resolve_ndcs("1").await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), NDC_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_annotation_degrades_single_entry() {
        let mut mock = MockUpstreamClient::new();
        mock.expect_get()
            .withf(|url| url.ends_with("ndc=A"))
            .times(1)
            .returning(|_| {
                Ok(UpstreamResponse::ok(
                    r#"{"ndcStatus":{"active":{"name":"Drug A"}}}"#,
                ))
            });
        mock.expect_get()
            .withf(|url| url.ends_with("ndc=B"))
            .times(1)
            .returning(|_| Ok(UpstreamResponse::new(500, "")));
        mock.expect_get()
            .withf(|url| url.ends_with("ndc=C"))
            .times(1)
            .returning(|_| Ok(UpstreamResponse::ok(r#"{"ndcStatus":{}}"#)));
        mock.expect_get()
            .withf(|url| url.ends_with("ndc=D"))
            .times(1)
            .returning(|_| {
                Ok(UpstreamResponse::ok(
                    r#"{"ndcStatus":{"active":{"name":"Drug D"}}}"#,
                ))
            });

        let annotated = service(mock)
            .annotate_ndcs(vec![
                "A".to_string(),
                "B".to_string(),
                "C".to_string(),
                "D".to_string(),
            ])
            .await;

        assert_eq!(
            annotated,
            vec![
                AnnotatedNdc::new("A", "Drug A"),
                AnnotatedNdc::unknown("B"),
                AnnotatedNdc::unknown("C"),
                AnnotatedNdc::new("D", "Drug D"),
            ]
        );
    }

    #[tokio::test]
    async fn test_annotation_survives_unreachable_lookup() {
        let mut mock = MockUpstreamClient::new();
        mock.expect_get()
            .withf(|url| url.ends_with("ndcs.json"))
            .times(1)
            .returning(|_| {
                Ok(UpstreamResponse::ok(
                    r#"{"ndcGroup":{"ndcList":{"ndc":["X","Y"]}}}"#,
                ))
            });
        mock.expect_get()
            .withf(|url| url.ends_with("ndc=X"))
            .times(1)
            .returning(|_| Err(TranslationError::unreachable("connection reset")));
        mock.expect_get()
            .withf(|url| url.ends_with("ndc=Y"))
            .times(1)
            .returning(|_| {
                Ok(UpstreamResponse::ok(
                    r#"{"ndcStatus":{"active":{"name":"Drug Y"}}}"#,
                ))
            });

        let translation = service(mock).translate_rxcui("42", true).await.unwrap();

        assert!(translation.annotated);
        assert_eq!(translation.len(), 2);
        assert!(translation.ndcs[0].is_unknown());
        assert_eq!(translation.ndcs[1].name.as_deref(), Some("Drug Y"));
    }

    #[tokio::test]
    async fn test_translate_rxcui_without_annotation_makes_one_call() {
        let mut mock = MockUpstreamClient::new();
        mock.expect_get().times(1).returning(|_| {
            Ok(UpstreamResponse::ok(
                r#"{"ndcGroup":{"ndcList":{"ndc":["X","Y"]}}}"#,
            ))
        });

        let translation = service(mock).translate_rxcui("42", false).await.unwrap();

        assert!(!translation.annotated);
        assert_eq!(translation.rxcui, "42");
        assert_eq!(translation.len(), 2);
    }

    #[tokio::test]
    async fn test_translate_ndc_combines_both_calls() {
        let mut mock = MockUpstreamClient::new();
        mock.expect_get()
            .withf(|url| url.contains("ndcstatus.json"))
            .times(1)
            .returning(|_| Ok(UpstreamResponse::ok(r#"{"ndcStatus":{"rxcui":"206765"}}"#)));
        mock.expect_get()
            .withf(|url| url.contains("/rxcui/206765/properties.json"))
            .times(1)
            .returning(|_| {
                Ok(UpstreamResponse::ok(
                    r#"{"properties":{"name":"Losartan","tty":"IN"}}"#,
                ))
            });

        let translation = service(mock).translate_ndc("0069-4405-68").await.unwrap();

        assert_eq!(translation.ndc, "0069-4405-68");
        assert_eq!(translation.rxcui, "206765");
        assert_eq!(translation.name, "Losartan");
        assert_eq!(translation.term_type, "IN");
    }

    #[tokio::test]
    async fn test_translate_ndc_stops_after_first_failure() {
        let mut mock = MockUpstreamClient::new();
        mock.expect_get()
            .times(1)
            .returning(|_| Ok(UpstreamResponse::ok(r#"{"ndcStatus":{}}"#)));

        let err = service(mock).translate_ndc("bogus").await.unwrap_err();

        assert!(err.is_not_found());
    }

    #[test]
    fn test_trailing_slash_in_base_url_is_ignored() {
        let svc = TranslationService::new(Arc::new(MockUpstreamClient::new()), "http://h/REST/");
        assert_eq!(svc.base_url(), "http://h/REST");
        assert_eq!(svc.ndcs_url("1"), "http://h/REST/rxcui/1/ndcs.json");
    }
}
