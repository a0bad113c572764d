#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use ndc_rxcui::application::services::TranslationService;
use ndc_rxcui::domain::error::TranslationError;
use ndc_rxcui::domain::upstream::{UpstreamClient, UpstreamResponse};
use ndc_rxcui::routes::router;
use ndc_rxcui::state::AppState;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "http://rxnav.test/REST";

/// Canned upstream: exact URL → response. Unknown URLs answer 404.
#[derive(Default)]
pub struct StubUpstream {
    responses: HashMap<String, Result<UpstreamResponse, TranslationError>>,
    requested: Mutex<Vec<String>>,
}

impl StubUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, status: u16, body: &str) -> Self {
        self.responses.insert(
            format!("{}{}", BASE_URL, path),
            Ok(UpstreamResponse::new(status, body)),
        );
        self
    }

    pub fn unreachable(mut self, path: &str) -> Self {
        self.responses.insert(
            format!("{}{}", BASE_URL, path),
            Err(TranslationError::unreachable("connection refused")),
        );
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamClient for StubUpstream {
    async fn get(&self, url: &str) -> Result<UpstreamResponse, TranslationError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| Ok(UpstreamResponse::new(404, "")))
    }
}

/// Stub pre-loaded with the Losartan fixtures.
pub fn losartan_upstream() -> StubUpstream {
    StubUpstream::new()
        .with(
            "/ndcstatus.json?ndc=0069-4405-68",
            200,
            r#"{"ndcStatus":{"rxcui":"206765","active":{"name":"Losartan 50 MG"}}}"#,
        )
        .with(
            "/rxcui/206765/properties.json",
            200,
            r#"{"properties":{"rxcui":"206765","name":"Losartan","tty":"IN"}}"#,
        )
        .with(
            "/rxcui/206765/ndcs.json",
            200,
            r#"{"ndcGroup":{"ndcList":{"ndc":["0002-1200-30","0002-1200-50"]}}}"#,
        )
        .with(
            "/ndcstatus.json?ndc=0002-1200-30",
            200,
            r#"{"ndcStatus":{"rxcui":"206765","active":{"name":"Losartan Potassium 50 MG Oral Tablet"}}}"#,
        )
        .with("/ndcstatus.json?ndc=0002-1200-50", 503, "")
}

/// Stub answering with complete RxNav response bodies, extra fields included.
pub fn full_shape_upstream() -> StubUpstream {
    StubUpstream::new()
        .with(
            "/ndcstatus.json?ndc=00069440568",
            200,
            r#"{"ndcStatus":{"ndc11":"00069440568","status":"ACTIVE","active":"YES","rxnormNdc":"YES","rxcui":"206765","conceptName":"losartan potassium 50 MG Oral Tablet","conceptStatus":"ACTIVE","sourceList":{"sourceName":["DM_SPL","GS","MMSL"]},"altNdc":null,"comment":"","ndcHistory":[{"activeRxcui":"206765","originalRxcui":"206765","startDate":"200706","endDate":"202409"}]}}"#,
        )
        .with(
            "/rxcui/206765/properties.json",
            200,
            r#"{"properties":{"rxcui":"206765","name":"losartan potassium 50 MG Oral Tablet","synonym":"","tty":"SCD","language":"ENG","suppress":"N","umlscui":""}}"#,
        )
        .with(
            "/rxcui/206765/ndcs.json",
            200,
            r#"{"ndcGroup":{"rxcui":null,"rxnormId":"206765","ndcList":{"ndc":["00093736598","00378088805"]}}}"#,
        )
}

pub fn create_test_state(upstream: Arc<StubUpstream>, annotate: bool) -> AppState {
    let translator = Arc::new(TranslationService::new(upstream, BASE_URL));
    AppState::new(translator, annotate)
}

pub fn create_test_app(upstream: Arc<StubUpstream>) -> Router {
    router(create_test_state(upstream, true))
}
