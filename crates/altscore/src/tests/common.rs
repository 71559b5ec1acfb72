use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::{json, Value};

use crate::advisor::{PlaceholderAdvisor, RuleBasedAdvisor};
use crate::router::scoring_router;
use crate::scoring::RawProfile;
use crate::service::ScoringService;

pub(super) fn strong_applicant() -> Value {
    json!({
        "rentHistory": "excellent",
        "utilityHistory": "good",
        "monthlyIncome": 30000,
        "avgBalance": 5000,
        "savingsRate": 0.2,
        "overdrafts": 0,
        "employmentStability": "high",
        "rentAmount": 8000,
    })
}

pub(super) fn stretched_applicant() -> Value {
    json!({
        "rentHistory": "fair",
        "utilityHistory": "poor",
        "monthlyIncome": "18000",
        "avgBalance": 600,
        "savingsRate": 0.04,
        "overdrafts": 3,
        "employmentStability": "low",
        "rentAmount": 9500,
    })
}

pub(super) fn raw(value: Value) -> RawProfile {
    serde_json::from_value(value).expect("object payload")
}

pub(super) fn rules_service() -> ScoringService<RuleBasedAdvisor> {
    ScoringService::new(Arc::new(RuleBasedAdvisor))
}

pub(super) fn rules_router() -> axum::Router {
    scoring_router(Arc::new(rules_service()))
}

pub(super) fn placeholder_router() -> axum::Router {
    scoring_router(Arc::new(ScoringService::new(Arc::new(PlaceholderAdvisor))))
}

pub(super) fn json_post(uri: &str, payload: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).expect("serializable")))
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
