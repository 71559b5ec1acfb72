use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::advisor::InsightAdvisor;
use crate::error::AppError;
use crate::health::DEFAULT_CURRENT_SCORE;
use crate::scoring::RawProfile;
use crate::service::{HealthReport, ScoringService};

#[derive(Debug, Deserialize)]
pub struct HealthMonitorRequest {
    #[serde(rename = "userData", default)]
    pub user_data: RawProfile,
    #[serde(rename = "currentScore", default)]
    pub current_score: Option<i64>,
    /// Anchor date for the roadmap; defaults to the server's local date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// A what-if scenario: profile fields at the top level plus an optional baseline score.
#[derive(Debug, Deserialize)]
pub struct PredictScoreRequest {
    #[serde(rename = "currentScore", default)]
    pub current_score: Option<i64>,
    #[serde(flatten)]
    pub scenario: Map<String, Value>,
}

/// Router builder exposing scoring, health-monitor, and simulation endpoints.
pub fn scoring_router<A>(service: Arc<ScoringService<A>>) -> Router
where
    A: InsightAdvisor + 'static,
{
    Router::new()
        .route("/api/score", post(score_handler::<A>))
        .route("/api/health-monitor", post(health_monitor_handler::<A>))
        .route("/api/predict-score", post(predict_score_handler::<A>))
        .with_state(service)
}

pub(crate) async fn score_handler<A>(
    State(service): State<Arc<ScoringService<A>>>,
    axum::Json(raw): axum::Json<RawProfile>,
) -> Response
where
    A: InsightAdvisor + 'static,
{
    let report = service.score(&raw);
    (StatusCode::OK, axum::Json(report)).into_response()
}

pub(crate) async fn health_monitor_handler<A>(
    State(service): State<Arc<ScoringService<A>>>,
    axum::Json(request): axum::Json<HealthMonitorRequest>,
) -> Result<axum::Json<HealthReport>, AppError>
where
    A: InsightAdvisor + 'static,
{
    let HealthMonitorRequest {
        user_data,
        current_score,
        today,
    } = request;
    let current_score = current_score.unwrap_or(DEFAULT_CURRENT_SCORE);
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let report = service.health(&user_data, current_score, today)?;
    Ok(axum::Json(report))
}

pub(crate) async fn predict_score_handler<A>(
    State(service): State<Arc<ScoringService<A>>>,
    axum::Json(request): axum::Json<PredictScoreRequest>,
) -> Response
where
    A: InsightAdvisor + 'static,
{
    let PredictScoreRequest {
        current_score,
        scenario,
    } = request;
    let outcome = service.predict(&RawProfile::from(scenario), current_score);
    (StatusCode::OK, axum::Json(outcome)).into_response()
}
