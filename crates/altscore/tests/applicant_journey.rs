use std::sync::Arc;

use altscore::advisor::{AdviceLevel, ConfiguredAdvisor, ScoreInsights};
use altscore::config::AdvisorKind;
use altscore::health::{HealthGrade, RiskTier};
use altscore::scoring::{fields, CreditRating};
use altscore::simulation::ChangePriority;
use altscore::{scoring_router, RawProfile, ScoringService};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt;

fn stretched_applicant() -> RawProfile {
    RawProfile::new()
        .with(fields::RENT_HISTORY, "fair")
        .with(fields::UTILITY_HISTORY, "poor")
        .with(fields::MONTHLY_INCOME, "18000")
        .with(fields::AVG_BALANCE, 600)
        .with(fields::SAVINGS_RATE, 0.04)
        .with(fields::OVERDRAFTS, 3)
        .with(fields::EMPLOYMENT_STABILITY, "low")
        .with(fields::RENT_AMOUNT, 9500)
}

fn service(kind: AdvisorKind) -> ScoringService<ConfiguredAdvisor> {
    ScoringService::new(Arc::new(ConfiguredAdvisor::from_kind(kind)))
}

#[test]
fn stretched_applicant_scores_then_plans_then_simulates() {
    let service = service(AdvisorKind::Rules);
    let applicant = stretched_applicant();

    let report = service.score(&applicant);
    assert_eq!(report.score.total_score, 439);
    assert_eq!(report.score.rating, CreditRating::Poor);
    assert_eq!(report.ai_analysis.recommendations.len(), 3);
    assert_eq!(
        report.ai_analysis.recommendations[0].priority,
        AdviceLevel::High
    );

    let today = NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date");
    let health = service
        .health(&applicant, i64::from(report.score.total_score), today)
        .expect("risk inputs are well formed");
    assert_eq!(health.health_metrics.grade, HealthGrade::C);
    assert_eq!(health.health_metrics.risk_level, RiskTier::High);
    let projections: Vec<i64> = health
        .roadmap
        .phases()
        .iter()
        .map(|phase| phase.projected_score)
        .collect();
    assert_eq!(projections, vec![449, 464, 484]);

    let scenario = applicant
        .merged_with(
            &RawProfile::new()
                .with(fields::OVERDRAFTS, 0)
                .with(fields::SAVINGS_RATE, 0.2)
                .with(fields::AVG_BALANCE, 1500)
                .with(fields::RENT_AMOUNT, 5000),
        );
    let outcome = service.predict(&scenario, Some(i64::from(report.score.total_score)));
    assert_eq!(outcome.predicted_score, 637);
    assert_eq!(outcome.rating, CreditRating::Fair);
    assert_eq!(outcome.delta, Some(198));
    assert!(outcome.improved());
    assert_eq!(outcome.recommendation.priority, ChangePriority::Improve);
}

#[test]
fn placeholder_advisor_keeps_scores_accurate() {
    let rules = service(AdvisorKind::Rules).score(&stretched_applicant());
    let placeholder = service(AdvisorKind::Placeholder).score(&stretched_applicant());

    assert_eq!(rules.score, placeholder.score);
    assert_eq!(placeholder.ai_analysis, ScoreInsights::placeholder());
}

#[tokio::test]
async fn http_surface_serves_all_three_endpoints() {
    let app = scoring_router(Arc::new(service(AdvisorKind::Rules)));
    let post = |uri: &str, payload: Value| {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request builds")
    };
    let profile = serde_json::to_value(stretched_applicant()).expect("serializable");

    for (uri, payload) in [
        ("/api/score", profile.clone()),
        (
            "/api/health-monitor",
            json!({ "userData": profile.clone(), "currentScore": 439 }),
        ),
        ("/api/predict-score", profile),
    ] {
        let response = app
            .clone()
            .oneshot(post(uri, payload))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }

    let response = app
        .oneshot(
            Request::get("/api/score")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
