use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use crate::advisor::{placeholder_health_insights, InsightAdvisor, ScoreInsights};
use crate::health::{HealthError, HealthMetrics, ImprovementRoadmap};
use crate::scoring::{compute_score, score_profile, ApplicantProfile, RawProfile, ScoreResult};
use crate::simulation::{simulate, SimulationOutcome};

/// Score plus the advisor's explanation of it.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub score: ScoreResult,
    pub ai_analysis: ScoreInsights,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthInsights {
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub health_metrics: HealthMetrics,
    pub ai_insights: HealthInsights,
    pub roadmap: ImprovementRoadmap,
}

/// Facade composing the calculator, the derived views, and an insight advisor.
pub struct ScoringService<A> {
    advisor: Arc<A>,
}

impl<A> ScoringService<A>
where
    A: InsightAdvisor + 'static,
{
    pub fn new(advisor: Arc<A>) -> Self {
        Self { advisor }
    }

    /// Score a submission and attach advice. Never fails: malformed input produces the
    /// fallback score and advisor failures produce placeholder advice.
    pub fn score(&self, raw: &RawProfile) -> ScoreReport {
        let (score, ai_analysis) = match ApplicantProfile::from_raw(raw) {
            Ok(profile) => {
                let score = score_profile(&profile);
                let ai_analysis = match self.advisor.advise(&score, &profile) {
                    Ok(insights) => insights,
                    Err(err) => {
                        warn!(error = %err, "advisor failed; using placeholder insights");
                        ScoreInsights::placeholder()
                    }
                };
                (score, ai_analysis)
            }
            Err(err) => {
                warn!(field = err.field(), error = %err, "malformed profile; returning fallback score");
                (ScoreResult::fallback(), ScoreInsights::placeholder())
            }
        };

        info!(
            total_score = score.total_score,
            rating = score.rating.label(),
            "score request served"
        );

        ScoreReport { score, ai_analysis }
    }

    /// Health grade, risk tier, insights, and a roadmap anchored at `today`.
    pub fn health(
        &self,
        raw: &RawProfile,
        current_score: i64,
        today: NaiveDate,
    ) -> Result<HealthReport, HealthError> {
        let health_metrics = HealthMetrics::assess(raw, current_score)?;
        let insights = self
            .advisor
            .health_insights(&health_metrics)
            .unwrap_or_else(|err| {
                warn!(error = %err, "advisor failed; using placeholder health insights");
                placeholder_health_insights()
            });
        let roadmap = ImprovementRoadmap::plan(&health_metrics, today)?;

        info!(
            grade = health_metrics.grade.label(),
            risk = health_metrics.risk_level.label(),
            "health report served"
        );

        Ok(HealthReport {
            health_metrics,
            ai_insights: HealthInsights { insights },
            roadmap,
        })
    }

    /// Re-score a what-if scenario, diffing against `current_score` when provided.
    pub fn predict(&self, scenario: &RawProfile, current_score: Option<i64>) -> SimulationOutcome {
        simulate(scenario, current_score)
    }

    /// Score without advice, for bulk callers.
    pub fn score_only(&self, raw: &RawProfile) -> ScoreResult {
        compute_score(raw)
    }
}
