use super::{placeholder_health_insights, AdvisorError, InsightAdvisor, ScoreInsights};
use crate::health::HealthMetrics;
use crate::scoring::{ApplicantProfile, ScoreResult};

/// Advisor used when no real advice source is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAdvisor;

impl InsightAdvisor for PlaceholderAdvisor {
    fn advise(
        &self,
        _result: &ScoreResult,
        _profile: &ApplicantProfile,
    ) -> Result<ScoreInsights, AdvisorError> {
        Ok(ScoreInsights::placeholder())
    }

    fn health_insights(&self, _metrics: &HealthMetrics) -> Result<Vec<String>, AdvisorError> {
        Ok(placeholder_health_insights())
    }
}
