//! Insight advisor seam.
//!
//! The score response carries an `ai_analysis` section produced by an [`InsightAdvisor`].
//! Advice is decoration: when an advisor fails, callers substitute the fixed placeholder
//! content from [`ScoreInsights::placeholder`] and [`placeholder_health_insights`] so a
//! request never fails because advice was unavailable.

mod placeholder;
mod rules;

pub use placeholder::PlaceholderAdvisor;
pub use rules::RuleBasedAdvisor;

use crate::config::AdvisorKind;
use crate::health::HealthMetrics;
use crate::scoring::{ApplicantProfile, ScoreResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AdviceLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub priority: AdviceLevel,
    pub impact: AdviceLevel,
    pub difficulty: AdviceLevel,
}

/// Three short explanations of the score and three ranked recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreInsights {
    pub insights: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

impl ScoreInsights {
    pub fn placeholder() -> Self {
        let recommendation = |title: &str, priority, impact| Recommendation {
            title: title.to_string(),
            priority,
            impact,
            difficulty: AdviceLevel::Low,
        };

        Self {
            insights: vec![
                "Insight generation requires a valid API key.".to_string(),
                "Ensure your GOOGLE_API_KEY is set in the .env file.".to_string(),
                "This is placeholder data.".to_string(),
            ],
            recommendations: vec![
                recommendation("Check API Key Setup", AdviceLevel::High, AdviceLevel::High),
                recommendation(
                    "Review Backend Logs",
                    AdviceLevel::Medium,
                    AdviceLevel::Medium,
                ),
                recommendation("Consult Documentation", AdviceLevel::Low, AdviceLevel::Low),
            ],
        }
    }
}

pub fn placeholder_health_insights() -> Vec<String> {
    vec![
        "Your credit health is being monitored".to_string(),
        "Continue good financial habits".to_string(),
        "Check back regularly for updates".to_string(),
    ]
}

/// Producer of free-text advice for a scored profile.
pub trait InsightAdvisor: Send + Sync {
    fn advise(
        &self,
        result: &ScoreResult,
        profile: &ApplicantProfile,
    ) -> Result<ScoreInsights, AdvisorError>;

    fn health_insights(&self, metrics: &HealthMetrics) -> Result<Vec<String>, AdvisorError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdvisorError {
    #[error("advisor unavailable: {0}")]
    Unavailable(String),
    #[error("advice requires a successfully scored profile")]
    UnscoredProfile,
}

/// Runtime-selected advisor so the server can pick one from configuration while the
/// service stays generic.
#[derive(Debug, Clone)]
pub enum ConfiguredAdvisor {
    Rules(RuleBasedAdvisor),
    Placeholder(PlaceholderAdvisor),
}

impl ConfiguredAdvisor {
    pub fn from_kind(kind: AdvisorKind) -> Self {
        match kind {
            AdvisorKind::Rules => Self::Rules(RuleBasedAdvisor),
            AdvisorKind::Placeholder => Self::Placeholder(PlaceholderAdvisor),
        }
    }
}

impl InsightAdvisor for ConfiguredAdvisor {
    fn advise(
        &self,
        result: &ScoreResult,
        profile: &ApplicantProfile,
    ) -> Result<ScoreInsights, AdvisorError> {
        match self {
            Self::Rules(advisor) => advisor.advise(result, profile),
            Self::Placeholder(advisor) => advisor.advise(result, profile),
        }
    }

    fn health_insights(&self, metrics: &HealthMetrics) -> Result<Vec<String>, AdvisorError> {
        match self {
            Self::Rules(advisor) => advisor.health_insights(metrics),
            Self::Placeholder(advisor) => advisor.health_insights(metrics),
        }
    }
}
