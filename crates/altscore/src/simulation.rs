//! What-if simulation: re-score a hypothetical profile and describe what the result means.

use crate::scoring::{compute_score, CreditRating, RawProfile, ScoreBreakdown, ScoreResult};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangePriority {
    Maintain,
    Optimize,
    Improve,
}

/// Three-way guidance banded on the predicted total (≥800, ≥740, everything else).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChangeRecommendation {
    pub message: &'static str,
    pub priority: ChangePriority,
    pub emoji: &'static str,
}

impl ChangeRecommendation {
    pub const fn for_score(total_score: u16) -> Self {
        if total_score >= 800 {
            Self {
                message: "Excellent! You're in the top tier. Maintain these habits.",
                priority: ChangePriority::Maintain,
                emoji: "🎉",
            }
        } else if total_score >= 740 {
            Self {
                message: "Very good! Small tweaks can push you to excellent.",
                priority: ChangePriority::Optimize,
                emoji: "👍",
            }
        } else {
            Self {
                message: "Focus on the key factors: payments, savings, and stability.",
                priority: ChangePriority::Improve,
                emoji: "💪",
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationOutcome {
    pub predicted_score: u16,
    pub rating: CreditRating,
    pub breakdown: ScoreBreakdown,
    /// Change relative to the caller's current score, when one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<i64>,
    pub recommendation: ChangeRecommendation,
}

impl SimulationOutcome {
    fn from_result(result: ScoreResult, baseline_score: Option<i64>) -> Self {
        let predicted = i64::from(result.total_score);
        Self {
            predicted_score: result.total_score,
            rating: result.rating,
            breakdown: result.breakdown,
            delta: baseline_score.map(|baseline| predicted.saturating_sub(baseline)),
            recommendation: ChangeRecommendation::for_score(result.total_score),
        }
    }

    pub fn improved(&self) -> bool {
        self.delta.is_some_and(|delta| delta > 0)
    }
}

/// Score `scenario` as submitted and compare it against `baseline_score`.
pub fn simulate(scenario: &RawProfile, baseline_score: Option<i64>) -> SimulationOutcome {
    let outcome = SimulationOutcome::from_result(compute_score(scenario), baseline_score);
    debug!(
        predicted_score = outcome.predicted_score,
        delta = ?outcome.delta,
        "simulated what-if scenario"
    );
    outcome
}

/// Apply `changes` to `baseline`, score both, and diff the totals.
pub fn simulate_changes(baseline: &RawProfile, changes: &RawProfile) -> SimulationOutcome {
    let before = compute_score(baseline);
    simulate(
        &baseline.merged_with(changes),
        Some(i64::from(before.total_score)),
    )
}
