//! The score calculator: a pure, deterministic mapping from a self-reported applicant profile
//! to a 300–850 score with a four-category breakdown.
//!
//! [`compute_score`] never fails. Input that cannot be coerced yields [`ScoreResult::fallback`]
//! so callers always receive a well-formed result.

pub mod profile;
pub mod rating;
pub(crate) mod rules;

pub use profile::{
    fields, ApplicantProfile, EmploymentStability, PaymentHistory, ProfileError, RawProfile,
};
pub use rating::CreditRating;

use serde::Serialize;
use tracing::{debug, warn};

/// Score returned whenever the submission is malformed.
pub const FALLBACK_SCORE: u16 = 400;

/// The four fixed sub-score categories, in weighting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    PaymentHistory,
    FinancialStability,
    CreditUtilization,
    DataRichness,
}

impl ScoreCategory {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::PaymentHistory,
            Self::FinancialStability,
            Self::CreditUtilization,
            Self::DataRichness,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::PaymentHistory => "payment_history",
            Self::FinancialStability => "financial_stability",
            Self::CreditUtilization => "credit_utilization",
            Self::DataRichness => "data_richness",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PaymentHistory => "Payment History",
            Self::FinancialStability => "Financial Stability",
            Self::CreditUtilization => "Income-to-Rent",
            Self::DataRichness => "Data Richness",
        }
    }
}

/// One normalised 0–100 sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    #[serde(skip)]
    pub category: ScoreCategory,
    pub score: u8,
    pub label: &'static str,
}

impl CategoryScore {
    pub const fn new(category: ScoreCategory, score: u8) -> Self {
        Self {
            category,
            score,
            label: category.label(),
        }
    }

    /// Points this sub-score added on top of the 300 base.
    pub fn contribution(&self) -> f64 {
        f64::from(self.score) * self.category.weight()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub payment_history: CategoryScore,
    pub financial_stability: CategoryScore,
    pub credit_utilization: CategoryScore,
    pub data_richness: CategoryScore,
}

impl ScoreBreakdown {
    pub const fn zeroed() -> Self {
        Self {
            payment_history: CategoryScore::new(ScoreCategory::PaymentHistory, 0),
            financial_stability: CategoryScore::new(ScoreCategory::FinancialStability, 0),
            credit_utilization: CategoryScore::new(ScoreCategory::CreditUtilization, 0),
            data_richness: CategoryScore::new(ScoreCategory::DataRichness, 0),
        }
    }

    pub const fn entries(&self) -> [CategoryScore; 4] {
        [
            self.payment_history,
            self.financial_stability,
            self.credit_utilization,
            self.data_richness,
        ]
    }

    pub fn get(&self, category: ScoreCategory) -> CategoryScore {
        match category {
            ScoreCategory::PaymentHistory => self.payment_history,
            ScoreCategory::FinancialStability => self.financial_stability,
            ScoreCategory::CreditUtilization => self.credit_utilization,
            ScoreCategory::DataRichness => self.data_richness,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub total_score: u16,
    pub rating: CreditRating,
    pub breakdown: ScoreBreakdown,
}

impl ScoreResult {
    /// Fixed result for submissions that could not be coerced.
    pub const fn fallback() -> Self {
        Self {
            total_score: FALLBACK_SCORE,
            rating: CreditRating::Error,
            breakdown: ScoreBreakdown::zeroed(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.rating == CreditRating::Error
    }
}

/// Score an already-coerced profile.
pub fn score_profile(profile: &ApplicantProfile) -> ScoreResult {
    let breakdown = rules::score_profile(profile);
    let total_score = rules::total_score(&breakdown);

    ScoreResult {
        total_score,
        rating: CreditRating::from_score(total_score),
        breakdown,
    }
}

/// Score a raw submission, substituting the fallback result for malformed input.
pub fn compute_score(raw: &RawProfile) -> ScoreResult {
    match ApplicantProfile::from_raw(raw) {
        Ok(profile) => {
            let result = score_profile(&profile);
            debug!(
                total_score = result.total_score,
                rating = result.rating.label(),
                "scored applicant profile"
            );
            result
        }
        Err(err) => {
            warn!(field = err.field(), error = %err, "malformed profile; returning fallback score");
            ScoreResult::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn worked_example() -> RawProfile {
        serde_json::from_value(json!({
            "rentHistory": "excellent",
            "utilityHistory": "good",
            "monthlyIncome": 30000,
            "avgBalance": 5000,
            "savingsRate": 0.2,
            "overdrafts": 0,
            "employmentStability": "high",
            "rentAmount": 8000,
        }))
        .expect("object payload")
    }

    #[test]
    fn worked_example_scores_797_good() {
        let result = compute_score(&worked_example());

        assert_eq!(result.breakdown.payment_history.score, 90);
        assert_eq!(result.breakdown.financial_stability.score, 100);
        assert_eq!(result.breakdown.credit_utilization.score, 100);
        assert_eq!(result.breakdown.data_richness.score, 70);
        assert_eq!(result.total_score, 797);
        assert_eq!(result.rating, CreditRating::Good);
    }

    #[test]
    fn malformed_income_returns_the_fallback() {
        let mut raw = worked_example();
        raw.insert(fields::MONTHLY_INCOME, "thirty thousand");

        let result = compute_score(&raw);

        assert_eq!(result, ScoreResult::fallback());
        assert_eq!(result.total_score, 400);
        assert_eq!(result.rating, CreditRating::Error);
        assert!(result.breakdown.entries().iter().all(|entry| entry.score == 0));
    }

    #[test]
    fn scoring_is_deterministic() {
        let raw = worked_example();
        assert_eq!(compute_score(&raw), compute_score(&raw));
    }

    #[test]
    fn breakdown_serializes_with_fixed_keys_and_labels() {
        let value = serde_json::to_value(compute_score(&worked_example())).expect("serializes");

        assert_eq!(value["total_score"], json!(797));
        assert_eq!(value["rating"], json!("Good"));
        assert_eq!(
            value["breakdown"]["credit_utilization"],
            json!({ "score": 100, "label": "Income-to-Rent" })
        );
        for category in ScoreCategory::ordered() {
            assert!(value["breakdown"].get(category.key()).is_some());
        }
    }

    #[test]
    fn contributions_sum_to_the_untruncated_total() {
        let result = compute_score(&worked_example());
        let sum: f64 = result
            .breakdown
            .entries()
            .iter()
            .map(CategoryScore::contribution)
            .sum();
        assert_eq!((300.0 + sum).trunc() as u16, result.total_score);
    }
}
