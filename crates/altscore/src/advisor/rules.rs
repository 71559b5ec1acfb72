use super::{AdviceLevel, AdvisorError, InsightAdvisor, Recommendation, ScoreInsights};
use crate::health::{HealthMetrics, RiskTier};
use crate::scoring::rules::{rent_to_income, StabilityGates};
use crate::scoring::{ApplicantProfile, PaymentHistory, ScoreCategory, ScoreResult};

/// Deterministic advisor that explains the breakdown and ranks the categories with the most
/// points left on the table.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedAdvisor;

impl InsightAdvisor for RuleBasedAdvisor {
    fn advise(
        &self,
        result: &ScoreResult,
        profile: &ApplicantProfile,
    ) -> Result<ScoreInsights, AdvisorError> {
        if result.is_fallback() {
            return Err(AdvisorError::UnscoredProfile);
        }

        let insights = vec![
            payment_insight(result, profile),
            stability_insight(result, profile),
            utilization_insight(result, profile),
        ];

        Ok(ScoreInsights {
            insights,
            recommendations: recommendations(result, profile),
        })
    }

    fn health_insights(&self, metrics: &HealthMetrics) -> Result<Vec<String>, AdvisorError> {
        let next_step = match metrics.risk_level {
            RiskTier::High => "Clearing overdrafts is the fastest way to lower your risk tier",
            RiskTier::Medium => {
                "Zero overdrafts with savings above 15% would move you to LOW risk"
            }
            RiskTier::Low => "Keep monitoring your financial habits for improvements",
        };

        Ok(vec![
            format!("Your credit health grade is {}", metrics.grade.label()),
            format!("Current risk level: {}", metrics.risk_level.label()),
            next_step.to_string(),
        ])
    }
}

fn payment_insight(result: &ScoreResult, profile: &ApplicantProfile) -> String {
    let score = result.breakdown.payment_history.score;
    if profile.rent_history == PaymentHistory::Missing
        && profile.utility_history == PaymentHistory::Missing
    {
        return "No rent or utility history was reported, so payment history adds nothing yet."
            .to_string();
    }

    if score >= 75 {
        format!(
            "Your {} rent and {} utility record is strongly boosting your score.",
            profile.rent_history.label(),
            profile.utility_history.label()
        )
    } else {
        format!(
            "Payment history scores {score}/100; your {} rent and {} utility record is holding your score back.",
            profile.rent_history.label(),
            profile.utility_history.label()
        )
    }
}

fn stability_insight(result: &ScoreResult, profile: &ApplicantProfile) -> String {
    let gates = StabilityGates::evaluate(profile);
    if profile.overdrafts > 0 {
        return format!(
            "{} overdraft(s) cost you the clean-account bonus in financial stability.",
            profile.overdrafts
        );
    }

    match gates.passed() {
        4 => "Every financial stability check passed, a strong signal to lenders.".to_string(),
        passed => format!(
            "{passed} of 4 financial stability checks passed ({}/100).",
            result.breakdown.financial_stability.score
        ),
    }
}

fn utilization_insight(result: &ScoreResult, profile: &ApplicantProfile) -> String {
    match rent_to_income(profile) {
        None => "No monthly income was reported, so the income-to-rent factor scored 0.".to_string(),
        Some(ratio) => format!(
            "Rent takes {:.0}% of your monthly income, earning {}/100 on income-to-rent.",
            ratio * 100.0,
            result.breakdown.credit_utilization.score
        ),
    }
}

fn recommendations(result: &ScoreResult, profile: &ApplicantProfile) -> Vec<Recommendation> {
    let mut shortfalls: Vec<(ScoreCategory, f64)> = [
        ScoreCategory::PaymentHistory,
        ScoreCategory::FinancialStability,
        ScoreCategory::CreditUtilization,
    ]
    .into_iter()
    .map(|category| {
        let score = result.breakdown.get(category).score;
        (category, f64::from(100 - score) * category.weight())
    })
    .collect();

    // stable sort keeps weighting order on ties
    shortfalls.sort_by(|left, right| right.1.total_cmp(&left.1));

    let priorities = [AdviceLevel::High, AdviceLevel::Medium, AdviceLevel::Low];
    shortfalls
        .into_iter()
        .zip(priorities)
        .map(|((category, shortfall), priority)| Recommendation {
            title: recommendation_title(category, result, profile).to_string(),
            priority,
            impact: impact_for(shortfall),
            difficulty: difficulty_for(category),
        })
        .collect()
}

fn recommendation_title(
    category: ScoreCategory,
    result: &ScoreResult,
    profile: &ApplicantProfile,
) -> &'static str {
    match category {
        ScoreCategory::PaymentHistory => {
            if result.breakdown.payment_history.score == 100 {
                "Maintain On-Time Payments"
            } else {
                "Build On-Time Rent and Utility History"
            }
        }
        ScoreCategory::FinancialStability => {
            let gates = StabilityGates::evaluate(profile);
            if !gates.no_overdrafts {
                "Eliminate Overdrafts"
            } else if !gates.saving_habit {
                "Boost Your Savings"
            } else if !gates.balance_cushion {
                "Grow Your Average Balance"
            } else if !gates.stable_employment {
                "Improve Employment Stability"
            } else {
                "Maintain Financial Stability"
            }
        }
        ScoreCategory::CreditUtilization => match rent_to_income(profile) {
            None => "Report Your Monthly Income",
            Some(_) if result.breakdown.credit_utilization.score == 100 => {
                "Keep Rent Below 30% of Income"
            }
            Some(_) => "Lower Your Rent-to-Income Ratio",
        },
        ScoreCategory::DataRichness => "Keep Your Profile Current",
    }
}

fn impact_for(shortfall: f64) -> AdviceLevel {
    if shortfall >= 80.0 {
        AdviceLevel::High
    } else if shortfall >= 30.0 {
        AdviceLevel::Medium
    } else {
        AdviceLevel::Low
    }
}

fn difficulty_for(category: ScoreCategory) -> AdviceLevel {
    match category {
        ScoreCategory::PaymentHistory | ScoreCategory::FinancialStability => AdviceLevel::Medium,
        ScoreCategory::CreditUtilization => AdviceLevel::High,
        ScoreCategory::DataRichness => AdviceLevel::Low,
    }
}
