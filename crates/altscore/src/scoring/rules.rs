use super::profile::ApplicantProfile;
use super::{CategoryScore, ScoreBreakdown, ScoreCategory};

pub(crate) const BASE_SCORE: f64 = 300.0;
pub(crate) const MIN_SCORE: u16 = 300;
pub(crate) const MAX_SCORE: u16 = 850;

/// Fixed signal for having submitted a profile at all; not derived from field completeness.
pub(crate) const DATA_RICHNESS_SCORE: u8 = 70;

const RENT_SHARE: f64 = 0.6;
const UTILITY_SHARE: f64 = 0.4;

const BALANCE_GATE: f64 = 1000.0;
const SAVINGS_GATE: f64 = 0.1;
const EMPLOYMENT_GATE: u8 = 50;
const GATE_POINTS: u8 = 25;

impl ScoreCategory {
    /// Points added to the total per sub-score point.
    pub const fn weight(self) -> f64 {
        match self {
            Self::PaymentHistory => 1.925,
            Self::FinancialStability => 1.65,
            Self::CreditUtilization => 0.825,
            Self::DataRichness => 1.1,
        }
    }
}

pub(crate) fn payment_history(profile: &ApplicantProfile) -> u8 {
    let rent = f64::from(profile.rent_history.points());
    let utility = f64::from(profile.utility_history.points());
    (rent * RENT_SHARE + utility * UTILITY_SHARE) as u8
}

/// Outcome of each stability gate, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StabilityGates {
    pub balance_cushion: bool,
    pub saving_habit: bool,
    pub no_overdrafts: bool,
    pub stable_employment: bool,
}

impl StabilityGates {
    pub(crate) fn evaluate(profile: &ApplicantProfile) -> Self {
        Self {
            balance_cushion: profile.avg_balance > BALANCE_GATE,
            saving_habit: profile.savings_rate > SAVINGS_GATE,
            no_overdrafts: profile.overdrafts == 0,
            stable_employment: profile.employment_stability.points() > EMPLOYMENT_GATE,
        }
    }

    pub(crate) fn passed(self) -> u8 {
        [
            self.balance_cushion,
            self.saving_habit,
            self.no_overdrafts,
            self.stable_employment,
        ]
        .into_iter()
        .filter(|passed| *passed)
        .count() as u8
    }
}

pub(crate) fn financial_stability(profile: &ApplicantProfile) -> u8 {
    StabilityGates::evaluate(profile).passed() * GATE_POINTS
}

/// Share of monthly income consumed by rent, when income is positive.
pub(crate) fn rent_to_income(profile: &ApplicantProfile) -> Option<f64> {
    if profile.monthly_income > 0.0 {
        Some(profile.rent_amount / profile.monthly_income)
    } else {
        None
    }
}

pub(crate) fn credit_utilization(profile: &ApplicantProfile) -> u8 {
    match rent_to_income(profile) {
        None => 0,
        Some(ratio) if ratio < 0.3 => 100,
        Some(ratio) if ratio < 0.4 => 70,
        Some(ratio) if ratio < 0.5 => 40,
        Some(_) => 10,
    }
}

pub(crate) fn score_profile(profile: &ApplicantProfile) -> ScoreBreakdown {
    ScoreBreakdown {
        payment_history: CategoryScore::new(
            ScoreCategory::PaymentHistory,
            payment_history(profile),
        ),
        financial_stability: CategoryScore::new(
            ScoreCategory::FinancialStability,
            financial_stability(profile),
        ),
        credit_utilization: CategoryScore::new(
            ScoreCategory::CreditUtilization,
            credit_utilization(profile),
        ),
        data_richness: CategoryScore::new(ScoreCategory::DataRichness, DATA_RICHNESS_SCORE),
    }
}

/// Accumulates in the same order the categories are listed, then truncates and clamps.
pub(crate) fn total_score(breakdown: &ScoreBreakdown) -> u16 {
    let mut score = BASE_SCORE;
    for entry in breakdown.entries() {
        score += f64::from(entry.score) * entry.category.weight();
    }

    let truncated = score.trunc();
    truncated.clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE)) as u16
}
