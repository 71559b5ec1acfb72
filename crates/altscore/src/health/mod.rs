//! Health-monitor views derived alongside the score: a letter grade, a risk tier, and a
//! 90-day improvement roadmap.

mod roadmap;

pub use roadmap::{ImprovementRoadmap, RoadmapPhase};

use crate::scoring::profile::{count_field, decimal_field};
use crate::scoring::{fields, ProfileError, RawProfile};
use chrono::NaiveDate;
use serde::Serialize;

/// Score assumed by the health monitor when the caller does not send one.
pub const DEFAULT_CURRENT_SCORE: i64 = 720;

/// Letter grade for the health monitor. Bands intentionally differ from
/// [`CreditRating`](crate::scoring::CreditRating).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HealthGrade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    C,
}

impl HealthGrade {
    pub const fn from_score(score: i64) -> Self {
        if score >= 800 {
            Self::APlus
        } else if score >= 740 {
            Self::A
        } else if score >= 670 {
            Self::BPlus
        } else if score >= 580 {
            Self::B
        } else {
            Self::C
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

/// Overdraft and savings based risk classification, independent of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn classify(overdrafts: i64, savings_rate: f64) -> Self {
        if overdrafts == 0 && savings_rate >= 0.15 {
            Self::Low
        } else if overdrafts <= 2 && savings_rate >= 0.10 {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Only `overdrafts` and `savingsRate` are read; other malformed fields do not matter here.
    pub fn assess(raw: &RawProfile) -> Result<Self, ProfileError> {
        let overdrafts = count_field(raw, fields::OVERDRAFTS)?;
        let savings_rate = decimal_field(raw, fields::SAVINGS_RATE)?;
        Ok(Self::classify(overdrafts, savings_rate))
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthMetrics {
    pub grade: HealthGrade,
    pub risk_level: RiskTier,
    pub current_score: i64,
}

impl HealthMetrics {
    pub fn assess(raw: &RawProfile, current_score: i64) -> Result<Self, ProfileError> {
        Ok(Self {
            grade: HealthGrade::from_score(current_score),
            risk_level: RiskTier::assess(raw)?,
            current_score,
        })
    }
}

/// Reasons a health report cannot be produced for a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HealthError {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error("a 90-day roadmap starting {starts_on} ends past the last supported date")]
    DateOutOfRange { starts_on: NaiveDate },
}

impl HealthError {
    /// Request field the caller should correct.
    pub fn field(&self) -> &'static str {
        match self {
            HealthError::Profile(err) => err.field(),
            HealthError::DateOutOfRange { .. } => "today",
        }
    }
}
