use super::{HealthError, HealthMetrics, RiskTier};
use chrono::{Duration, NaiveDate};
use serde::Serialize;

const PHASE_DAYS: i64 = 30;
const SCORE_CEILING: i64 = 850;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapPhase {
    pub title: &'static str,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub actions: Vec<&'static str>,
    pub target_gain: u16,
    pub projected_score: i64,
}

/// Three consecutive 30-day phases. Only the first phase depends on the risk tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImprovementRoadmap {
    pub phase1: RoadmapPhase,
    pub phase2: RoadmapPhase,
    pub phase3: RoadmapPhase,
}

impl ImprovementRoadmap {
    /// Fails only when the last phase would end beyond the calendar chrono can represent.
    pub fn plan(metrics: &HealthMetrics, starts_on: NaiveDate) -> Result<Self, HealthError> {
        let foundation = match metrics.risk_level {
            RiskTier::High => vec![
                "Eliminate all overdrafts",
                "Pay all bills on time",
                "Build emergency fund of ₹5000",
            ],
            RiskTier::Low | RiskTier::Medium => vec![
                "Maintain payment streak",
                "Increase savings by 5%",
                "Review budget allocations",
            ],
        };

        let mut projected = metrics.current_score;
        let mut phase = |index: i64,
                         title: &'static str,
                         actions: Vec<&'static str>,
                         target_gain: u16|
         -> Result<RoadmapPhase, HealthError> {
            projected = projected
                .saturating_add(i64::from(target_gain))
                .min(SCORE_CEILING);
            let offset = |days: i64| {
                starts_on
                    .checked_add_signed(Duration::days(days))
                    .ok_or(HealthError::DateOutOfRange { starts_on })
            };
            Ok(RoadmapPhase {
                title,
                starts_on: offset(index * PHASE_DAYS)?,
                ends_on: offset(index * PHASE_DAYS + PHASE_DAYS - 1)?,
                actions,
                target_gain,
                projected_score: projected,
            })
        };

        let phase1 = phase(0, "Days 1-30: Build Foundation", foundation, 10)?;
        let phase2 = phase(
            1,
            "Days 31-60: Optimize Habits",
            vec![
                "Increase savings rate to 20%",
                "Maintain zero overdrafts for 60 days",
                "Improve employment stability documentation",
            ],
            15,
        )?;
        let phase3 = phase(
            2,
            "Days 61-90: Reach Excellence",
            vec![
                "Build 3-month emergency fund",
                "Diversify income sources",
                "Achieve 750+ credit score",
            ],
            20,
        )?;

        Ok(Self {
            phase1,
            phase2,
            phase3,
        })
    }

    pub fn phases(&self) -> [&RoadmapPhase; 3] {
        [&self.phase1, &self.phase2, &self.phase3]
    }

    pub fn total_target_gain(&self) -> u16 {
        self.phases().iter().map(|phase| phase.target_gain).sum()
    }
}
