//! Lethality scoring over weighted danger indicators.
//!
//! A submission is a sparse set of boolean indicators. The score is the sum
//! of the weights of the indicators that are present, divided by the sum of
//! all weights and scaled to 0-100. The level comes from an ordered
//! threshold list evaluated top-down, so recalibrating means editing
//! [`LEVEL_THRESHOLDS`] rather than branching logic.

pub mod indicators;
pub mod recommendations;

pub use indicators::{DangerIndicator, DangerIndicatorSet, MAX_WEIGHT};
pub use recommendations::recommendations_for;

use crate::core::RiskLevel;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// (minimum normalized score, level), highest threshold first.
pub const LEVEL_THRESHOLDS: [(f64, RiskLevel); 3] = [
    (75.0, RiskLevel::Extreme),
    (50.0, RiskLevel::High),
    (25.0, RiskLevel::Moderate),
];

/// Maps a normalized 0-100 score to its level. Thresholds are inclusive.
pub fn classify(score: f64) -> RiskLevel {
    LEVEL_THRESHOLDS
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map(|(_, level)| *level)
        .unwrap_or(RiskLevel::Low)
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Copy)]
pub struct LethalityScore {
    pub score: f64,
    pub level: RiskLevel,
}

/// A score together with what drove it and what to do about it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LethalityAssessment {
    pub score: f64,
    pub level: RiskLevel,
    pub present_indicators: Vec<DangerIndicator>,
    pub recommendations: Vec<String>,
}

/// Stateless scorer; every call is independent.
#[derive(Clone, Copy, Debug, Default)]
pub struct LethalityScorer;

impl LethalityScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, indicators: &DangerIndicatorSet) -> LethalityScore {
        let total: f64 = DangerIndicator::ALL
            .iter()
            .filter(|indicator| indicators.is_present(**indicator))
            .fold(0.0, |acc, indicator| acc + indicator.weight());

        let score = (total / MAX_WEIGHT) * 100.0;
        let level = classify(score);

        debug!(
            score,
            level = level.as_str(),
            ignored_keys = indicators.unknown_keys().count(),
            "scored lethality assessment"
        );

        LethalityScore { score, level }
    }

    pub fn assess(&self, indicators: &DangerIndicatorSet) -> LethalityAssessment {
        let LethalityScore { score, level } = self.score(indicators);

        LethalityAssessment {
            score,
            level,
            present_indicators: indicators.present().collect(),
            recommendations: recommendations_for(level)
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
