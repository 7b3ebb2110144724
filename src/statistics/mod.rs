//! Aggregate views over a case collection.

use crate::core::{Case, RiskLevel};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Cases created within this many days of `now` count as recent.
pub const RECENT_WINDOW_DAYS: i64 = 30;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RiskOverview {
    pub total_cases: usize,
    pub high_risk_cases: usize,
    pub recent_cases: usize,
    /// Count per level, every level present even when zero
    pub risk_distribution: BTreeMap<RiskLevel, usize>,
    /// Cases that have never been assessed
    pub unassessed_cases: usize,
}

impl RiskOverview {
    pub fn high_risk_ratio(&self) -> f64 {
        if self.total_cases == 0 {
            0.0
        } else {
            self.high_risk_cases as f64 / self.total_cases as f64
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StateHeatmapEntry {
    pub state: String,
    pub case_count: usize,
    pub high_risk_count: usize,
}

pub fn overview(cases: &[Case], now: DateTime<Utc>) -> RiskOverview {
    let window_start = now - Duration::days(RECENT_WINDOW_DAYS);

    let mut risk_distribution: BTreeMap<RiskLevel, usize> =
        RiskLevel::ALL.iter().map(|level| (*level, 0)).collect();
    let mut unassessed_cases = 0;

    for case in cases {
        match case.risk_level {
            Some(level) => *risk_distribution.entry(level).or_insert(0) += 1,
            None => unassessed_cases += 1,
        }
    }

    let overview = RiskOverview {
        total_cases: cases.len(),
        high_risk_cases: cases.iter().filter(|case| case.is_high_risk()).count(),
        recent_cases: cases
            .iter()
            .filter(|case| case.created_at.is_some_and(|created| created >= window_start))
            .count(),
        risk_distribution,
        unassessed_cases,
    };

    debug!(
        total = overview.total_cases,
        high_risk = overview.high_risk_cases,
        recent = overview.recent_cases,
        "computed risk overview"
    );

    overview
}

/// Per-state case counts, sorted by state. Cases without a state are skipped.
pub fn heatmap(cases: &[Case]) -> Vec<StateHeatmapEntry> {
    let mut by_state: BTreeMap<&str, (usize, usize)> = BTreeMap::new();

    for case in cases {
        let Some(state) = case
            .location_state
            .as_deref()
            .filter(|state| !state.is_empty())
        else {
            continue;
        };

        let counts = by_state.entry(state).or_default();
        counts.0 += 1;
        if case.is_high_risk() {
            counts.1 += 1;
        }
    }

    by_state
        .into_iter()
        .map(|(state, (case_count, high_risk_count))| StateHeatmapEntry {
            state: state.to_string(),
            case_count,
            high_risk_count,
        })
        .collect()
}
