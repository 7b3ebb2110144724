mod common;

use chrono::{Duration, TimeZone, Utc};
use common::CaseBuilder;
use dvtriage::statistics::{heatmap, overview, StateHeatmapEntry};
use dvtriage::RiskLevel;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

#[test]
fn test_overview_counts_levels_and_recency() {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
    let mut cases = vec![
        CaseBuilder::new(1).state("CA").risk(90.0).build(),
        CaseBuilder::new(2).state("CA").risk(55.0).build(),
        CaseBuilder::new(3).state("OR").risk(30.0).build(),
        CaseBuilder::new(4).state("OR").risk(10.0).build(),
        CaseBuilder::new(5).build(),
    ];
    cases[0].created_at = Some(now - Duration::days(2));
    cases[1].created_at = Some(now - Duration::days(45));
    cases[2].created_at = Some(now - Duration::hours(1));

    let result = overview(&cases, now);

    assert_eq!(result.total_cases, 5);
    assert_eq!(result.high_risk_cases, 2);
    assert_eq!(result.recent_cases, 2);
    assert_eq!(result.unassessed_cases, 1);
    assert_eq!(
        result.risk_distribution,
        BTreeMap::from([
            (RiskLevel::Low, 1),
            (RiskLevel::Moderate, 1),
            (RiskLevel::High, 1),
            (RiskLevel::Extreme, 1),
        ])
    );
    assert!((result.high_risk_ratio() - 0.4).abs() < 1e-12);
}

#[test]
fn test_overview_serializes_level_names() {
    let now = Utc::now();
    let result = overview(&[CaseBuilder::new(1).risk(80.0).build()], now);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["risk_distribution"]["extreme"], 1);
    assert_eq!(json["risk_distribution"]["low"], 0);
}

#[test]
fn test_heatmap_sorted_by_state() {
    let cases = vec![
        CaseBuilder::new(1).state("WA").risk(80.0).build(),
        CaseBuilder::new(2).state("CA").risk(20.0).build(),
        CaseBuilder::new(3).state("WA").risk(60.0).build(),
        CaseBuilder::new(4).build(),
    ];

    assert_eq!(
        heatmap(&cases),
        vec![
            StateHeatmapEntry {
                state: "CA".to_string(),
                case_count: 1,
                high_risk_count: 0,
            },
            StateHeatmapEntry {
                state: "WA".to_string(),
                case_count: 2,
                high_risk_count: 2,
            },
        ]
    );
}
