pub mod errors;

pub use errors::{Error, Result, ResultExt};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a tracked case.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Copy)]
#[serde(rename_all = "snake_case")]
pub enum CaseType {
    DvHomicide,
    MurderSuicide,
    AttemptedHomicide,
    Missing,
    ThreatAssessment,
}

impl CaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseType::DvHomicide => "dv_homicide",
            CaseType::MurderSuicide => "murder_suicide",
            CaseType::AttemptedHomicide => "attempted_homicide",
            CaseType::Missing => "missing",
            CaseType::ThreatAssessment => "threat_assessment",
        }
    }
}

impl std::fmt::Display for CaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Four-level risk classification, ordered from least to most severe.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Copy, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Extreme,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Moderate,
        RiskLevel::High,
        RiskLevel::Extreme,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Extreme => "extreme",
        }
    }

    /// High and extreme cases are the ones escalated for intervention.
    pub fn is_high_risk(&self) -> bool {
        *self >= RiskLevel::High
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(RiskLevel, &str)] = &[
            (RiskLevel::Low, "Low"),
            (RiskLevel::Moderate, "Moderate"),
            (RiskLevel::High, "High"),
            (RiskLevel::Extreme, "Extreme"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(level, _)| level == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}

/// A case record as supplied by the case repository.
///
/// Every field other than `id` and `title` may be missing in the source
/// data; consumers treat absence as "unknown", never as an error.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Case {
    pub id: u64,
    #[serde(default)]
    pub case_number: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub case_type: Option<CaseType>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location_city: Option<String>,
    #[serde(default)]
    pub location_state: Option<String>,
    #[serde(default)]
    pub incident_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub risk_score: Option<f64>,
    #[serde(default)]
    pub risk_level: Option<RiskLevel>,
    #[serde(default)]
    pub suspects: Vec<Suspect>,
    #[serde(default)]
    pub victims: Vec<Victim>,
}

impl Case {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ..Default::default()
        }
    }

    /// Stamps the latest lethality assessment onto the case.
    pub fn record_assessment(&mut self, score: f64, level: RiskLevel) {
        self.risk_score = Some(score);
        self.risk_level = Some(level);
    }

    pub fn is_high_risk(&self) -> bool {
        self.risk_level.is_some_and(|level| level.is_high_risk())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Suspect {
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub relationship_to_victim: Option<String>,
    #[serde(default)]
    pub criminal_history: Option<String>,
    #[serde(default)]
    pub mental_health_history: Option<String>,
    #[serde(default)]
    pub substance_abuse: Option<bool>,
    #[serde(default)]
    pub firearm_access: Option<bool>,
    #[serde(default)]
    pub employment_status: Option<String>,
}

impl Suspect {
    pub fn has_firearm_access(&self) -> bool {
        self.firearm_access.unwrap_or(false)
    }

    pub fn has_substance_abuse(&self) -> bool {
        self.substance_abuse.unwrap_or(false)
    }

    pub fn has_criminal_history(&self) -> bool {
        has_text(&self.criminal_history)
    }

    pub fn has_mental_health_history(&self) -> bool {
        has_text(&self.mental_health_history)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Victim {
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub relationship_to_suspect: Option<String>,
    #[serde(default)]
    pub children_involved: Option<bool>,
    #[serde(default)]
    pub financial_dependence: Option<bool>,
    #[serde(default)]
    pub isolation_level: Option<String>,
    #[serde(default)]
    pub prior_dv_reports: Option<u32>,
    #[serde(default)]
    pub protection_order_history: Option<String>,
}

impl Victim {
    pub fn has_financial_dependence(&self) -> bool {
        self.financial_dependence.unwrap_or(false)
    }

    pub fn has_children_involved(&self) -> bool {
        self.children_involved.unwrap_or(false)
    }

    /// More than two prior reports marks a repeat pattern.
    pub fn has_multiple_prior_reports(&self) -> bool {
        self.prior_dv_reports.is_some_and(|count| count > 2)
    }

    pub fn is_highly_isolated(&self) -> bool {
        self.isolation_level.as_deref() == Some("high")
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Moderate);
        assert!(RiskLevel::Moderate < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Extreme);
        assert!(!RiskLevel::Moderate.is_high_risk());
        assert!(RiskLevel::High.is_high_risk());
    }

    #[test]
    fn test_case_deserializes_with_missing_fields() {
        let case: Case = serde_json::from_str(r#"{"id": 7, "title": "Sparse"}"#).unwrap();
        assert_eq!(case.id, 7);
        assert!(case.case_type.is_none());
        assert!(case.suspects.is_empty());
        assert!(!case.is_high_risk());
    }

    #[test]
    fn test_case_type_wire_names() {
        let case: Case =
            serde_json::from_str(r#"{"id": 1, "case_type": "murder_suicide"}"#).unwrap();
        assert_eq!(case.case_type, Some(CaseType::MurderSuicide));
        assert_eq!(
            serde_json::to_string(&RiskLevel::Extreme).unwrap(),
            "\"extreme\""
        );
    }

    #[test]
    fn test_record_assessment() {
        let mut case = Case::new(3, "Stamped");
        case.record_assessment(61.0, RiskLevel::High);
        assert_eq!(case.risk_score, Some(61.0));
        assert!(case.is_high_risk());
    }

    #[test]
    fn test_empty_history_is_absent() {
        let suspect = Suspect {
            name: "A".into(),
            criminal_history: Some(String::new()),
            mental_health_history: Some("treated 2019".into()),
            ..Default::default()
        };
        assert!(!suspect.has_criminal_history());
        assert!(suspect.has_mental_health_history());
    }
}
