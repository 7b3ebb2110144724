use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named danger signal with a fixed contribution to the lethality score.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Copy, Ord, PartialOrd)]
#[serde(rename_all = "snake_case")]
pub enum DangerIndicator {
    IncreasedFrequency,
    IncreasedSeverity,
    ThreatsToKill,
    WeaponThreats,
    FirearmAccess,
    ForcedSex,
    DrugAlcoholAbuse,
    ControllingBehavior,
    Jealousy,
    SeparationThreats,
    Unemployment,
    Stalking,
    ChildrenThreatened,
    SuicideThreats,
    PriorPoliceCalls,
}

impl DangerIndicator {
    /// The weight table, in scoring order.
    pub const ALL: [DangerIndicator; 15] = [
        DangerIndicator::IncreasedFrequency,
        DangerIndicator::IncreasedSeverity,
        DangerIndicator::ThreatsToKill,
        DangerIndicator::WeaponThreats,
        DangerIndicator::FirearmAccess,
        DangerIndicator::ForcedSex,
        DangerIndicator::DrugAlcoholAbuse,
        DangerIndicator::ControllingBehavior,
        DangerIndicator::Jealousy,
        DangerIndicator::SeparationThreats,
        DangerIndicator::Unemployment,
        DangerIndicator::Stalking,
        DangerIndicator::ChildrenThreatened,
        DangerIndicator::SuicideThreats,
        DangerIndicator::PriorPoliceCalls,
    ];

    pub const fn weight(&self) -> f64 {
        match self {
            DangerIndicator::IncreasedFrequency => 2.0,
            DangerIndicator::IncreasedSeverity => 2.5,
            DangerIndicator::ThreatsToKill => 4.0,
            DangerIndicator::WeaponThreats => 3.5,
            DangerIndicator::FirearmAccess => 4.5,
            DangerIndicator::ForcedSex => 2.0,
            DangerIndicator::DrugAlcoholAbuse => 1.5,
            DangerIndicator::ControllingBehavior => 2.0,
            DangerIndicator::Jealousy => 1.5,
            DangerIndicator::SeparationThreats => 3.0,
            DangerIndicator::Unemployment => 1.0,
            DangerIndicator::Stalking => 3.0,
            DangerIndicator::ChildrenThreatened => 2.5,
            DangerIndicator::SuicideThreats => 2.0,
            DangerIndicator::PriorPoliceCalls => 1.5,
        }
    }

    /// Case-sensitive key used in assessment submissions.
    pub const fn key(&self) -> &'static str {
        match self {
            DangerIndicator::IncreasedFrequency => "increased_frequency",
            DangerIndicator::IncreasedSeverity => "increased_severity",
            DangerIndicator::ThreatsToKill => "threats_to_kill",
            DangerIndicator::WeaponThreats => "weapon_threats",
            DangerIndicator::FirearmAccess => "firearm_access",
            DangerIndicator::ForcedSex => "forced_sex",
            DangerIndicator::DrugAlcoholAbuse => "drug_alcohol_abuse",
            DangerIndicator::ControllingBehavior => "controlling_behavior",
            DangerIndicator::Jealousy => "jealousy",
            DangerIndicator::SeparationThreats => "separation_threats",
            DangerIndicator::Unemployment => "unemployment",
            DangerIndicator::Stalking => "stalking",
            DangerIndicator::ChildrenThreatened => "children_threatened",
            DangerIndicator::SuicideThreats => "suicide_threats",
            DangerIndicator::PriorPoliceCalls => "prior_police_calls",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|indicator| indicator.key() == key)
    }
}

impl std::fmt::Display for DangerIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Sum of every weight in the table; the denominator of the normalized score.
pub const MAX_WEIGHT: f64 = total_weight(&DangerIndicator::ALL);

const fn total_weight(table: &[DangerIndicator]) -> f64 {
    let mut total = 0.0;
    let mut i = 0;
    while i < table.len() {
        total += table[i].weight();
        i += 1;
    }
    total
}

/// Sparse indicator answers for one assessment submission.
///
/// Keys are kept verbatim so that callers can round-trip what they sent;
/// keys outside the vocabulary are carried but never scored.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct DangerIndicatorSet {
    answers: BTreeMap<String, bool>,
}

impl DangerIndicatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set in which exactly the given indicators are present.
    pub fn with_present(indicators: impl IntoIterator<Item = DangerIndicator>) -> Self {
        indicators
            .into_iter()
            .map(|indicator| (indicator.key().to_string(), true))
            .collect()
    }

    pub fn set(&mut self, indicator: DangerIndicator, present: bool) -> &mut Self {
        self.answers.insert(indicator.key().to_string(), present);
        self
    }

    /// Missing keys read as absent.
    pub fn is_present(&self, indicator: DangerIndicator) -> bool {
        self.answers.get(indicator.key()).copied().unwrap_or(false)
    }

    pub fn present(&self) -> impl Iterator<Item = DangerIndicator> + '_ {
        DangerIndicator::ALL
            .into_iter()
            .filter(|indicator| self.is_present(*indicator))
    }

    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.answers
            .keys()
            .map(String::as_str)
            .filter(|key| DangerIndicator::from_key(key).is_none())
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl FromIterator<(String, bool)> for DangerIndicatorSet {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}
