use crate::core::Case;
use serde::{Deserialize, Serialize};

/// Read-only projection of a case used for similarity comparison.
///
/// Missing text fields become empty strings and a missing risk score
/// becomes 0.0, which the comparison treats as "no score".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct CaseFeatureVector {
    pub case_type: String,
    pub location_state: String,
    pub description_text: String,
    pub risk_score: f64,
    pub has_suspects: bool,
    pub has_victims: bool,
}

impl CaseFeatureVector {
    pub fn has_risk_score(&self) -> bool {
        self.risk_score != 0.0
    }
}

pub fn extract_features(case: &Case) -> CaseFeatureVector {
    CaseFeatureVector {
        case_type: case
            .case_type
            .map(|case_type| case_type.as_str().to_string())
            .unwrap_or_default(),
        location_state: case.location_state.clone().unwrap_or_default(),
        description_text: case.description.clone().unwrap_or_default(),
        risk_score: case.risk_score.unwrap_or(0.0),
        has_suspects: !case.suspects.is_empty(),
        has_victims: !case.victims.is_empty(),
    }
}
