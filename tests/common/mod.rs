// Shared builders for dvtriage integration tests
#![allow(dead_code)]

use dvtriage::{Case, CaseType, Suspect, Victim};

/// Fluent builder over `Case` so tests only spell out what they compare.
#[derive(Debug, Clone)]
pub struct CaseBuilder {
    case: Case,
}

impl CaseBuilder {
    pub fn new(id: u64) -> Self {
        Self {
            case: Case::new(id, format!("Case {id}")),
        }
    }

    pub fn case_number(mut self, number: &str) -> Self {
        self.case.case_number = Some(number.to_string());
        self
    }

    pub fn case_type(mut self, case_type: CaseType) -> Self {
        self.case.case_type = Some(case_type);
        self
    }

    pub fn state(mut self, state: &str) -> Self {
        self.case.location_state = Some(state.to_string());
        self
    }

    pub fn risk(mut self, score: f64) -> Self {
        self.case.risk_score = Some(score);
        self.case.risk_level = Some(dvtriage::classify(score));
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.case.description = Some(text.to_string());
        self
    }

    pub fn suspect(mut self, suspect: Suspect) -> Self {
        self.case.suspects.push(suspect);
        self
    }

    pub fn victim(mut self, victim: Victim) -> Self {
        self.case.victims.push(victim);
        self
    }

    pub fn build(self) -> Case {
        self.case
    }
}

/// The worked example: a California DV homicide with stalking and firearm
/// threats, scored at 80.
pub fn stalking_target() -> Case {
    CaseBuilder::new(1)
        .case_number("DV-2024-001")
        .case_type(CaseType::DvHomicide)
        .state("CA")
        .risk(80.0)
        .description("history of stalking and firearm threats")
        .build()
}

pub fn stalking_candidate(id: u64) -> Case {
    CaseBuilder::new(id)
        .case_number(&format!("DV-2024-{id:03}"))
        .case_type(CaseType::DvHomicide)
        .state("CA")
        .risk(85.0)
        .description("stalking and firearm threats documented")
        .build()
}

pub fn armed_suspect() -> Suspect {
    Suspect {
        name: "J. Doe".to_string(),
        firearm_access: Some(true),
        substance_abuse: Some(true),
        criminal_history: Some("2019 assault".to_string()),
        ..Default::default()
    }
}

pub fn dependent_victim() -> Victim {
    Victim {
        name: "A. Roe".to_string(),
        financial_dependence: Some(true),
        children_involved: Some(true),
        prior_dv_reports: Some(4),
        isolation_level: Some("moderate".to_string()),
        ..Default::default()
    }
}
