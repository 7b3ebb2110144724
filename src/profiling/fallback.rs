//! Deterministic profile estimates used when the collaborator is unavailable.
//!
//! Each estimate starts from a base value and adds a fixed increment per
//! present risk factor, capped at [`MAX_LETHALITY_RISK`].

use super::{SuspectProfile, VictimProfile, FALLBACK_CONFIDENCE, MAX_LETHALITY_RISK};
use crate::core::{Suspect, Victim};

const SUSPECT_BASE_RISK: f64 = 5.0;
const FIREARM_INCREMENT: f64 = 2.0;
const SUBSTANCE_INCREMENT: f64 = 1.5;
const CRIMINAL_HISTORY_INCREMENT: f64 = 1.0;
const MENTAL_HEALTH_INCREMENT: f64 = 1.0;

const VICTIM_BASE_VULNERABILITY: f64 = 3.0;
const FINANCIAL_DEPENDENCE_INCREMENT: f64 = 2.0;
const CHILDREN_INCREMENT: f64 = 1.5;
const REPEAT_REPORTS_INCREMENT: f64 = 1.5;

pub fn suspect_risk_estimate(suspect: &Suspect) -> f64 {
    let increments = [
        (suspect.has_firearm_access(), FIREARM_INCREMENT),
        (suspect.has_substance_abuse(), SUBSTANCE_INCREMENT),
        (suspect.has_criminal_history(), CRIMINAL_HISTORY_INCREMENT),
        (suspect.has_mental_health_history(), MENTAL_HEALTH_INCREMENT),
    ];

    increments
        .iter()
        .filter(|(present, _)| *present)
        .fold(SUSPECT_BASE_RISK, |acc, (_, increment)| acc + increment)
}

pub fn victim_vulnerability_estimate(victim: &Victim) -> f64 {
    let increments = [
        (victim.has_financial_dependence(), FINANCIAL_DEPENDENCE_INCREMENT),
        (victim.has_children_involved(), CHILDREN_INCREMENT),
        (victim.has_multiple_prior_reports(), REPEAT_REPORTS_INCREMENT),
    ];

    increments
        .iter()
        .filter(|(present, _)| *present)
        .fold(VICTIM_BASE_VULNERABILITY, |acc, (_, increment)| {
            acc + increment
        })
}

pub fn suspect_risk_factors(suspect: &Suspect) -> Vec<String> {
    [
        (suspect.has_firearm_access(), "Firearm access"),
        (suspect.has_substance_abuse(), "Substance abuse"),
        (suspect.has_criminal_history(), "Criminal history"),
        (suspect.has_mental_health_history(), "Mental health concerns"),
    ]
    .into_iter()
    .filter(|(present, _)| *present)
    .map(|(_, label)| label.to_string())
    .collect()
}

pub fn victim_risk_factors(victim: &Victim) -> Vec<String> {
    [
        (victim.has_financial_dependence(), "Financial dependence"),
        (victim.has_children_involved(), "Children involved"),
        (victim.is_highly_isolated(), "Social isolation"),
        (victim.has_multiple_prior_reports(), "Multiple prior reports"),
    ]
    .into_iter()
    .filter(|(present, _)| *present)
    .map(|(_, label)| label.to_string())
    .collect()
}

pub fn fallback_suspect_profile(suspect: &Suspect) -> SuspectProfile {
    let risk = suspect_risk_estimate(suspect);

    let behavioral_patterns = if risk > 6.0 {
        labels(&["Control", "Escalation"])
    } else {
        labels(&["Moderate risk"])
    };

    let warning_signs = if suspect.has_firearm_access() || suspect.has_substance_abuse() {
        labels(&["Firearm access", "Substance abuse"])
    } else {
        Vec::new()
    };

    let recommendations = if risk > 7.0 {
        labels(&["Immediate safety planning", "Law enforcement notification"])
    } else {
        labels(&["Safety planning", "Monitoring"])
    };

    SuspectProfile {
        psychological_profile: "Basic risk assessment based on available factors".to_string(),
        behavioral_patterns,
        risk_factors: suspect_risk_factors(suspect),
        warning_signs,
        lethality_risk: risk.min(MAX_LETHALITY_RISK),
        recommendations,
        confidence_score: FALLBACK_CONFIDENCE,
    }
}

pub fn fallback_victim_profile(victim: &Victim) -> VictimProfile {
    let vulnerability = victim_vulnerability_estimate(victim);

    let trauma_indicators = if vulnerability > 5.0 {
        labels(&["Financial dependence", "Multiple reports"])
    } else {
        Vec::new()
    };

    let protective_factors = if victim.is_highly_isolated() {
        Vec::new()
    } else {
        labels(&["Support system"])
    };

    VictimProfile {
        vulnerability_profile: "Basic vulnerability assessment".to_string(),
        trauma_indicators,
        risk_factors: victim_risk_factors(victim),
        protective_factors,
        safety_recommendations: labels(&[
            "Safety planning",
            "Resource connection",
            "Legal advocacy",
        ]),
        lethality_risk: vulnerability.min(MAX_LETHALITY_RISK),
        confidence_score: FALLBACK_CONFIDENCE,
    }
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
