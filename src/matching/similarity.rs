//! Pairwise comparison of case feature vectors.
//!
//! Four factor categories are always attempted: case type, location, risk
//! score proximity, and description overlap. The blended score is the sum of
//! the weighted contributions divided by the number of categories attempted,
//! not the number that fired. A category that cannot be evaluated (no risk
//! score on one side, an empty description) still counts toward the divisor
//! and contributes zero. With the default weights the blended score therefore
//! never exceeds `1 / FACTOR_CATEGORIES`.

use super::features::CaseFeatureVector;
use super::MatchingFactor;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const CASE_TYPE_WEIGHT: f64 = 0.3;
pub const LOCATION_WEIGHT: f64 = 0.2;
pub const RISK_PROXIMITY_WEIGHT: f64 = 0.3;
pub const LEXICAL_WEIGHT: f64 = 0.2;

/// Number of factor categories every comparison attempts.
pub const FACTOR_CATEGORIES: usize = 4;

/// Weighted contribution of each factor category, in blended-score units.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default, Copy)]
pub struct SimilarityBreakdown {
    pub case_type: f64,
    pub location: f64,
    pub risk_proximity: f64,
    pub lexical_overlap: f64,
}

impl SimilarityBreakdown {
    pub fn contributions(&self) -> [f64; FACTOR_CATEGORIES] {
        [
            self.case_type,
            self.location,
            self.risk_proximity,
            self.lexical_overlap,
        ]
    }

    pub fn sum(&self) -> f64 {
        self.contributions().iter().sum()
    }

    /// Blended similarity: weighted sum over the fixed category count.
    pub fn total(&self) -> f64 {
        self.sum() / FACTOR_CATEGORIES as f64
    }
}

pub fn compare(a: &CaseFeatureVector, b: &CaseFeatureVector) -> SimilarityBreakdown {
    SimilarityBreakdown {
        case_type: case_type_contribution(a, b),
        location: location_contribution(a, b),
        risk_proximity: risk_proximity_contribution(a, b),
        lexical_overlap: lexical_contribution(a, b),
    }
}

pub fn similarity(a: &CaseFeatureVector, b: &CaseFeatureVector) -> f64 {
    compare(a, b).total()
}

pub fn case_type_contribution(a: &CaseFeatureVector, b: &CaseFeatureVector) -> f64 {
    if a.case_type == b.case_type {
        CASE_TYPE_WEIGHT
    } else {
        0.0
    }
}

pub fn location_contribution(a: &CaseFeatureVector, b: &CaseFeatureVector) -> f64 {
    if a.location_state == b.location_state {
        LOCATION_WEIGHT
    } else {
        0.0
    }
}

/// Only evaluated when both sides carry a non-zero score.
pub fn risk_proximity_contribution(a: &CaseFeatureVector, b: &CaseFeatureVector) -> f64 {
    if !(a.has_risk_score() && b.has_risk_score()) {
        return 0.0;
    }

    let diff = (a.risk_score - b.risk_score).abs();
    (1.0 - diff / 100.0).max(0.0) * RISK_PROXIMITY_WEIGHT
}

/// Only evaluated when both descriptions are non-empty.
pub fn lexical_contribution(a: &CaseFeatureVector, b: &CaseFeatureVector) -> f64 {
    if a.description_text.is_empty() || b.description_text.is_empty() {
        return 0.0;
    }

    lexical_overlap(&a.description_text, &b.description_text) * LEXICAL_WEIGHT
}

/// Distinct shared tokens over the longer token list.
///
/// Tokens are whitespace-split after lower-casing; punctuation stays attached,
/// so `threats.` and `threats` are different tokens.
pub fn lexical_overlap(text_a: &str, text_b: &str) -> f64 {
    let lower_a = text_a.to_lowercase();
    let lower_b = text_b.to_lowercase();
    let tokens_a = tokenize(&lower_a);
    let tokens_b = tokenize(&lower_b);

    let longest = tokens_a.len().max(tokens_b.len());
    if longest == 0 {
        return 0.0;
    }

    let set_a: HashSet<&str> = tokens_a.iter().copied().collect();
    let set_b: HashSet<&str> = tokens_b.iter().copied().collect();
    let common = set_a.intersection(&set_b).count();

    common as f64 / longest as f64
}

fn tokenize(content: &str) -> Vec<&str> {
    content.split_whitespace().collect()
}

/// Factors cited for a retained match, always in declaration order.
pub fn matching_factors(
    a: &CaseFeatureVector,
    b: &CaseFeatureVector,
    risk_tolerance: f64,
) -> Vec<MatchingFactor> {
    let mut factors = Vec::with_capacity(FACTOR_CATEGORIES - 1);

    if a.case_type == b.case_type {
        factors.push(MatchingFactor::CaseType);
    }
    if a.location_state == b.location_state {
        factors.push(MatchingFactor::Location);
    }
    if (a.risk_score - b.risk_score).abs() < risk_tolerance {
        factors.push(MatchingFactor::RiskLevel);
    }

    factors
}
