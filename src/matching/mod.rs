//! Cross-case similarity matching.
//!
//! Extraction ([`features`]) and comparison ([`similarity`]) are separate
//! pure functions; [`CaseMatcher`] only orchestrates them: drop the target
//! from the candidates, score the rest, keep those above the threshold, cite
//! the factors that matched, then rank.

pub mod features;
pub mod similarity;

pub use features::{extract_features, CaseFeatureVector};
pub use similarity::{compare, lexical_overlap, matching_factors, SimilarityBreakdown};

use crate::config::MatcherConfig;
use crate::core::Case;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Below this many candidates the rayon hand-off costs more than it saves.
const PARALLEL_MIN_CANDIDATES: usize = 256;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Copy, Ord, PartialOrd)]
#[serde(rename_all = "snake_case")]
pub enum MatchingFactor {
    CaseType,
    Location,
    RiskLevel,
}

impl MatchingFactor {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchingFactor::CaseType => "case_type",
            MatchingFactor::Location => "location",
            MatchingFactor::RiskLevel => "risk_level",
        }
    }
}

impl std::fmt::Display for MatchingFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SimilarityResult {
    pub case_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_number: Option<String>,
    pub similarity_score: f64,
    pub matching_factors: Vec<MatchingFactor>,
}

#[derive(Clone, Debug, Default)]
pub struct CaseMatcher {
    config: MatcherConfig,
}

impl CaseMatcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Ranks `candidates` by similarity to `target`.
    ///
    /// The result holds at most `max_results` entries, each strictly above
    /// the similarity threshold, sorted by descending score. Ties keep their
    /// candidate order. The target itself (matched by id) is never returned.
    pub fn find_matches(&self, target: &Case, candidates: &[Case]) -> Vec<SimilarityResult> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let target_features = extract_features(target);
        let score = |candidate: &Case| self.score_candidate(target, &target_features, candidate);

        let mut matches: Vec<SimilarityResult> =
            if self.config.parallel && candidates.len() >= PARALLEL_MIN_CANDIDATES {
                candidates.par_iter().filter_map(score).collect()
            } else {
                candidates.iter().filter_map(score).collect()
            };

        let retained = matches.len();
        // sort_by is stable, so equal scores keep candidate order
        matches.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
        matches.truncate(self.config.max_results);

        debug!(
            target = target.id,
            candidates = candidates.len(),
            retained,
            returned = matches.len(),
            "matched similar cases"
        );

        matches
    }

    fn score_candidate(
        &self,
        target: &Case,
        target_features: &CaseFeatureVector,
        candidate: &Case,
    ) -> Option<SimilarityResult> {
        if candidate.id == target.id {
            return None;
        }

        let candidate_features = extract_features(candidate);
        let similarity_score = compare(target_features, &candidate_features).total();

        if similarity_score <= self.config.similarity_threshold {
            return None;
        }

        Some(SimilarityResult {
            case_id: candidate.id,
            case_number: candidate.case_number.clone(),
            similarity_score,
            matching_factors: matching_factors(
                target_features,
                &candidate_features,
                self.config.risk_level_tolerance,
            ),
        })
    }
}

/// Matches with the default thresholds (0.7 similarity, top 10).
pub fn find_matches(target: &Case, candidates: &[Case]) -> Vec<SimilarityResult> {
    CaseMatcher::default().find_matches(target, candidates)
}
