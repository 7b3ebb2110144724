use serde::{Deserialize, Serialize};

/// Similarity matching thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Candidates must score strictly above this to be returned
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    /// Maximum number of matches returned
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Risk scores closer than this cite the `risk_level` factor
    #[serde(default = "default_risk_level_tolerance")]
    pub risk_level_tolerance: f64,

    /// Score large candidate sets on the rayon pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            max_results: default_max_results(),
            risk_level_tolerance: default_risk_level_tolerance(),
            parallel: default_parallel(),
        }
    }
}

impl MatcherConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(format!(
                "similarity_threshold must be within [0, 1], got {}",
                self.similarity_threshold
            ));
        }

        if self.max_results == 0 {
            return Err("max_results must be at least 1".to_string());
        }

        if self.risk_level_tolerance.is_nan() || self.risk_level_tolerance < 0.0 {
            return Err(format!(
                "risk_level_tolerance must be non-negative, got {}",
                self.risk_level_tolerance
            ));
        }

        Ok(())
    }
}

pub fn default_similarity_threshold() -> f64 {
    0.7
}
pub fn default_max_results() -> usize {
    10
}
pub fn default_risk_level_tolerance() -> f64 {
    20.0
}
pub fn default_parallel() -> bool {
    true
}
