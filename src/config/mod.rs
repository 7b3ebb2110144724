// Sub-modules
mod loader;
mod matching;

pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
pub use matching::{
    default_max_results, default_parallel, default_risk_level_tolerance,
    default_similarity_threshold, MatcherConfig,
};

use serde::{Deserialize, Serialize};

/// Root configuration structure for dvtriage
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DvTriageConfig {
    /// Similarity matching configuration
    #[serde(default)]
    pub matching: Option<MatcherConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl DvTriageConfig {
    pub fn matcher(&self) -> MatcherConfig {
        self.matching.clone().unwrap_or_default()
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|output| output.default_format.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// One of `json`, `markdown`, `terminal`
    pub default_format: Option<String>,
}

/// Commented default written by `dvtriage init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# dvtriage configuration

[matching]
# Candidates must score strictly above this similarity (0.0 - 1.0).
# Blended scores divide four weighted factors by 4 and never exceed 0.25.
similarity_threshold = 0.7
# Maximum number of similar cases returned
max_results = 10
# Risk scores closer than this cite the risk_level factor
risk_level_tolerance = 20.0
# Score large candidate sets in parallel
parallel = true

[output]
default_format = "terminal"
"#;
