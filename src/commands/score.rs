use super::emit;
use crate::cli::OutputArgs;
use crate::config::DvTriageConfig;
use crate::io::{self, Report};
use crate::lethality::LethalityScorer;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

pub fn handle_score(indicators: &Path, output: &OutputArgs, config: &DvTriageConfig) -> Result<()> {
    let submission = io::load_indicators(indicators)
        .with_context(|| format!("Failed to load indicators from {}", indicators.display()))?;

    let assessment = LethalityScorer::new().assess(&submission);
    info!(
        score = assessment.score,
        level = assessment.level.as_str(),
        "lethality assessment complete"
    );

    emit(&Report::Lethality(&assessment), output, config)
}
