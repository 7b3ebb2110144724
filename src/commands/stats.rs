use super::emit;
use crate::cli::OutputArgs;
use crate::config::DvTriageConfig;
use crate::io::{self, Report};
use crate::statistics;
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::Path;

pub fn handle_stats(cases_path: &Path, output: &OutputArgs, config: &DvTriageConfig) -> Result<()> {
    let cases = io::load_cases(cases_path)
        .with_context(|| format!("Failed to load cases from {}", cases_path.display()))?;

    let overview = statistics::overview(&cases, Utc::now());
    let heatmap = statistics::heatmap(&cases);

    emit(
        &Report::Statistics {
            overview: &overview,
            heatmap: &heatmap,
        },
        output,
        config,
    )
}
