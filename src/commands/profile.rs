use super::emit;
use crate::cli::OutputArgs;
use crate::config::DvTriageConfig;
use crate::io::{self, Report};
use crate::profiling::{AnalysisKind, OfflineCollaborator, ProfileEngine};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Profiles a case without a generative backend, so every profile comes from
/// the deterministic fallback estimators.
pub fn handle_profile(
    cases_path: &Path,
    case_id: u64,
    kind: AnalysisKind,
    output: &OutputArgs,
    config: &DvTriageConfig,
) -> Result<()> {
    let cases = io::load_cases(cases_path)
        .with_context(|| format!("Failed to load cases from {}", cases_path.display()))?;
    let case = io::find_case(&cases, case_id)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("Failed to start async runtime")?;
    let engine = ProfileEngine::new(OfflineCollaborator);
    let analysis = runtime.block_on(engine.analyze_case(case, kind))?;

    info!(
        case_id,
        source = analysis.source().as_str(),
        confidence = analysis.confidence_score(),
        "profile complete"
    );

    emit(
        &Report::Profile {
            case_id,
            analysis: &analysis,
        },
        output,
        config,
    )
}
