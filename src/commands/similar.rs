use super::emit;
use crate::cli::OutputArgs;
use crate::config::DvTriageConfig;
use crate::io::{self, Report};
use crate::matching::CaseMatcher;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

pub fn handle_match(
    cases_path: &Path,
    case_id: u64,
    top: Option<usize>,
    output: &OutputArgs,
    config: &DvTriageConfig,
) -> Result<()> {
    let cases = io::load_cases(cases_path)
        .with_context(|| format!("Failed to load cases from {}", cases_path.display()))?;
    let target = io::find_case(&cases, case_id)?;

    let mut matcher_config = config.matcher();
    if let Some(top) = top {
        if top == 0 {
            anyhow::bail!("--top must be at least 1");
        }
        matcher_config.max_results = top;
    }

    let matches = CaseMatcher::new(matcher_config).find_matches(target, &cases);
    info!(
        case_id,
        candidates = cases.len().saturating_sub(1),
        matches = matches.len(),
        "similar-case search complete"
    );

    emit(
        &Report::Matches {
            case_id,
            matches: &matches,
        },
        output,
        config,
    )
}
