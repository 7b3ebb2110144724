//! CLI command implementations.
//!
//! Each submodule loads its inputs, runs one engine operation and hands the
//! result to an [`OutputWriter`](crate::io::OutputWriter):
//! - **score**: lethality assessment of an indicator submission
//! - **similar**: ranked similar cases for one case
//! - **profile**: suspect or victim profile for one case
//! - **stats**: risk overview and per-state heatmap
//! - **init**: write a default `.dvtriage.toml`

pub mod init;
pub mod profile;
pub mod score;
pub mod similar;
pub mod stats;

pub use init::init_config;

use crate::cli::{Commands, OutputArgs};
use crate::config::{load_config, load_config_from, DvTriageConfig};
use crate::io::{create_writer, OutputFormat, Report};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::warn;

/// Explicit `--config` must load; otherwise search upward and default.
pub fn resolve_config(explicit: Option<&Path>) -> Result<DvTriageConfig> {
    match explicit {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(load_config()),
    }
}

pub fn run(command: Commands, config: &DvTriageConfig) -> Result<()> {
    match command {
        Commands::Score { indicators, output } => score::handle_score(&indicators, &output, config),
        Commands::Match {
            cases,
            case_id,
            top,
            output,
        } => similar::handle_match(&cases, case_id, top, &output, config),
        Commands::Profile {
            cases,
            case_id,
            kind,
            output,
        } => profile::handle_profile(&cases, case_id, kind.into(), &output, config),
        Commands::Stats { cases, output } => stats::handle_stats(&cases, &output, config),
        Commands::Init { force } => init_config(force),
    }
}

pub(crate) fn resolve_format(args: &OutputArgs, config: &DvTriageConfig) -> OutputFormat {
    if let Some(format) = args.format {
        return format.into();
    }

    match config.default_format() {
        Some(name) => name.parse().unwrap_or_else(|e| {
            warn!("{}. Using terminal output.", e);
            OutputFormat::Terminal
        }),
        None => OutputFormat::Terminal,
    }
}

pub(crate) fn emit(report: &Report<'_>, args: &OutputArgs, config: &DvTriageConfig) -> Result<()> {
    let format = resolve_format(args, config);
    let mut writer = create_writer(format, args.output.as_deref())?;
    writer.write_report(report)
}
