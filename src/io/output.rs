use crate::core::{Error, RiskLevel};
use crate::lethality::LethalityAssessment;
use crate::matching::SimilarityResult;
use crate::profiling::{AnalysisSource, CaseAnalysis};
use crate::statistics::{RiskOverview, StateHeatmapEntry};
use anyhow::Context;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> crate::core::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "terminal" => Ok(OutputFormat::Terminal),
            other => Err(Error::Configuration(format!(
                "unknown output format '{other}'"
            ))),
        }
    }
}

/// Everything a command can hand to a writer.
#[derive(Debug, Serialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum Report<'a> {
    Lethality(&'a LethalityAssessment),
    Matches {
        case_id: u64,
        matches: &'a [SimilarityResult],
    },
    Profile {
        case_id: u64,
        analysis: &'a CaseAnalysis,
    },
    Statistics {
        overview: &'a RiskOverview,
        heatmap: &'a [StateHeatmapEntry],
    },
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report<'_>) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report<'_>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &Report<'_>) -> anyhow::Result<()> {
        match report {
            Report::Lethality(assessment) => self.write_lethality(assessment)?,
            Report::Matches { case_id, matches } => self.write_matches(*case_id, matches)?,
            Report::Profile { case_id, analysis } => self.write_profile(*case_id, analysis)?,
            Report::Statistics { overview, heatmap } => {
                self.write_statistics(overview, heatmap)?
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_lethality(&mut self, assessment: &LethalityAssessment) -> anyhow::Result<()> {
        writeln!(self.writer, "# Lethality Assessment")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Score | {:.1} / 100 |", assessment.score)?;
        writeln!(self.writer, "| Risk Level | {} |", assessment.level)?;
        writeln!(self.writer)?;

        let present: Vec<String> = assessment
            .present_indicators
            .iter()
            .map(|indicator| format!("`{}`", indicator.key()))
            .collect();
        self.write_bullets("Indicators Present", &present)?;
        self.write_numbered("Recommendations", &assessment.recommendations)?;
        Ok(())
    }

    fn write_matches(&mut self, case_id: u64, matches: &[SimilarityResult]) -> anyhow::Result<()> {
        writeln!(self.writer, "# Similar Cases for Case {case_id}")?;
        writeln!(self.writer)?;

        if matches.is_empty() {
            writeln!(self.writer, "No cases above the similarity threshold.")?;
            return Ok(());
        }

        writeln!(self.writer, "| Rank | Case | Similarity | Matching Factors |")?;
        writeln!(self.writer, "|------|------|------------|------------------|")?;
        for (rank, result) in matches.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {:.3} | {} |",
                rank + 1,
                case_label(result),
                result.similarity_score,
                factor_list(result)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_profile(&mut self, case_id: u64, analysis: &CaseAnalysis) -> anyhow::Result<()> {
        let view = ProfileView::of(analysis);

        writeln!(self.writer, "# {}: Case {case_id}", view.title)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Lethality Risk | {:.1} / 10 |", view.lethality_risk)?;
        writeln!(self.writer, "| Confidence | {:.2} |", view.confidence)?;
        writeln!(self.writer, "| Source | {} |", view.source.as_str())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", view.narrative)?;
        writeln!(self.writer)?;

        for (title, items) in view.sections {
            self.write_bullets(title, items)?;
        }
        Ok(())
    }

    fn write_statistics(
        &mut self,
        overview: &RiskOverview,
        heatmap: &[StateHeatmapEntry],
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "# Case Statistics")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Total Cases | {} |", overview.total_cases)?;
        writeln!(
            self.writer,
            "| High Risk Cases | {} ({:.0}%) |",
            overview.high_risk_cases,
            overview.high_risk_ratio() * 100.0
        )?;
        writeln!(self.writer, "| Recent Cases | {} |", overview.recent_cases)?;
        writeln!(self.writer, "| Unassessed | {} |", overview.unassessed_cases)?;
        writeln!(self.writer)?;

        writeln!(self.writer, "## Risk Distribution")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Level | Cases |")?;
        writeln!(self.writer, "|-------|-------|")?;
        for (level, count) in &overview.risk_distribution {
            writeln!(self.writer, "| {level} | {count} |")?;
        }
        writeln!(self.writer)?;

        if !heatmap.is_empty() {
            writeln!(self.writer, "## Cases by State")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| State | Cases | High Risk |")?;
            writeln!(self.writer, "|-------|-------|-----------|")?;
            for entry in heatmap {
                writeln!(
                    self.writer,
                    "| {} | {} | {} |",
                    entry.state, entry.case_count, entry.high_risk_count
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_bullets(&mut self, title: &str, items: &[String]) -> anyhow::Result<()> {
        if items.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## {title}")?;
        writeln!(self.writer)?;
        for item in items {
            writeln!(self.writer, "- {item}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_numbered(&mut self, title: &str, items: &[String]) -> anyhow::Result<()> {
        if items.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## {title}")?;
        writeln!(self.writer)?;
        for (i, item) in items.iter().enumerate() {
            writeln!(self.writer, "{}. {item}", i + 1)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report<'_>) -> anyhow::Result<()> {
        match report {
            Report::Lethality(assessment) => self.print_lethality(assessment)?,
            Report::Matches { case_id, matches } => self.print_matches(*case_id, matches)?,
            Report::Profile { case_id, analysis } => self.print_profile(*case_id, analysis)?,
            Report::Statistics { overview, heatmap } => self.print_statistics(overview, heatmap)?,
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_header(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", title.bold().blue())?;
        writeln!(self.writer, "{}", "=".repeat(title.len()).blue())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_lethality(&mut self, assessment: &LethalityAssessment) -> anyhow::Result<()> {
        self.print_header("Lethality Assessment")?;
        writeln!(self.writer, "  Score: {:.1} / 100", assessment.score)?;
        writeln!(self.writer, "  Risk level: {}", colored_level(assessment.level))?;

        if !assessment.present_indicators.is_empty() {
            let keys: Vec<&str> = assessment
                .present_indicators
                .iter()
                .map(|indicator| indicator.key())
                .collect();
            writeln!(self.writer, "  Indicators present: {}", keys.join(", "))?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", "Recommendations:".bold())?;
        for (i, item) in assessment.recommendations.iter().enumerate() {
            writeln!(self.writer, "  {}. {item}", i + 1)?;
        }
        Ok(())
    }

    fn print_matches(&mut self, case_id: u64, matches: &[SimilarityResult]) -> anyhow::Result<()> {
        self.print_header(&format!("Similar Cases for Case {case_id}"))?;

        if matches.is_empty() {
            writeln!(self.writer, "  No cases above the similarity threshold.")?;
            return Ok(());
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["Rank", "Case", "Similarity", "Matching Factors"]);
        for (rank, result) in matches.iter().enumerate() {
            table.add_row(vec![
                (rank + 1).to_string(),
                case_label(result),
                format!("{:.3}", result.similarity_score),
                factor_list(result),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn print_profile(&mut self, case_id: u64, analysis: &CaseAnalysis) -> anyhow::Result<()> {
        let view = ProfileView::of(analysis);
        self.print_header(&format!("{}: Case {case_id}", view.title))?;

        writeln!(self.writer, "  Lethality risk: {:.1} / 10", view.lethality_risk)?;
        writeln!(self.writer, "  Confidence: {:.2}", view.confidence)?;
        let source = match view.source {
            AnalysisSource::Collaborator => view.source.as_str().green(),
            AnalysisSource::Fallback => view.source.as_str().yellow(),
        };
        writeln!(self.writer, "  Source: {source}")?;
        writeln!(self.writer, "  {}", view.narrative)?;

        for (title, items) in view.sections {
            if items.is_empty() {
                continue;
            }
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", format!("{title}:").bold())?;
            for item in items {
                writeln!(self.writer, "  - {item}")?;
            }
        }
        Ok(())
    }

    fn print_statistics(
        &mut self,
        overview: &RiskOverview,
        heatmap: &[StateHeatmapEntry],
    ) -> anyhow::Result<()> {
        self.print_header("Case Statistics")?;
        writeln!(self.writer, "  Total cases: {}", overview.total_cases)?;
        writeln!(
            self.writer,
            "  High risk cases: {} ({:.0}%)",
            overview.high_risk_cases.to_string().red(),
            overview.high_risk_ratio() * 100.0
        )?;
        writeln!(self.writer, "  Recent cases (30 days): {}", overview.recent_cases)?;
        writeln!(self.writer, "  Unassessed: {}", overview.unassessed_cases)?;
        writeln!(self.writer)?;

        let mut distribution = Table::new();
        distribution
            .load_preset(UTF8_FULL)
            .set_header(vec!["Risk Level", "Cases"]);
        for (level, count) in &overview.risk_distribution {
            distribution.add_row(vec![level.to_string(), count.to_string()]);
        }
        writeln!(self.writer, "{distribution}")?;

        if !heatmap.is_empty() {
            let mut states = Table::new();
            states
                .load_preset(UTF8_FULL)
                .set_header(vec!["State", "Cases", "High Risk"]);
            for entry in heatmap {
                states.add_row(vec![
                    entry.state.clone(),
                    entry.case_count.to_string(),
                    entry.high_risk_count.to_string(),
                ]);
            }
            writeln!(self.writer)?;
            writeln!(self.writer, "{states}")?;
        }
        Ok(())
    }
}

struct ProfileView<'a> {
    title: &'static str,
    narrative: &'a str,
    lethality_risk: f64,
    confidence: f64,
    source: AnalysisSource,
    sections: Vec<(&'static str, &'a [String])>,
}

impl<'a> ProfileView<'a> {
    fn of(analysis: &'a CaseAnalysis) -> Self {
        match analysis {
            CaseAnalysis::SuspectProfile(analysis) => {
                let profile = &analysis.profile;
                Self {
                    title: "Suspect Profile",
                    narrative: &profile.psychological_profile,
                    lethality_risk: profile.lethality_risk,
                    confidence: profile.confidence_score,
                    source: analysis.source,
                    sections: vec![
                        ("Behavioral Patterns", profile.behavioral_patterns.as_slice()),
                        ("Risk Factors", profile.risk_factors.as_slice()),
                        ("Warning Signs", profile.warning_signs.as_slice()),
                        ("Recommendations", profile.recommendations.as_slice()),
                    ],
                }
            }
            CaseAnalysis::VictimProfile(analysis) => {
                let profile = &analysis.profile;
                Self {
                    title: "Victim Profile",
                    narrative: &profile.vulnerability_profile,
                    lethality_risk: profile.lethality_risk,
                    confidence: profile.confidence_score,
                    source: analysis.source,
                    sections: vec![
                        ("Trauma Indicators", profile.trauma_indicators.as_slice()),
                        ("Risk Factors", profile.risk_factors.as_slice()),
                        ("Protective Factors", profile.protective_factors.as_slice()),
                        (
                            "Safety Recommendations",
                            profile.safety_recommendations.as_slice(),
                        ),
                    ],
                }
            }
        }
    }
}

fn colored_level(level: RiskLevel) -> ColoredString {
    let label = level.to_string();
    match level {
        RiskLevel::Low => label.green(),
        RiskLevel::Moderate => label.yellow(),
        RiskLevel::High => label.red(),
        RiskLevel::Extreme => label.red().bold(),
    }
}

fn case_label(result: &SimilarityResult) -> String {
    match &result.case_number {
        Some(number) => format!("{} ({number})", result.case_id),
        None => result.case_id.to_string(),
    }
}

fn factor_list(result: &SimilarityResult) -> String {
    if result.matching_factors.is_empty() {
        return "-".to_string();
    }
    result
        .matching_factors
        .iter()
        .map(|factor| factor.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Writer for `format`, sending output to `output` when given, else stdout.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => {
            if output.is_some() {
                colored::control::set_override(false);
            }
            Box::new(TerminalWriter::new(sink))
        }
    })
}
