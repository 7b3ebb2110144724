use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dvtriage")]
#[command(about = "Lethality scoring and similar-case matching for DV case triage", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Configuration file (defaults to the nearest .dvtriage.toml)
    #[arg(long, global = true, env = "DVTRIAGE_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a danger-indicator submission
    Score {
        /// JSON object of indicator name to true/false
        indicators: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Find cases similar to one case in a collection
    Match {
        /// JSON array of case records
        cases: PathBuf,

        /// Id of the case to match against the rest
        #[arg(long = "case")]
        case_id: u64,

        /// Override the configured maximum number of results
        #[arg(long)]
        top: Option<usize>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Profile the first suspect or victim of a case
    Profile {
        /// JSON array of case records
        cases: PathBuf,

        /// Id of the case to profile
        #[arg(long = "case")]
        case_id: u64,

        /// Which profile to produce
        #[arg(long, value_enum, default_value = "suspect-profile")]
        kind: ProfileKind,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Summarize risk across a case collection
    Stats {
        /// JSON array of case records
        cases: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format (defaults to the configured format, then terminal)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProfileKind {
    SuspectProfile,
    VictimProfile,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

impl From<ProfileKind> for crate::profiling::AnalysisKind {
    fn from(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::SuspectProfile => crate::profiling::AnalysisKind::SuspectProfile,
            ProfileKind::VictimProfile => crate::profiling::AnalysisKind::VictimProfile,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
