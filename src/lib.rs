//! Risk and pattern analysis for domestic-violence case triage.
//!
//! Two pure scoring services sit at the center:
//! - [`lethality::LethalityScorer`] turns a danger-indicator submission into a
//!   normalized 0-100 score and a four-level classification.
//! - [`matching::CaseMatcher`] ranks a case collection by similarity to one
//!   case and explains each match.
//!
//! Around them, [`profiling`] wraps an optional generative collaborator with
//! a deterministic fallback, and [`statistics`] aggregates a collection.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod lethality;
pub mod matching;
pub mod observability;
pub mod profiling;
pub mod statistics;

pub use crate::core::{Case, CaseType, Error, Result, RiskLevel, Suspect, Victim};

pub use crate::lethality::{
    classify, DangerIndicator, DangerIndicatorSet, LethalityAssessment, LethalityScore,
    LethalityScorer,
};

pub use crate::matching::{find_matches, CaseMatcher, MatchingFactor, SimilarityResult};

pub use crate::profiling::{
    AnalysisKind, AnalysisSource, CaseAnalysis, CollaboratorError, OfflineCollaborator,
    ProfileAnalysis, ProfileCollaborator, ProfileEngine, SuspectProfile, VictimProfile,
};

pub use crate::config::{DvTriageConfig, MatcherConfig};
