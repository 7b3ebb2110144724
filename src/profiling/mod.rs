//! Suspect and victim profiles with a deterministic degraded mode.
//!
//! Narrative profiles come from an external generative collaborator behind
//! [`ProfileCollaborator`]. The engine calls it at most once per request and
//! never retries. When the call fails, or the response does not decode into a
//! well-formed profile, the engine returns the [`fallback`] estimate instead
//! of an error. Which path produced a profile is reported through
//! [`AnalysisSource`].

pub mod fallback;

pub use fallback::{fallback_suspect_profile, fallback_victim_profile};

use crate::core::{Case, Error, Result, Suspect, Victim};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use tracing::{debug, warn};

pub const FALLBACK_CONFIDENCE: f64 = 0.6;
pub const SUSPECT_COLLABORATOR_CONFIDENCE: f64 = 0.85;
pub const VICTIM_COLLABORATOR_CONFIDENCE: f64 = 0.82;

/// Upper bound of the 0-10 lethality risk scale used by profiles.
pub const MAX_LETHALITY_RISK: f64 = 10.0;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SuspectProfile {
    pub psychological_profile: String,
    #[serde(default)]
    pub behavioral_patterns: Vec<String>,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    #[serde(default)]
    pub warning_signs: Vec<String>,
    pub lethality_risk: f64,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub confidence_score: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VictimProfile {
    pub vulnerability_profile: String,
    #[serde(default)]
    pub trauma_indicators: Vec<String>,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    #[serde(default)]
    pub protective_factors: Vec<String>,
    #[serde(default)]
    pub safety_recommendations: Vec<String>,
    pub lethality_risk: f64,
    #[serde(default)]
    pub confidence_score: f64,
}

/// Common shape checks applied to collaborator output.
trait Profile: DeserializeOwned {
    fn lethality_risk(&self) -> f64;
    fn stamp_confidence(&mut self, confidence: f64);
}

impl Profile for SuspectProfile {
    fn lethality_risk(&self) -> f64 {
        self.lethality_risk
    }

    fn stamp_confidence(&mut self, confidence: f64) {
        self.confidence_score = confidence;
    }
}

impl Profile for VictimProfile {
    fn lethality_risk(&self) -> f64 {
        self.lethality_risk
    }

    fn stamp_confidence(&mut self, confidence: f64) {
        self.confidence_score = confidence;
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Copy)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    Collaborator,
    Fallback,
}

impl AnalysisSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisSource::Collaborator => "collaborator",
            AnalysisSource::Fallback => "fallback",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProfileAnalysis<T> {
    pub profile: T,
    pub source: AnalysisSource,
}

impl<T> ProfileAnalysis<T> {
    pub fn is_fallback(&self) -> bool {
        self.source == AnalysisSource::Fallback
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CollaboratorError {
    #[error("profile collaborator unavailable: {0}")]
    Unavailable(String),

    #[error("profile collaborator transport failure: {0}")]
    Transport(String),
}

/// External generative-language service producing narrative profiles.
///
/// Implementations own prompt construction and return the raw JSON object
/// they received. Decoding and validation happen in [`ProfileEngine`].
#[allow(async_fn_in_trait)]
pub trait ProfileCollaborator {
    async fn suspect_profile(
        &self,
        case: &Case,
        suspect: &Suspect,
    ) -> std::result::Result<Value, CollaboratorError>;

    async fn victim_profile(
        &self,
        case: &Case,
        victim: &Victim,
    ) -> std::result::Result<Value, CollaboratorError>;
}

/// Collaborator for deployments without a generative backend; every request
/// takes the fallback path.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineCollaborator;

impl ProfileCollaborator for OfflineCollaborator {
    async fn suspect_profile(
        &self,
        _case: &Case,
        _suspect: &Suspect,
    ) -> std::result::Result<Value, CollaboratorError> {
        Err(CollaboratorError::Unavailable(
            "no generative backend configured".to_string(),
        ))
    }

    async fn victim_profile(
        &self,
        _case: &Case,
        _victim: &Victim,
    ) -> std::result::Result<Value, CollaboratorError> {
        Err(CollaboratorError::Unavailable(
            "no generative backend configured".to_string(),
        ))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Copy)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    SuspectProfile,
    VictimProfile,
}

impl FromStr for AnalysisKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "suspect_profile" | "suspect-profile" => Ok(AnalysisKind::SuspectProfile),
            "victim_profile" | "victim-profile" => Ok(AnalysisKind::VictimProfile),
            other => Err(Error::Analysis(format!("Invalid analysis type: {other}"))),
        }
    }
}

/// Result of a case-level analysis request.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "analysis_type", rename_all = "snake_case")]
pub enum CaseAnalysis {
    SuspectProfile(ProfileAnalysis<SuspectProfile>),
    VictimProfile(ProfileAnalysis<VictimProfile>),
}

impl CaseAnalysis {
    pub fn confidence_score(&self) -> f64 {
        match self {
            CaseAnalysis::SuspectProfile(analysis) => analysis.profile.confidence_score,
            CaseAnalysis::VictimProfile(analysis) => analysis.profile.confidence_score,
        }
    }

    pub fn recommendations(&self) -> &[String] {
        match self {
            CaseAnalysis::SuspectProfile(analysis) => &analysis.profile.recommendations,
            CaseAnalysis::VictimProfile(analysis) => &analysis.profile.safety_recommendations,
        }
    }

    pub fn source(&self) -> AnalysisSource {
        match self {
            CaseAnalysis::SuspectProfile(analysis) => analysis.source,
            CaseAnalysis::VictimProfile(analysis) => analysis.source,
        }
    }
}

pub struct ProfileEngine<C> {
    collaborator: C,
}

impl<C: ProfileCollaborator> ProfileEngine<C> {
    pub fn new(collaborator: C) -> Self {
        Self { collaborator }
    }

    pub async fn analyze_suspect(
        &self,
        case: &Case,
        suspect: &Suspect,
    ) -> ProfileAnalysis<SuspectProfile> {
        let response = self.collaborator.suspect_profile(case, suspect).await;
        resolve(case.id, "suspect", response, SUSPECT_COLLABORATOR_CONFIDENCE)
            .unwrap_or_else(|| ProfileAnalysis {
                profile: fallback_suspect_profile(suspect),
                source: AnalysisSource::Fallback,
            })
    }

    pub async fn analyze_victim(
        &self,
        case: &Case,
        victim: &Victim,
    ) -> ProfileAnalysis<VictimProfile> {
        let response = self.collaborator.victim_profile(case, victim).await;
        resolve(case.id, "victim", response, VICTIM_COLLABORATOR_CONFIDENCE).unwrap_or_else(
            || ProfileAnalysis {
                profile: fallback_victim_profile(victim),
                source: AnalysisSource::Fallback,
            },
        )
    }

    /// Profiles the first suspect or victim on the case.
    ///
    /// # Errors
    /// Returns [`Error::Analysis`] when the case has no one to profile.
    pub async fn analyze_case(&self, case: &Case, kind: AnalysisKind) -> Result<CaseAnalysis> {
        match kind {
            AnalysisKind::SuspectProfile => {
                let suspect = case.suspects.first().ok_or_else(|| {
                    Error::Analysis("No suspects found for analysis".to_string())
                })?;
                Ok(CaseAnalysis::SuspectProfile(
                    self.analyze_suspect(case, suspect).await,
                ))
            }
            AnalysisKind::VictimProfile => {
                let victim = case.victims.first().ok_or_else(|| {
                    Error::Analysis("No victims found for analysis".to_string())
                })?;
                Ok(CaseAnalysis::VictimProfile(
                    self.analyze_victim(case, victim).await,
                ))
            }
        }
    }
}

/// Decodes a collaborator response; `None` means take the fallback path.
fn resolve<T: Profile>(
    case_id: u64,
    subject: &str,
    response: std::result::Result<Value, CollaboratorError>,
    confidence: f64,
) -> Option<ProfileAnalysis<T>> {
    let value = match response {
        Ok(value) => value,
        Err(e) => {
            warn!(case_id, subject, error = %e, "profile collaborator failed, using fallback estimate");
            return None;
        }
    };

    let mut profile = match serde_json::from_value::<T>(value) {
        Ok(profile) => profile,
        Err(e) => {
            warn!(case_id, subject, error = %e, "malformed collaborator profile, using fallback estimate");
            return None;
        }
    };

    let risk = profile.lethality_risk();
    if !(0.0..=MAX_LETHALITY_RISK).contains(&risk) {
        warn!(case_id, subject, risk, "collaborator lethality risk out of range, using fallback estimate");
        return None;
    }

    profile.stamp_confidence(confidence);
    debug!(case_id, subject, "profile produced by collaborator");

    Some(ProfileAnalysis {
        profile,
        source: AnalysisSource::Collaborator,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_kind_parsing() {
        assert_eq!(
            "suspect_profile".parse::<AnalysisKind>().unwrap(),
            AnalysisKind::SuspectProfile
        );
        assert_eq!(
            "victim-profile".parse::<AnalysisKind>().unwrap(),
            AnalysisKind::VictimProfile
        );
        assert!("risk_assessment".parse::<AnalysisKind>().is_err());
    }

    #[test]
    fn test_resolve_rejects_out_of_range_risk() {
        let value = serde_json::json!({
            "psychological_profile": "p",
            "lethality_risk": 14.0
        });
        let resolved: Option<ProfileAnalysis<SuspectProfile>> =
            resolve(1, "suspect", Ok(value), SUSPECT_COLLABORATOR_CONFIDENCE);
        assert!(resolved.is_none());
    }

    #[test]
    fn test_resolve_stamps_confidence() {
        let value = serde_json::json!({
            "vulnerability_profile": "v",
            "lethality_risk": 6,
            "confidence_score": 0.99
        });
        let resolved: ProfileAnalysis<VictimProfile> =
            resolve(1, "victim", Ok(value), VICTIM_COLLABORATOR_CONFIDENCE).unwrap();
        assert_eq!(resolved.profile.confidence_score, 0.82);
        assert_eq!(resolved.source, AnalysisSource::Collaborator);
    }

    #[test]
    fn test_case_analysis_serializes_with_type_tag() {
        let analysis = CaseAnalysis::VictimProfile(ProfileAnalysis {
            profile: fallback_victim_profile(&Victim {
                name: "V".into(),
                ..Default::default()
            }),
            source: AnalysisSource::Fallback,
        });
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["analysis_type"], "victim_profile");
        assert_eq!(json["source"], "fallback");
        assert_eq!(analysis.recommendations().len(), 3);
    }
}
