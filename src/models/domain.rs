use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-text interests a user supplied during onboarding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestProfile {
    #[serde(rename = "conditionText", default)]
    pub condition_text: String,
    #[serde(rename = "fieldText", default)]
    pub field_text: String,
}

impl InterestProfile {
    pub fn new(condition_text: impl Into<String>, field_text: impl Into<String>) -> Self {
        Self {
            condition_text: condition_text.into(),
            field_text: field_text.into(),
        }
    }

    /// True when neither descriptor carries any non-whitespace text
    pub fn is_blank(&self) -> bool {
        self.condition_text.trim().is_empty() && self.field_text.trim().is_empty()
    }
}

/// Which side of the platform a user signed up as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserKind {
    Patient,
    Researcher,
}

impl UserKind {
    pub const ALL: [UserKind; 2] = [UserKind::Patient, UserKind::Researcher];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserKind::Patient => "patient",
            UserKind::Researcher => "researcher",
        }
    }
}

impl fmt::Display for UserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user as known to the profile directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "userKind")]
    pub kind: UserKind,
    #[serde(default)]
    pub interests: InterestProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    Expert,
    Trial,
    Publication,
}

impl CandidateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateKind::Expert => "expert",
            CandidateKind::Trial => "trial",
            CandidateKind::Publication => "publication",
        }
    }
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Medical expert listed in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expert {
    pub id: String,
    pub name: String,
    pub specialization: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Clinical trial listed in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalTrial {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub phase: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Research publication listed in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub year: u16,
}

/// Anything the engine can score against an interest profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Candidate {
    Expert(Expert),
    Trial(ClinicalTrial),
    Publication(Publication),
}

impl Candidate {
    pub fn kind(&self) -> CandidateKind {
        match self {
            Candidate::Expert(_) => CandidateKind::Expert,
            Candidate::Trial(_) => CandidateKind::Trial,
            Candidate::Publication(_) => CandidateKind::Publication,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Candidate::Expert(e) => &e.id,
            Candidate::Trial(t) => &t.id,
            Candidate::Publication(p) => &p.id,
        }
    }

    pub fn tags(&self) -> &[String] {
        match self {
            Candidate::Expert(e) => &e.tags,
            Candidate::Trial(t) => &t.tags,
            Candidate::Publication(p) => &p.tags,
        }
    }

    /// Specialization-like text; only experts carry one
    pub fn specialization(&self) -> Option<&str> {
        match self {
            Candidate::Expert(e) => Some(&e.specialization),
            Candidate::Trial(_) | Candidate::Publication(_) => None,
        }
    }

    /// Title-like text; experts are listed by name, not title
    pub fn title(&self) -> Option<&str> {
        match self {
            Candidate::Expert(_) => None,
            Candidate::Trial(t) => Some(&t.title),
            Candidate::Publication(p) => Some(&p.title),
        }
    }
}

/// Human-readable band a score falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchLabel {
    #[serde(rename = "Excellent Match")]
    Excellent,
    #[serde(rename = "Good Match")]
    Good,
    #[serde(rename = "Moderate Match")]
    Moderate,
    #[serde(rename = "Low Match")]
    Low,
}

/// Badge styling the presentation layer applies to a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationTier {
    Success,
    Primary,
    Accent,
    Muted,
}

/// Bounded relevance score with its label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub label: MatchLabel,
}

/// Points each signal contributed to a single scoring call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(rename = "conditionTag")]
    pub condition_tag: u32,
    #[serde(rename = "fieldTag")]
    pub field_tag: u32,
    pub specialization: u32,
    pub title: u32,
    pub keywords: u32,
    #[serde(rename = "matchedKeywords")]
    pub matched_keywords: Vec<String>,
}

impl ScoreBreakdown {
    /// Sum of all awards before clamping
    pub fn raw_total(&self) -> u32 {
        self.condition_tag
            .saturating_add(self.field_tag)
            .saturating_add(self.specialization)
            .saturating_add(self.title)
            .saturating_add(self.keywords)
    }

    /// The score: summed awards clamped to 100
    pub fn total(&self) -> u8 {
        self.raw_total().min(crate::core::MAX_SCORE) as u8
    }
}

/// One entry of a recommendation list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecommendation {
    pub kind: CandidateKind,
    pub candidate: Candidate,
    pub reason: String,
    pub score: u8,
    pub label: MatchLabel,
}

/// Points awarded per matching signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub tag: u32,
    pub specialization: u32,
    pub title: u32,
    pub keyword: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            tag: 30,
            specialization: 15,
            title: 10,
            keyword: 3,
        }
    }
}
