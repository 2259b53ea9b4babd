use serde::{Deserialize, Serialize};
use crate::models::domain::{
    CandidateKind, MatchLabel, PresentationTier, RankedRecommendation, ScoreBreakdown, UserKind,
};

/// Response for the score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    pub kind: CandidateKind,
    pub score: u8,
    pub label: MatchLabel,
    pub tier: PresentationTier,
    pub breakdown: ScoreBreakdown,
}

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "userKind")]
    pub user_kind: UserKind,
    pub recommendations: Vec<RankedRecommendation>,
    pub total_candidates: usize,
}

/// Response for the favourites summary endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
    #[serde(rename = "requestId")]
    pub request_id: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub catalog_size: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
