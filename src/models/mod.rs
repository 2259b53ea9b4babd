// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Candidate, CandidateKind, ClinicalTrial, Expert, InterestProfile, MatchLabel,
    PresentationTier, Publication, RankedRecommendation, ScoreBreakdown, ScoreResult,
    ScoringWeights, UserKind, UserRecord,
};
pub use requests::{RecommendRequest, ScoreRequest, SummarizeRequest};
pub use responses::{ErrorResponse, HealthResponse, RecommendResponse, ScoreResponse, SummaryResponse};
