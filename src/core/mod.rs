// Core engine exports
pub mod label;
pub mod policy;
pub mod recommender;
pub mod scoring;
pub mod strategy;
pub mod text;

pub use label::classify;
pub use policy::{PolicyError, RecommendationPolicy};
pub use recommender::Recommender;
pub use scoring::{calculate_match_score, score, score_with, MAX_SCORE};
pub use strategy::{
    CuratedPick, CuratedStrategy, Pick, RankedStrategy, ReasonTable, RecommendationStrategy,
    ScoredCandidate,
};
