//! CuraLink Match - relevance scoring and recommendation service for CuraLink
//!
//! This library scores experts, clinical trials and publications against a
//! user's free-text interests and ranks them into recommendation lists.
//! The scoring core is pure and synchronous; catalog, profile and
//! summarization collaborators live in [`services`].

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{classify, score, RecommendationPolicy, Recommender};
pub use crate::models::{Candidate, CandidateKind, InterestProfile, MatchLabel, RankedRecommendation, ScoreResult, UserKind};
