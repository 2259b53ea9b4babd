use std::sync::Arc;

use crate::core::{
    label::classify,
    policy::RecommendationPolicy,
    scoring::calculate_match_score,
    strategy::ScoredCandidate,
};
use crate::models::{
    Candidate, InterestProfile, RankedRecommendation, ScoreBreakdown, ScoreResult,
    ScoringWeights, UserKind,
};

/// Scoring and ranking orchestrator
///
/// # Pipeline Stages
/// 1. Score every candidate in the pool against the interest profile
/// 2. Hand the scored pool to the strategy the policy assigns to the user kind
/// 3. Materialize the strategy's picks as recommendations
///
/// The recommender holds no per-request state; clones share the policy.
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
    policy: Arc<RecommendationPolicy>,
}

impl Recommender {
    pub fn new(weights: ScoringWeights, policy: RecommendationPolicy) -> Self {
        Self {
            weights,
            policy: Arc::new(policy),
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), RecommendationPolicy::default())
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn policy(&self) -> &RecommendationPolicy {
        &self.policy
    }

    pub fn score(&self, profile: &InterestProfile, candidate: &Candidate) -> ScoreResult {
        self.score_detailed(profile, candidate).0
    }

    /// Score plus the per-signal breakdown behind it
    pub fn score_detailed(
        &self,
        profile: &InterestProfile,
        candidate: &Candidate,
    ) -> (ScoreResult, ScoreBreakdown) {
        let (score, breakdown) = calculate_match_score(profile, candidate, &self.weights);
        (
            ScoreResult {
                score,
                label: classify(score),
            },
            breakdown,
        )
    }

    /// Build the recommendation list for a user
    ///
    /// # Arguments
    /// * `profile` - The user's interest descriptors
    /// * `user_kind` - Selects the strategy from the policy
    /// * `pool` - Candidates supplied by the catalog
    ///
    /// # Returns
    /// Recommendations in the order the strategy chose
    pub fn recommend(
        &self,
        profile: &InterestProfile,
        user_kind: UserKind,
        pool: &[Candidate],
    ) -> Vec<RankedRecommendation> {
        let scored: Vec<ScoredCandidate<'_>> = pool
            .iter()
            .map(|candidate| ScoredCandidate {
                candidate,
                result: self.score(profile, candidate),
            })
            .collect();

        self.policy
            .strategy_for(user_kind)
            .select(scored)
            .into_iter()
            .map(|pick| RankedRecommendation {
                kind: pick.scored.candidate.kind(),
                candidate: pick.scored.candidate.clone(),
                reason: pick.reason,
                score: pick.scored.result.score,
                label: pick.scored.result.label,
            })
            .collect()
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
