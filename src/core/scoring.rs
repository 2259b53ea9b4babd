use crate::models::{Candidate, InterestProfile, ScoreBreakdown, ScoreResult, ScoringWeights};
use crate::core::{
    label::classify,
    text::{contains_either_way, keywords, normalize},
};

/// Upper bound of every score
pub const MAX_SCORE: u32 = 100;

/// Calculate a match score (0-100) for a candidate against a user's interests
///
/// Scoring signals, each evaluated on normalized text:
/// - tag match: condition / field contained in a tag, or a tag contained in it
/// - specialization containing the condition / field
/// - title containing the condition / field
/// - one keyword award per condition or field token found in any tag
///
/// Awards are summed and the sum is clamped once at the end.
pub fn calculate_match_score(
    profile: &InterestProfile,
    candidate: &Candidate,
    weights: &ScoringWeights,
) -> (u8, ScoreBreakdown) {
    let condition = normalize(&profile.condition_text);
    let field = normalize(&profile.field_text);
    let tags: Vec<String> = candidate.tags().iter().map(|tag| normalize(tag)).collect();
    let specialization = candidate.specialization().map(normalize).unwrap_or_default();
    let title = candidate.title().map(normalize).unwrap_or_default();

    let mut breakdown = ScoreBreakdown::default();

    // Stage 1: tag containment, independently for condition and field
    if matches_any_tag(&condition, &tags) {
        breakdown.condition_tag = weights.tag;
    }
    if matches_any_tag(&field, &tags) {
        breakdown.field_tag = weights.tag;
    }

    // Stage 2: specialization
    breakdown.specialization =
        containment_points(&specialization, &condition, &field, weights.specialization);

    // Stage 3: title
    breakdown.title = containment_points(&title, &condition, &field, weights.title);

    // Stage 4: keyword fan-out, tokens are not deduplicated
    for keyword in keywords(&condition).chain(keywords(&field)) {
        if tags.iter().any(|tag| tag.contains(keyword)) {
            breakdown.keywords = breakdown.keywords.saturating_add(weights.keyword);
            breakdown.matched_keywords.push(keyword.to_string());
        }
    }

    (breakdown.total(), breakdown)
}

/// Score with the default weights
pub fn score(profile: &InterestProfile, candidate: &Candidate) -> ScoreResult {
    score_with(profile, candidate, &ScoringWeights::default())
}

pub fn score_with(
    profile: &InterestProfile,
    candidate: &Candidate,
    weights: &ScoringWeights,
) -> ScoreResult {
    let (score, _) = calculate_match_score(profile, candidate, weights);
    ScoreResult {
        score,
        label: classify(score),
    }
}

#[inline]
fn matches_any_tag(text: &str, tags: &[String]) -> bool {
    !text.is_empty() && tags.iter().any(|tag| contains_either_way(tag, text))
}

/// `points` for each non-empty needle found in a non-empty haystack
#[inline]
fn containment_points(haystack: &str, condition: &str, field: &str, points: u32) -> u32 {
    if haystack.is_empty() {
        return 0;
    }

    [condition, field]
        .iter()
        .filter(|needle| !needle.is_empty() && haystack.contains(**needle))
        .map(|_| points)
        .sum()
}
