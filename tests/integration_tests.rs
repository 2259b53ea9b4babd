// Integration tests for CuraLink Match

use curalink_match::core::{
    CuratedPick, CuratedStrategy, RankedStrategy, RecommendationPolicy, Recommender,
};
use curalink_match::models::{CandidateKind, InterestProfile, MatchLabel, ScoringWeights, UserKind};
use curalink_match::services::{CandidateCatalog, InMemoryCatalog};

fn seeded_catalog() -> InMemoryCatalog {
    InMemoryCatalog::seeded().expect("bundled catalog parses")
}

#[test]
fn test_integration_end_to_end_patient_recommendations() {
    let catalog = seeded_catalog();
    let recommender = Recommender::with_default_weights();
    let profile = InterestProfile::new("cancer", "oncology");

    let recs = recommender.recommend(&profile, UserKind::Patient, catalog.candidates());

    // One of each kind with the default policy
    assert_eq!(recs.len(), 3);
    let ids: Vec<&str> = recs.iter().map(|r| r.candidate.id()).collect();
    // expert-1, expert-10 and expert-7 all score 48; the lowest id wins
    assert_eq!(ids, vec!["pub-2", "expert-1", "trial-1"]);

    assert_eq!(recs[0].score, 76);
    assert_eq!(recs[0].label, MatchLabel::Good);
    assert_eq!(recs[1].score, 48);
    assert_eq!(recs[1].label, MatchLabel::Low);
    assert_eq!(recs[2].score, 33);
    assert_eq!(recs[2].reason, "Currently recruiting for a trial matching your profile");
}

#[test]
fn test_full_pool_ranking_is_sorted_and_deterministic() {
    let catalog = seeded_catalog();
    let recommender = Recommender::new(
        ScoringWeights::default(),
        RecommendationPolicy::uniform(RankedStrategy::new()),
    );
    let profile = InterestProfile::new("alzheimer's", "neurology");

    let first = recommender.recommend(&profile, UserKind::Researcher, catalog.candidates());
    let second = recommender.recommend(&profile, UserKind::Researcher, catalog.candidates());

    assert_eq!(first, second);
    assert_eq!(first.len(), catalog.len());

    for pair in first.windows(2) {
        assert!(pair[0].score >= pair[1].score, "Recommendations not sorted by score");
        if pair[0].score == pair[1].score {
            assert!(pair[0].candidate.id() <= pair[1].candidate.id(), "Ties not ordered by id");
        }
    }

    // trial-3 also matches on its title
    assert_eq!(first[0].candidate.id(), "trial-3");
    assert_eq!(first[0].score, 76);
    assert_eq!(first[1].candidate.id(), "expert-3");
    assert_eq!(first[1].score, 66);
}

#[test]
fn test_scores_in_range_across_catalog() {
    let catalog = seeded_catalog();
    let recommender = Recommender::default();
    let profiles = [
        InterestProfile::default(),
        InterestProfile::new("Multiple Myeloma", "cell therapy"),
        InterestProfile::new("type 2 diabetes", "digital health"),
        InterestProfile::new("precision medicine genomics cancer", "precision medicine genomics cancer"),
    ];

    for profile in &profiles {
        for candidate in catalog.candidates() {
            let result = recommender.score(profile, candidate);
            assert!(result.score <= 100, "Score {} is out of range", result.score);
        }
    }
}

#[test]
fn test_curated_policy_reproduces_hand_picked_selection() {
    let catalog = seeded_catalog();
    let policy = RecommendationPolicy::uniform(RankedStrategy::new())
        .with_strategy(
            UserKind::Patient,
            CuratedStrategy::new(vec![
                CuratedPick::new("expert-1", "Top-rated oncology specialist with expertise in your condition"),
                CuratedPick::new("trial-1", "Currently recruiting for a trial matching your profile"),
                CuratedPick::new("pub-1", "Latest research relevant to your condition"),
            ]),
        )
        .with_strategy(
            UserKind::Researcher,
            CuratedStrategy::new(vec![
                CuratedPick::new("pub-2", "Highly cited paper in your field of research"),
                CuratedPick::new("expert-2", "Potential collaborator with complementary expertise"),
                CuratedPick::new("trial-2", "Trial seeking researchers with your background"),
            ]),
        );
    let recommender = Recommender::new(ScoringWeights::default(), policy);
    let profile = InterestProfile::new("cancer", "oncology");

    let patient = recommender.recommend(&profile, UserKind::Patient, catalog.candidates());
    let kinds: Vec<CandidateKind> = patient.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, vec![CandidateKind::Expert, CandidateKind::Trial, CandidateKind::Publication]);
    assert_eq!(patient[0].score, 48);

    let researcher = recommender.recommend(&profile, UserKind::Researcher, catalog.candidates());
    let ids: Vec<&str> = researcher.iter().map(|r| r.candidate.id()).collect();
    assert_eq!(ids, vec!["pub-2", "expert-2", "trial-2"]);
}

#[test]
fn test_bundled_policy_file_matches_default_policy() {
    let catalog = seeded_catalog();
    let document = std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/config/policy.toml"))
        .expect("policy file present");
    let from_file = Recommender::new(
        ScoringWeights::default(),
        RecommendationPolicy::from_toml_str(&document).expect("policy parses"),
    );
    let built_in = Recommender::default();

    let profiles = [
        InterestProfile::new("cancer", "oncology"),
        InterestProfile::new("", "gene editing"),
        InterestProfile::default(),
    ];

    for profile in &profiles {
        for kind in UserKind::ALL {
            assert_eq!(
                from_file.recommend(profile, kind, catalog.candidates()),
                built_in.recommend(profile, kind, catalog.candidates()),
                "{} / {:?}",
                kind,
                profile
            );
        }
    }
}
