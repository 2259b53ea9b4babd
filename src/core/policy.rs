use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::core::strategy::{
    CuratedPick, CuratedStrategy, RankedStrategy, ReasonTable, RecommendationStrategy,
};
use crate::models::{CandidateKind, UserKind};

/// Errors that can occur while loading a recommendation policy
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Failed to read policy file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid policy document: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Maps each user kind to the strategy that builds its recommendations
///
/// Kinds without an explicit entry fall back to the policy's default
/// strategy.
#[derive(Debug, Clone)]
pub struct RecommendationPolicy {
    strategies: HashMap<UserKind, Arc<dyn RecommendationStrategy>>,
    fallback: Arc<dyn RecommendationStrategy>,
}

impl RecommendationPolicy {
    /// Use one strategy for every user kind
    pub fn uniform(strategy: impl RecommendationStrategy + 'static) -> Self {
        Self {
            strategies: HashMap::new(),
            fallback: Arc::new(strategy),
        }
    }

    pub fn with_strategy(
        mut self,
        kind: UserKind,
        strategy: impl RecommendationStrategy + 'static,
    ) -> Self {
        self.strategies.insert(kind, Arc::new(strategy));
        self
    }

    pub fn strategy_for(&self, kind: UserKind) -> &dyn RecommendationStrategy {
        match self.strategies.get(&kind) {
            Some(strategy) => strategy.as_ref(),
            None => self.fallback.as_ref(),
        }
    }

    /// Parse a policy from a TOML document
    ///
    /// ```toml
    /// [patient]
    /// strategy = "ranked"
    /// per_kind = 1
    ///
    /// [patient.reasons]
    /// trial = "Currently recruiting for a trial matching your profile"
    ///
    /// [researcher]
    /// strategy = "curated"
    ///
    /// [[researcher.picks]]
    /// candidate_id = "pub-2"
    /// reason = "Highly cited paper in your field of research"
    /// ```
    pub fn from_toml_str(document: &str) -> Result<Self, PolicyError> {
        let parsed: PolicyDocument = toml::from_str(document)?;

        let mut policy = match parsed.default {
            Some(config) => Self {
                strategies: HashMap::new(),
                fallback: config.build(),
            },
            None => Self::uniform(RankedStrategy::new()),
        };

        for (kind, config) in [
            (UserKind::Patient, parsed.patient),
            (UserKind::Researcher, parsed.researcher),
        ] {
            if let Some(config) = config {
                policy.strategies.insert(kind, config.build());
            }
        }

        Ok(policy)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path).map_err(|source| PolicyError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&document)
    }
}

impl Default for RecommendationPolicy {
    /// One top-ranked expert, trial and publication per user, with reason
    /// texts worded for patients and researchers respectively
    fn default() -> Self {
        let patient = RankedStrategy::new()
            .with_per_kind(1)
            .with_reason(
                CandidateKind::Expert,
                "Top-rated specialist with expertise in your condition",
            )
            .with_reason(
                CandidateKind::Trial,
                "Currently recruiting for a trial matching your profile",
            )
            .with_reason(
                CandidateKind::Publication,
                "Latest research relevant to your condition",
            );

        let researcher = RankedStrategy::new()
            .with_per_kind(1)
            .with_reason(
                CandidateKind::Expert,
                "Potential collaborator with complementary expertise",
            )
            .with_reason(
                CandidateKind::Trial,
                "Trial seeking researchers with your background",
            )
            .with_reason(
                CandidateKind::Publication,
                "Highly cited paper in your field of research",
            );

        Self::uniform(RankedStrategy::new().with_per_kind(1))
            .with_strategy(UserKind::Patient, patient)
            .with_strategy(UserKind::Researcher, researcher)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PolicyDocument {
    #[serde(default)]
    default: Option<StrategyConfig>,
    #[serde(default)]
    patient: Option<StrategyConfig>,
    #[serde(default)]
    researcher: Option<StrategyConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "strategy", rename_all = "lowercase", deny_unknown_fields)]
enum StrategyConfig {
    Ranked {
        #[serde(default)]
        kinds: Vec<CandidateKind>,
        #[serde(default)]
        per_kind: Option<usize>,
        #[serde(default)]
        limit: Option<usize>,
        #[serde(default)]
        reasons: ReasonTable,
    },
    Curated {
        #[serde(default)]
        picks: Vec<CuratedPick>,
    },
}

impl StrategyConfig {
    fn build(self) -> Arc<dyn RecommendationStrategy> {
        match self {
            StrategyConfig::Ranked {
                kinds,
                per_kind,
                limit,
                reasons,
            } => {
                let mut strategy = RankedStrategy::new().with_kinds(kinds).with_reasons(reasons);
                if let Some(per_kind) = per_kind {
                    strategy = strategy.with_per_kind(per_kind);
                }
                if let Some(limit) = limit {
                    strategy = strategy.with_limit(limit);
                }
                Arc::new(strategy)
            }
            StrategyConfig::Curated { picks } => Arc::new(CuratedStrategy::new(picks)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::label::classify;
    use crate::core::strategy::{Pick, ScoredCandidate};
    use crate::models::{Candidate, ClinicalTrial, Expert, Publication, ScoreResult};

    fn expert(id: &str) -> Candidate {
        Candidate::Expert(Expert {
            id: id.to_string(),
            name: format!("Dr. {}", id),
            specialization: String::new(),
            institution: String::new(),
            country: String::new(),
            tags: vec![],
            photo: None,
        })
    }

    fn trial(id: &str) -> Candidate {
        Candidate::Trial(ClinicalTrial {
            id: id.to_string(),
            title: String::new(),
            phase: String::new(),
            status: String::new(),
            description: String::new(),
            location: String::new(),
            summary: String::new(),
            tags: vec![],
        })
    }

    fn publication(id: &str) -> Candidate {
        Candidate::Publication(Publication {
            id: id.to_string(),
            title: String::new(),
            authors: vec![],
            abstract_text: String::new(),
            summary: String::new(),
            tags: vec![],
            year: 2024,
        })
    }

    fn create_pool() -> Vec<(Candidate, u8)> {
        vec![
            (expert("expert-1"), 48),
            (expert("expert-2"), 90),
            (trial("trial-1"), 33),
            (trial("trial-2"), 76),
            (trial("trial-3"), 60),
            (publication("pub-1"), 10),
            (publication("pub-2"), 76),
        ]
    }

    fn run<'a>(
        policy: &RecommendationPolicy,
        kind: UserKind,
        pool: &'a [(Candidate, u8)],
    ) -> Vec<Pick<'a>> {
        let scored = pool
            .iter()
            .map(|(candidate, score)| ScoredCandidate {
                candidate,
                result: ScoreResult {
                    score: *score,
                    label: classify(*score),
                },
            })
            .collect();
        policy.strategy_for(kind).select(scored)
    }

    fn ids(picks: &[Pick<'_>]) -> Vec<String> {
        picks.iter().map(|p| p.scored.candidate.id().to_string()).collect()
    }

    #[test]
    fn test_parse_mixed_policy() {
        let policy = RecommendationPolicy::from_toml_str(
            r#"
            [patient]
            strategy = "ranked"
            kinds = ["trial"]
            limit = 2

            [patient.reasons]
            trial = "Recruiting now"

            [researcher]
            strategy = "curated"

            [[researcher.picks]]
            candidate_id = "pub-1"
            reason = "Highly cited paper in your field of research"

            [[researcher.picks]]
            candidate_id = "expert-1"
            reason = "Potential collaborator with complementary expertise"
            "#,
        )
        .unwrap();
        let pool = create_pool();

        let patient = run(&policy, UserKind::Patient, &pool);
        assert_eq!(ids(&patient), vec!["trial-2", "trial-3"]);
        assert!(patient.iter().all(|p| p.reason == "Recruiting now"));

        let researcher = run(&policy, UserKind::Researcher, &pool);
        assert_eq!(ids(&researcher), vec!["pub-1", "expert-1"]);
        assert_eq!(researcher[1].reason, "Potential collaborator with complementary expertise");
        assert_eq!(researcher[1].scored.result.score, 48);
    }

    #[test]
    fn test_per_kind_cap_from_document() {
        let policy = RecommendationPolicy::from_toml_str(
            r#"
            [default]
            strategy = "ranked"
            per_kind = 1
            "#,
        )
        .unwrap();
        let pool = create_pool();

        let picks = run(&policy, UserKind::Patient, &pool);
        // pub-2 and trial-2 tie at 76 and are ordered by id
        assert_eq!(ids(&picks), vec!["expert-2", "pub-2", "trial-2"]);
        assert_eq!(picks[0].reason, "Excellent Match for your interests");
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let err = RecommendationPolicy::from_toml_str(
            r#"
            [patient]
            strategy = "random"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, PolicyError::Parse(_)));
    }

    #[test]
    fn test_misspelled_keys_are_rejected() {
        let documents = [
            "[patient]\nstrategy = \"ranked\"\nperkind = 1\n",
            "[patient]\nstrategy = \"ranked\"\nlimt = 2\n",
            "[patient]\nstrategy = \"ranked\"\n\n[patient.reasons]\nexperts = \"Specialist\"\n",
            "[patients]\nstrategy = \"ranked\"\n",
            "[researcher]\nstrategy = \"curated\"\n\n[[researcher.picks]]\nid = \"pub-1\"\nreason = \"x\"\n",
        ];

        for document in documents {
            let result = RecommendationPolicy::from_toml_str(document);
            assert!(
                matches!(result, Err(PolicyError::Parse(_))),
                "accepted {:?}",
                document
            );
        }
    }

    #[test]
    fn test_missing_file() {
        let err = RecommendationPolicy::from_file("does/not/exist.toml").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }

    #[test]
    fn test_empty_document_uses_ranked_fallback() {
        let policy = RecommendationPolicy::from_toml_str("").unwrap();
        let pool = create_pool();

        let picks = run(&policy, UserKind::Researcher, &pool);
        assert_eq!(picks.len(), pool.len());
        assert_eq!(ids(&picks)[..3], ["expert-2", "pub-2", "trial-2"]);
    }

    #[test]
    fn test_default_policy_reasons_by_user_kind() {
        let policy = RecommendationPolicy::default();
        let pool = create_pool();

        let patient = run(&policy, UserKind::Patient, &pool);
        assert_eq!(ids(&patient), vec!["expert-2", "pub-2", "trial-2"]);
        assert_eq!(patient[0].reason, "Top-rated specialist with expertise in your condition");

        let researcher = run(&policy, UserKind::Researcher, &pool);
        assert_eq!(ids(&researcher), ids(&patient));
        assert_eq!(researcher[1].reason, "Highly cited paper in your field of research");
    }
}
