use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Candidate, CandidateKind, ScoreResult};

/// A pool entry together with its score
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub candidate: &'a Candidate,
    pub result: ScoreResult,
}

/// A scored candidate a strategy chose to surface, with the reason shown to the user
#[derive(Debug, Clone)]
pub struct Pick<'a> {
    pub scored: ScoredCandidate<'a>,
    pub reason: String,
}

/// Selection policy applied to an already scored candidate pool
///
/// Strategies decide which candidates to surface, in which order and with
/// which reason text. They never rescore.
pub trait RecommendationStrategy: fmt::Debug + Send + Sync {
    fn select<'a>(&self, scored: Vec<ScoredCandidate<'a>>) -> Vec<Pick<'a>>;
}

/// Reason text per candidate kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReasonTable {
    #[serde(default)]
    pub expert: Option<String>,
    #[serde(default)]
    pub trial: Option<String>,
    #[serde(default)]
    pub publication: Option<String>,
}

impl ReasonTable {
    pub fn get(&self, kind: CandidateKind) -> Option<&str> {
        match kind {
            CandidateKind::Expert => self.expert.as_deref(),
            CandidateKind::Trial => self.trial.as_deref(),
            CandidateKind::Publication => self.publication.as_deref(),
        }
    }

    pub fn set(&mut self, kind: CandidateKind, reason: impl Into<String>) {
        let slot = match kind {
            CandidateKind::Expert => &mut self.expert,
            CandidateKind::Trial => &mut self.trial,
            CandidateKind::Publication => &mut self.publication,
        };
        *slot = Some(reason.into());
    }
}

/// Ranks the whole pool by score
///
/// Ordering is score descending, then candidate id ascending, then kind, so
/// equal scores always come back in the same order.
#[derive(Debug, Clone, Default)]
pub struct RankedStrategy {
    kinds: Vec<CandidateKind>,
    per_kind: Option<usize>,
    limit: Option<usize>,
    reasons: ReasonTable,
}

impl RankedStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only surface these kinds; an empty list keeps every kind
    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = CandidateKind>) -> Self {
        self.kinds = kinds.into_iter().collect();
        self
    }

    pub fn with_per_kind(mut self, per_kind: usize) -> Self {
        self.per_kind = Some(per_kind);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_reason(mut self, kind: CandidateKind, reason: impl Into<String>) -> Self {
        self.reasons.set(kind, reason);
        self
    }

    pub fn with_reasons(mut self, reasons: ReasonTable) -> Self {
        self.reasons = reasons;
        self
    }

    fn reason_for(&self, scored: &ScoredCandidate<'_>) -> String {
        match self.reasons.get(scored.candidate.kind()) {
            Some(reason) => reason.to_string(),
            None => format!("{} for your interests", scored.result.label),
        }
    }
}

impl RecommendationStrategy for RankedStrategy {
    fn select<'a>(&self, scored: Vec<ScoredCandidate<'a>>) -> Vec<Pick<'a>> {
        let mut ranked: Vec<ScoredCandidate<'a>> = scored
            .into_iter()
            .filter(|s| self.kinds.is_empty() || self.kinds.contains(&s.candidate.kind()))
            .collect();

        ranked.sort_by(rank_order);

        let mut taken_per_kind: HashMap<CandidateKind, usize> = HashMap::new();
        let limit = self.limit.unwrap_or(usize::MAX);

        ranked
            .into_iter()
            .filter(|s| match self.per_kind {
                Some(cap) => {
                    let taken = taken_per_kind.entry(s.candidate.kind()).or_insert(0);
                    if *taken < cap {
                        *taken += 1;
                        true
                    } else {
                        false
                    }
                }
                None => true,
            })
            .take(limit)
            .map(|scored| Pick {
                reason: self.reason_for(&scored),
                scored,
            })
            .collect()
    }
}

fn rank_order(a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>) -> Ordering {
    b.result
        .score
        .cmp(&a.result.score)
        .then_with(|| a.candidate.id().cmp(b.candidate.id()))
        .then_with(|| a.candidate.kind().cmp(&b.candidate.kind()))
}

/// One hand-authored recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CuratedPick {
    pub candidate_id: String,
    pub reason: String,
}

impl CuratedPick {
    pub fn new(candidate_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            reason: reason.into(),
        }
    }
}

/// Surfaces a fixed list of candidates in the listed order
///
/// Picks whose candidate is missing from the pool are skipped, and a
/// candidate listed twice is surfaced once.
#[derive(Debug, Clone, Default)]
pub struct CuratedStrategy {
    picks: Vec<CuratedPick>,
}

impl CuratedStrategy {
    pub fn new(picks: Vec<CuratedPick>) -> Self {
        Self { picks }
    }
}

impl RecommendationStrategy for CuratedStrategy {
    fn select<'a>(&self, scored: Vec<ScoredCandidate<'a>>) -> Vec<Pick<'a>> {
        let mut by_id: HashMap<&'a str, ScoredCandidate<'a>> = scored
            .into_iter()
            .map(|s| (s.candidate.id(), s))
            .collect();

        self.picks
            .iter()
            .filter_map(|pick| {
                by_id.remove(pick.candidate_id.as_str()).map(|scored| Pick {
                    scored,
                    reason: pick.reason.clone(),
                })
            })
            .collect()
    }
}
