use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Candidate, ClinicalTrial, Expert, Publication};

/// Curated dataset shipped with the service
const SEED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Errors that can occur when loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate candidate id: {0}")]
    DuplicateId(String),
}

/// Source of the candidate pool the engine ranks
pub trait CandidateCatalog: Send + Sync {
    fn candidates(&self) -> &[Candidate];

    fn get(&self, id: &str) -> Option<&Candidate> {
        self.candidates().iter().find(|c| c.id() == id)
    }

    fn len(&self) -> usize {
        self.candidates().len()
    }

    fn is_empty(&self) -> bool {
        self.candidates().is_empty()
    }
}

/// On-disk catalog layout, one array per candidate kind
#[derive(Debug, Default, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub experts: Vec<Expert>,
    #[serde(default)]
    pub trials: Vec<ClinicalTrial>,
    #[serde(default)]
    pub publications: Vec<Publication>,
}

impl CatalogDocument {
    pub fn into_candidates(self) -> Vec<Candidate> {
        self.experts
            .into_iter()
            .map(Candidate::Expert)
            .chain(self.trials.into_iter().map(Candidate::Trial))
            .chain(self.publications.into_iter().map(Candidate::Publication))
            .collect()
    }
}

/// Immutable catalog held in memory
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    candidates: Vec<Candidate>,
    index: HashMap<String, usize>,
}

impl InMemoryCatalog {
    /// Build a catalog, rejecting duplicate identifiers
    pub fn new(candidates: Vec<Candidate>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(candidates.len());
        for (position, candidate) in candidates.iter().enumerate() {
            if index.insert(candidate.id().to_string(), position).is_some() {
                return Err(CatalogError::DuplicateId(candidate.id().to_string()));
            }
        }

        Ok(Self { candidates, index })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::new(document.into_candidates())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::debug!("Loaded {} candidates from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The bundled experts, trials and publications
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::from_json_str(SEED_CATALOG)
    }
}

impl CandidateCatalog for InMemoryCatalog {
    fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    fn get(&self, id: &str) -> Option<&Candidate> {
        self.index.get(id).and_then(|&position| self.candidates.get(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CandidateKind;

    #[test]
    fn test_seeded_catalog() {
        let catalog = InMemoryCatalog::seeded().unwrap();

        assert_eq!(catalog.len(), 20);
        let count = |kind| catalog.candidates().iter().filter(|c| c.kind() == kind).count();
        assert_eq!(count(CandidateKind::Expert), 10);
        assert_eq!(count(CandidateKind::Trial), 5);
        assert_eq!(count(CandidateKind::Publication), 5);

        let expert = catalog.get("expert-1").unwrap();
        assert_eq!(expert.specialization(), Some("Oncology & Immunotherapy"));
        assert!(catalog.get("expert-11").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{
            "trials": [
                {"id": "t", "title": "A"},
                {"id": "t", "title": "B"}
            ]
        }"#;

        let err = InMemoryCatalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "t"));
    }

    #[test]
    fn test_partial_document() {
        let catalog = InMemoryCatalog::from_json_str(r#"{"experts": []}"#).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = InMemoryCatalog::from_file("no/such/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
