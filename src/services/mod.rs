// Service exports
pub mod catalog;
pub mod profiles;
pub mod summarizer;

pub use catalog::{CandidateCatalog, CatalogDocument, CatalogError, InMemoryCatalog};
pub use profiles::{InMemoryProfileDirectory, ProfileDirectory};
pub use summarizer::{describe_item, build_prompt, SummarizerOptions, SummaryClient, SummaryError};
