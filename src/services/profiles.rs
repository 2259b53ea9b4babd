use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::models::UserRecord;

/// Supplies interest profiles keyed by an opaque user identifier
pub trait ProfileDirectory: Send + Sync {
    fn get(&self, user_id: &str) -> Option<UserRecord>;

    /// Store a record, returning the one it replaced
    fn upsert(&self, user_id: &str, record: UserRecord) -> Option<UserRecord>;
}

/// Process-local profile directory
///
/// Records live only as long as the process; durable storage belongs to
/// the backend that owns user accounts.
#[derive(Debug, Default)]
pub struct InMemoryProfileDirectory {
    records: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryProfileDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProfileDirectory for InMemoryProfileDirectory {
    fn get(&self, user_id: &str) -> Option<UserRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(user_id)
            .cloned()
    }

    fn upsert(&self, user_id: &str, record: UserRecord) -> Option<UserRecord> {
        let previous = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user_id.to_string(), record);

        tracing::debug!(
            "{} profile for user {}",
            if previous.is_some() { "Updated" } else { "Created" },
            user_id
        );
        previous
    }
}
