//! In-memory store.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::{Collection, Store, StoreError};

/// A store keeping every collection in a process-local map.
///
/// Used by tests and ephemeral sessions; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<Collection, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn read(&self, collection: Collection) -> Result<Option<String>, StoreError> {
        let documents = self
            .documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(documents.get(&collection).cloned())
    }

    fn write(&self, collection: Collection, document: &str) -> Result<(), StoreError> {
        let mut documents = self
            .documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        documents.insert(collection, document.to_owned());
        Ok(())
    }
}
