//! Application state shared across commands.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::store::{FileStore, MemoryStore, Store, StoreError, initialize_defaults};

/// Application state shared across all commands.
///
/// This struct is cheaply cloneable via `Arc` and hands out the
/// configuration and the document store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: Box<dyn Store>,
}

impl AppState {
    /// Open the configured data directory and make sure every collection
    /// document exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the directory cannot be created or a default
    /// document cannot be written.
    pub fn new(config: StorefrontConfig) -> Result<Self, StoreError> {
        let store = FileStore::open(config.data_dir.clone())?;
        Self::with_store(config, Box::new(store))
    }

    /// State over an in-memory store; nothing touches disk.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if a default document cannot be written.
    pub fn in_memory(config: StorefrontConfig) -> Result<Self, StoreError> {
        Self::with_store(config, Box::new(MemoryStore::new()))
    }

    fn with_store(config: StorefrontConfig, store: Box<dyn Store>) -> Result<Self, StoreError> {
        initialize_defaults(store.as_ref())?;
        Ok(Self {
            inner: Arc::new(AppStateInner { config, store }),
        })
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the document store.
    #[must_use]
    pub fn store(&self) -> &dyn Store {
        self.inner.store.as_ref()
    }
}
