//! Persistent store for storefront collections.
//!
//! Every collection lives under a fixed key as one serialized JSON document,
//! the way a browser origin keeps them in `localStorage`. The [`Store`]
//! trait is the entire persistence contract: read a document, write a
//! document, synchronously. Typed decoding and corruption recovery live in
//! [`crate::repo`].

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

/// The six storefront collections and their storage keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Events,
    MenuItems,
    Orders,
    Cart,
    CurrentUser,
}

impl Collection {
    /// Every collection, in initialization order.
    pub const ALL: [Self; 6] = [
        Self::Users,
        Self::Events,
        Self::MenuItems,
        Self::Orders,
        Self::Cart,
        Self::CurrentUser,
    ];

    /// The storage key for this collection.
    ///
    /// Keys are part of the persisted contract shared with the web front
    /// end, so they keep their original camelCase spelling.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Events => "events",
            Self::MenuItems => "menuItems",
            Self::Orders => "orders",
            Self::Cart => "cart",
            Self::CurrentUser => "currentUser",
        }
    }

    /// The document [`initialize_defaults`] writes when the key is absent.
    #[must_use]
    pub const fn empty_document(self) -> &'static str {
        match self {
            Self::CurrentUser => "null",
            _ => "[]",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Errors that can occur reading or writing the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing medium failed.
    #[error("store I/O error on {path}: {source}")]
    Io {
        /// Path of the document that failed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Durable storage for storefront collections.
///
/// Implementations must make every `write` visible to subsequent `read`
/// calls in the same process; there is no buffering layer above them.
pub trait Store: Send + Sync {
    /// Read the raw document stored under `collection`.
    ///
    /// Returns `None` when the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing medium fails. A missing key is
    /// not an error.
    fn read(&self, collection: Collection) -> Result<Option<String>, StoreError>;

    /// Replace the document stored under `collection`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing medium fails.
    fn write(&self, collection: Collection, document: &str) -> Result<(), StoreError>;
}

/// Write the empty document for every collection that does not exist yet.
///
/// Run once at session start. Existing data is never overwritten, so a
/// returning vendor keeps their catalog and order history.
///
/// # Errors
///
/// Returns `StoreError` if the backing medium fails.
pub fn initialize_defaults(store: &dyn Store) -> Result<(), StoreError> {
    for collection in Collection::ALL {
        if store.read(collection)?.is_none() {
            store.write(collection, collection.empty_document())?;
        }
    }
    Ok(())
}
