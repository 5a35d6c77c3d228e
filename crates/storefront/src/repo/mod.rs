//! Repositories over the persistent store.
//!
//! Each collection holds one JSON document with every record of that entity:
//!
//! - `users` - Registered accounts
//! - `events` - Fair events
//! - `menuItems` - Catalog items, optionally scoped to an event
//! - `orders` - Placed orders (append-only, never deleted)
//! - `cart` - The single active cart
//! - `currentUser` - The logged-in user, or `null`
//!
//! Repositories read the whole document, work on the decoded records in
//! memory, and write the whole document back. A document that fails to
//! decode is treated as empty so one bad write cannot brick the store; the
//! recovery is logged at warn level.

pub mod cart;
pub mod events;
pub mod menu_items;
pub mod orders;
pub mod session;
pub mod users;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::store::{Collection, Store, StoreError};

pub use cart::CartRepository;
pub use events::EventRepository;
pub use menu_items::MenuItemRepository;
pub use orders::OrderRepository;
pub use session::SessionRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The underlying store failed to read or write a document.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A record could not be encoded for persistence.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Read and decode a collection document.
///
/// A missing document and a corrupt document both decode to `T::default()`;
/// corruption is logged, never propagated.
pub(crate) fn read_records<T>(
    store: &dyn Store,
    collection: Collection,
) -> Result<T, RepositoryError>
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = store.read(collection)? else {
        return Ok(T::default());
    };

    match serde_json::from_str(&raw) {
        Ok(records) => Ok(records),
        Err(error) => {
            tracing::warn!(%collection, %error, "corrupt document in store, treating as empty");
            Ok(T::default())
        }
    }
}

/// Encode and write a collection document.
pub(crate) fn write_records<T>(
    store: &dyn Store,
    collection: Collection,
    records: &T,
) -> Result<(), RepositoryError>
where
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(records)?;
    store.write(collection, &raw)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_read_records_missing_document_is_default() {
        let store = MemoryStore::new();

        let records: Vec<String> = read_records(&store, Collection::Users).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_read_records_corrupt_document_is_default() {
        let store = MemoryStore::new();
        store.write(Collection::Users, "{not json").unwrap();

        let records: Vec<String> = read_records(&store, Collection::Users).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let store = MemoryStore::new();
        let records = vec!["a".to_owned(), "b".to_owned()];

        write_records(&store, Collection::Users, &records).unwrap();
        let loaded: Vec<String> = read_records(&store, Collection::Users).unwrap();
        assert_eq!(loaded, records);
    }
}
