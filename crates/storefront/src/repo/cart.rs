//! Cart repository.

use super::{RepositoryError, read_records, write_records};
use crate::models::Cart;
use crate::store::{Collection, Store};

/// Repository for the single active cart.
pub struct CartRepository<'a> {
    store: &'a dyn Store,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Load the cart. A missing or corrupt document loads as an empty cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document cannot be read.
    pub fn load(&self) -> Result<Cart, RepositoryError> {
        read_records(self.store, Collection::Cart)
    }

    /// Persist the whole cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the document cannot be written.
    pub fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        write_records(self.store, Collection::Cart, cart)
    }
}
