//! User repository.

use feira_core::{Email, UserId};

use super::{RepositoryError, read_records, write_records};
use crate::models::User;
use crate::store::{Collection, Store};

/// Repository for registered accounts.
pub struct UserRepository<'a> {
    store: &'a dyn Store,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Get every account in registration order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document cannot be read.
    pub fn list(&self) -> Result<Vec<User>, RepositoryError> {
        read_records(self.store, Collection::Users)
    }

    /// Get a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document cannot be read.
    pub fn get(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.list()?.into_iter().find(|user| &user.id == id))
    }

    /// Get a user by their email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document cannot be read.
    pub fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        Ok(self.list()?.into_iter().find(|user| &user.email == email))
    }

    /// Get the user matching an exact email and password pair.
    ///
    /// First match in registration order wins.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document cannot be read.
    pub fn find_credentials(
        &self,
        email: &Email,
        password: &str,
    ) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .list()?
            .into_iter()
            .find(|user| &user.email == email && user.password == password))
    }

    /// Append a new account. The caller generates the ID first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the document cannot be read or written.
    pub fn add(&self, user: &User) -> Result<(), RepositoryError> {
        let mut users = self.list()?;
        users.push(user.clone());
        write_records(self.store, Collection::Users, &users)
    }
}
