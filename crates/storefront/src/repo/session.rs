//! Session repository.
//!
//! The session is one document holding either the logged-in user or `null`.
//! There is a single seat; logging in overwrites whoever held it.

use super::{RepositoryError, read_records, write_records};
use crate::models::User;
use crate::store::{Collection, Store};

/// Repository for the current-user session document.
pub struct SessionRepository<'a> {
    store: &'a dyn Store,
}

impl<'a> SessionRepository<'a> {
    /// Create a new session repository.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Get the logged-in user, if any.
    ///
    /// A missing or corrupt session document reads as logged out.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document cannot be read.
    pub fn current_user(&self) -> Result<Option<User>, RepositoryError> {
        read_records(self.store, Collection::CurrentUser)
    }

    /// Make `user` the logged-in user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the document cannot be written.
    pub fn set_current_user(&self, user: &User) -> Result<(), RepositoryError> {
        write_records(self.store, Collection::CurrentUser, user)
    }

    /// Log out whoever is logged in.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the document cannot be written.
    pub fn clear_current_user(&self) -> Result<(), RepositoryError> {
        write_records(self.store, Collection::CurrentUser, &None::<User>)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use feira_core::{Email, Phone, UserId};

    use super::*;
    use crate::store::MemoryStore;

    fn user() -> User {
        User {
            id: UserId::new("u1"),
            name: "Maria".to_owned(),
            email: Email::parse("maria@example.com").unwrap(),
            phone: Phone::parse("11988887777").unwrap(),
            password: "senha".to_owned(),
            is_admin: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_fresh_store_reads_as_logged_out() {
        let store = MemoryStore::new();
        let repo = SessionRepository::new(&store);

        assert!(repo.current_user().unwrap().is_none());
    }

    #[test]
    fn test_set_then_clear_round_trips() {
        let store = MemoryStore::new();
        let repo = SessionRepository::new(&store);

        repo.set_current_user(&user()).unwrap();
        assert_eq!(repo.current_user().unwrap().unwrap().id, UserId::new("u1"));

        repo.clear_current_user().unwrap();
        assert!(repo.current_user().unwrap().is_none());
        assert_eq!(
            store.read(Collection::CurrentUser).unwrap().as_deref(),
            Some("null")
        );
    }

    #[test]
    fn test_corrupt_session_reads_as_logged_out() {
        let store = MemoryStore::new();
        store.write(Collection::CurrentUser, "{broken").unwrap();

        let repo = SessionRepository::new(&store);
        assert!(repo.current_user().unwrap().is_none());
    }
}
