//! Authentication service.
//!
//! Registration and login check the account collection directly. Whoever is
//! logged in sits in the session document; there is one seat, and logging in
//! takes it over.

mod error;

pub use error::AuthError;

use chrono::Utc;

use feira_core::{Email, UserId};

use crate::models::{Registration, User};
use crate::repo::{SessionRepository, UserRepository};
use crate::store::Store;

/// Authentication service.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    session: SessionRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self {
            users: UserRepository::new(store),
            session: SessionRepository::new(store),
        }
    }

    /// Register a new account and log it in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmailTaken` if the email is already registered.
    /// Returns `AuthError::Repository` if the store fails.
    pub fn register(&self, registration: Registration) -> Result<User, AuthError> {
        if self.users.get_by_email(&registration.email)?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let user = User {
            id: UserId::generate(),
            name: registration.name,
            email: registration.email,
            phone: registration.phone,
            password: registration.password,
            is_admin: false,
            created_at: Utc::now(),
        };
        self.users.add(&user)?;
        self.session.set_current_user(&user)?;

        tracing::info!(user_id = %user.id, "registered new account");
        Ok(user)
    }

    /// Login with email and password.
    ///
    /// The pair has to match a stored account exactly. An email that does
    /// not even parse fails the same way a wrong password does, so login
    /// never reveals which half was wrong.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the pair matches nothing.
    /// Returns `AuthError::Repository` if the store fails.
    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let Ok(email) = Email::parse(email) else {
            return Err(AuthError::InvalidCredentials);
        };

        let user = self
            .users
            .find_credentials(&email, password)?
            .ok_or(AuthError::InvalidCredentials)?;
        self.session.set_current_user(&user)?;

        Ok(user)
    }

    /// Log out whoever is logged in. Already logged out is fine.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the store fails.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.session.clear_current_user()?;
        Ok(())
    }

    /// Get the logged-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the store fails.
    pub fn current_user(&self) -> Result<Option<User>, AuthError> {
        Ok(self.session.current_user()?)
    }
}
