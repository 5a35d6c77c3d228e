//! Authentication error types.

use thiserror::Error;

use crate::repo::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The email already belongs to an account.
    #[error("email already registered")]
    EmailTaken,

    /// Invalid credentials (wrong password or user not found).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Repository/store error.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
