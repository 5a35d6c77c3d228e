//! Unified error handling.
//!
//! Provides a unified `AppError` that every component error converts into.
//! Application entry points (the CLI commands) should return
//! `Result<T, AppError>` and let the caller decide how to present it.

use thiserror::Error;

use crate::config::ConfigError;
use crate::payments::PixError;
use crate::repo::RepositoryError;
use crate::seed::SeedError;
use crate::services::auth::AuthError;
use crate::services::checkout::CheckoutError;
use crate::services::whatsapp::RelayError;
use crate::store::StoreError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The document store failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A repository operation failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Checkout operation failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Payment payload could not be encoded.
    #[error("Payment error: {0}")]
    Pix(#[from] PixError),

    /// Relay link could not be built.
    #[error("Relay error: {0}")]
    Relay(#[from] RelayError),

    /// Demo data could not be seeded.
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller-supplied value failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation requires a logged-in user.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
