//! Account and session commands.
//!
//! # Usage
//!
//! ```bash
//! # Create an account
//! feira register -n "Maria Silva" -e maria@example.com -p "(11) 91234-5678" --password s3cret
//!
//! # Start a session
//! feira login -e maria@example.com --password s3cret
//!
//! # Who is logged in?
//! feira whoami
//!
//! # End the session
//! feira logout
//! ```

use feira_core::{Email, Phone};
use feira_storefront::error::{AppError, Result};
use feira_storefront::models::Registration;
use feira_storefront::services::AuthService;
use feira_storefront::state::AppState;

/// Create an account and log it in.
pub fn register(
    state: &AppState,
    name: &str,
    email: &str,
    phone: &str,
    password: &str,
) -> Result<()> {
    let email = Email::parse(email).map_err(|e| AppError::InvalidInput(format!("email: {e}")))?;
    let phone = Phone::parse(phone).map_err(|e| AppError::InvalidInput(format!("phone: {e}")))?;

    let user = AuthService::new(state.store()).register(Registration {
        name: name.to_owned(),
        email,
        phone,
        password: password.to_owned(),
    })?;

    tracing::info!(id = %user.id, "Registered and logged in as {}", user.name);
    Ok(())
}

/// Log in with email and password.
pub fn login(state: &AppState, email: &str, password: &str) -> Result<()> {
    let user = AuthService::new(state.store()).login(email, password)?;
    tracing::info!(id = %user.id, "Logged in as {}", user.name);
    Ok(())
}

/// End the current session.
pub fn logout(state: &AppState) -> Result<()> {
    AuthService::new(state.store()).logout()?;
    tracing::info!("Logged out");
    Ok(())
}

/// Show the logged-in user.
pub fn whoami(state: &AppState) -> Result<()> {
    match AuthService::new(state.store()).current_user()? {
        Some(user) => tracing::info!(
            id = %user.id,
            email = %user.email,
            "Logged in as {}",
            user.name
        ),
        None => tracing::info!("Not logged in"),
    }
    Ok(())
}
