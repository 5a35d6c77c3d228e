//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults run a local canteen out of the
//! box.
//!
//! - `FEIRA_DATA_DIR` - Directory for the JSON document store (default: `data`)
//! - `FEIRA_MERCHANT_NAME` - Merchant name on payment payloads (default: `CANTINA DIGITAL`)
//! - `FEIRA_MERCHANT_CITY` - Merchant city on payment payloads (default: `SAO PAULO`)
//! - `FEIRA_PIX_KEY` - Registered PIX key that receives payments (default: a sample UUID key)
//! - `FEIRA_RELAY_HOST` - Messaging deep-link host (default: `wa.me`)
//! - `FEIRA_COUNTRY_CODE` - Country code prefixed to relayed phone numbers (default: `55`)

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_MERCHANT_NAME: &str = "CANTINA DIGITAL";
const DEFAULT_MERCHANT_CITY: &str = "SAO PAULO";
const DEFAULT_PIX_KEY: &str = "123e4567-e89b-12d3-a456-426614174000";
const DEFAULT_RELAY_HOST: &str = "wa.me";
const DEFAULT_COUNTRY_CODE: &str = "55";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding the JSON document store
    pub data_dir: PathBuf,
    /// Merchant identity stamped into payment payloads
    pub merchant: MerchantConfig,
    /// Messaging relay settings
    pub relay: RelayConfig,
}

/// Merchant identity stamped into payment payloads.
#[derive(Debug, Clone)]
pub struct MerchantConfig {
    /// Merchant display name (payload tag 59)
    pub name: String,
    /// Merchant city (payload tag 60)
    pub city: String,
    /// Registered PIX key that receives the money
    pub pix_key: String,
}

/// Messaging relay settings.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Deep-link host
    pub host: String,
    /// Country code prefixed to every relayed phone number, digits only
    pub country_code: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            data_dir: PathBuf::from(get_env_or_default("FEIRA_DATA_DIR", DEFAULT_DATA_DIR)),
            merchant: MerchantConfig::from_env(),
            relay: RelayConfig::from_env()?,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            merchant: MerchantConfig::default(),
            relay: RelayConfig::default(),
        }
    }
}

impl MerchantConfig {
    fn from_env() -> Self {
        Self {
            name: get_env_or_default("FEIRA_MERCHANT_NAME", DEFAULT_MERCHANT_NAME),
            city: get_env_or_default("FEIRA_MERCHANT_CITY", DEFAULT_MERCHANT_CITY),
            pix_key: get_env_or_default("FEIRA_PIX_KEY", DEFAULT_PIX_KEY),
        }
    }
}

impl Default for MerchantConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MERCHANT_NAME.to_owned(),
            city: DEFAULT_MERCHANT_CITY.to_owned(),
            pix_key: DEFAULT_PIX_KEY.to_owned(),
        }
    }
}

impl RelayConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let country_code = get_env_or_default("FEIRA_COUNTRY_CODE", DEFAULT_COUNTRY_CODE);
        validate_country_code(&country_code, "FEIRA_COUNTRY_CODE")?;

        Ok(Self {
            host: get_env_or_default("FEIRA_RELAY_HOST", DEFAULT_RELAY_HOST),
            country_code,
        })
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RELAY_HOST.to_owned(),
            country_code: DEFAULT_COUNTRY_CODE.to_owned(),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a country code is one or more ASCII digits.
fn validate_country_code(code: &str, var_name: &str) -> Result<(), ConfigError> {
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("expected digits, got {code:?}"),
        ));
    }
    Ok(())
}
