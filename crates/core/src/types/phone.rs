//! Phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input contains no digits.
    #[error("phone number must contain at least one digit")]
    NoDigits,
}

/// A phone number kept in its display form.
///
/// The value is stored exactly as entered (`"(11) 98765-4321"`); callers
/// that need a dialable number use [`Phone::digits`] to reduce it to its
/// digit sequence.
///
/// ## Examples
///
/// ```
/// use feira_core::Phone;
///
/// let phone = Phone::parse("(11) 98765-4321").unwrap();
/// assert_eq!(phone.as_str(), "(11) 98765-4321");
/// assert_eq!(phone.digits(), "11987654321");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Parse a `Phone` from a string.
    ///
    /// Leading and trailing whitespace is trimmed; everything else is kept
    /// verbatim so the number renders the way the owner wrote it.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or contains no digits.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PhoneError::Empty);
        }
        if !trimmed.chars().any(|c| c.is_ascii_digit()) {
            return Err(PhoneError::NoDigits);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the phone number as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns only the digits, dropping spaces, punctuation and prefixes.
    #[must_use]
    pub fn digits(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }

    /// Consumes the `Phone` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
