//! User and registration models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use feira_core::{Email, Phone, UserId};

/// A registered account: a customer or an event organizer.
///
/// Accounts are never deleted by the storefront; events reference their
/// organizer by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub phone: Phone,
    /// Stored as entered; the persisted account document carries it
    /// verbatim.
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Details collected by the registration form.
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: Email,
    pub phone: Phone,
    pub password: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let user = User {
            id: UserId::new("u-1"),
            name: "Maria".to_owned(),
            email: Email::parse("maria@example.com").unwrap(),
            phone: Phone::parse("(11) 98765-4321").unwrap(),
            password: "s3nha".to_owned(),
            is_admin: false,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["isAdmin"], false);
        assert_eq!(json["email"], "maria@example.com");
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_is_admin_defaults_to_false() {
        let json = r#"{
            "id": "u-1",
            "name": "Maria",
            "email": "maria@example.com",
            "phone": "11987654321",
            "password": "s3nha",
            "createdAt": "2026-03-01T12:00:00Z"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert!(!user.is_admin);
    }
}
