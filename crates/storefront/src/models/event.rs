//! Fair event model.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use feira_core::{EventId, Phone, UserId};

use super::User;

/// A fair event hosted by an organizer.
///
/// The organizer's name and phone are denormalized onto the event so that
/// order relay works without a user lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub description: String,
    /// Wall-clock date of the fair, no timezone attached.
    pub date: NaiveDateTime,
    pub location: String,
    pub image_url: String,
    pub organizer_id: UserId,
    pub organizer_name: String,
    pub organizer_phone: Phone,
    /// Inactive events are hidden from the public listing but keep their
    /// menu and order history.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Create an active event with a fresh ID, owned by `organizer`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDateTime,
        location: impl Into<String>,
        image_url: impl Into<String>,
        organizer: &User,
    ) -> Self {
        Self {
            id: EventId::generate(),
            name: name.into(),
            description: description.into(),
            date,
            location: location.into(),
            image_url: image_url.into(),
            organizer_id: organizer.id.clone(),
            organizer_name: organizer.name.clone(),
            organizer_phone: organizer.phone.clone(),
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use feira_core::Email;

    use super::*;

    #[test]
    fn test_new_copies_organizer_contact() {
        let organizer = User {
            id: UserId::new("org-1"),
            name: "João".to_owned(),
            email: Email::parse("joao@example.com").unwrap(),
            phone: Phone::parse("(21) 91234-5678").unwrap(),
            password: "senha".to_owned(),
            is_admin: false,
            created_at: Utc::now(),
        };

        let date = NaiveDateTime::parse_from_str("2026-09-07 09:00", "%Y-%m-%d %H:%M").unwrap();
        let event = Event::new(
            "Festa Junina",
            "Quermesse da escola",
            date,
            "Praça Central",
            "https://example.com/festa.jpg",
            &organizer,
        );

        assert!(event.is_active);
        assert_eq!(event.organizer_id, organizer.id);
        assert_eq!(event.organizer_name, "João");
        assert_eq!(event.organizer_phone, organizer.phone);
    }

    #[test]
    fn test_serializes_camel_case() {
        let organizer = User {
            id: UserId::new("org-1"),
            name: "João".to_owned(),
            email: Email::parse("joao@example.com").unwrap(),
            phone: Phone::parse("21912345678").unwrap(),
            password: "senha".to_owned(),
            is_admin: false,
            created_at: Utc::now(),
        };
        let date = NaiveDateTime::parse_from_str("2026-09-07 09:00", "%Y-%m-%d %H:%M").unwrap();
        let event = Event::new("Festa", "", date, "Praça", "", &organizer);

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["organizerName"], "João");
        assert_eq!(json["isActive"], true);
        assert!(json["imageUrl"].is_string());
    }
}
