//! Event repository.

use feira_core::{EventId, UserId};

use super::{MenuItemRepository, RepositoryError, read_records, write_records};
use crate::models::Event;
use crate::store::{Collection, Store};

/// Repository for fair events.
pub struct EventRepository<'a> {
    store: &'a dyn Store,
}

impl<'a> EventRepository<'a> {
    /// Create a new event repository.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Get every event in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document cannot be read.
    pub fn list(&self) -> Result<Vec<Event>, RepositoryError> {
        read_records(self.store, Collection::Events)
    }

    /// Get the events shown on the public listing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document cannot be read.
    pub fn list_active(&self) -> Result<Vec<Event>, RepositoryError> {
        let mut events = self.list()?;
        events.retain(|event| event.is_active);
        Ok(events)
    }

    /// Get the events owned by one organizer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document cannot be read.
    pub fn list_by_organizer(&self, organizer_id: &UserId) -> Result<Vec<Event>, RepositoryError> {
        let mut events = self.list()?;
        events.retain(|event| &event.organizer_id == organizer_id);
        Ok(events)
    }

    /// Get an event by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document cannot be read.
    pub fn get(&self, id: &EventId) -> Result<Option<Event>, RepositoryError> {
        Ok(self.list()?.into_iter().find(|event| &event.id == id))
    }

    /// Append a new event. The caller generates the ID first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the document cannot be read or written.
    pub fn add(&self, event: &Event) -> Result<(), RepositoryError> {
        let mut events = self.list()?;
        events.push(event.clone());
        write_records(self.store, Collection::Events, &events)
    }

    /// Replace the stored record matching `event.id`.
    ///
    /// Returns `true` if a record was replaced, `false` if no record has
    /// that ID (nothing is written in that case).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the document cannot be read or written.
    pub fn update(&self, event: &Event) -> Result<bool, RepositoryError> {
        let mut events = self.list()?;
        let Some(stored) = events.iter_mut().find(|stored| stored.id == event.id) else {
            return Ok(false);
        };
        *stored = event.clone();
        write_records(self.store, Collection::Events, &events)?;
        Ok(true)
    }

    /// Delete an event along with every menu item scoped to it.
    ///
    /// Orders referencing the event are kept; they carry their own snapshot
    /// of what was bought.
    ///
    /// Returns `true` if the event was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if a document cannot be read or written.
    pub fn delete(&self, id: &EventId) -> Result<bool, RepositoryError> {
        let mut events = self.list()?;
        let before = events.len();
        events.retain(|event| &event.id != id);
        if events.len() == before {
            return Ok(false);
        }
        write_records(self.store, Collection::Events, &events)?;

        let removed = MenuItemRepository::new(self.store).delete_by_event(id)?;
        if removed > 0 {
            tracing::debug!(event_id = %id, removed, "cascaded menu item deletion");
        }
        Ok(true)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{NaiveDateTime, Utc};
    use feira_core::{Category, Email, Phone};
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::{MenuItem, User};
    use crate::store::MemoryStore;

    fn organizer() -> User {
        User {
            id: UserId::new("org-1"),
            name: "João".to_owned(),
            email: Email::parse("joao@example.com").unwrap(),
            phone: Phone::parse("21912345678").unwrap(),
            password: "senha".to_owned(),
            is_admin: false,
            created_at: Utc::now(),
        }
    }

    fn event(name: &str, organizer: &User) -> Event {
        let date = NaiveDateTime::parse_from_str("2026-09-07 09:00", "%Y-%m-%d %H:%M").unwrap();
        Event::new(name, "", date, "Praça", "", organizer)
    }

    #[test]
    fn test_list_active_hides_deactivated_events() {
        let store = MemoryStore::new();
        let repo = EventRepository::new(&store);
        let organizer = organizer();

        let mut festa = event("Festa Junina", &organizer);
        repo.add(&festa).unwrap();
        repo.add(&event("Quermesse", &organizer)).unwrap();

        festa.is_active = false;
        assert!(repo.update(&festa).unwrap());

        let names: Vec<_> = repo
            .list_active()
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["Quermesse"]);
    }

    #[test]
    fn test_list_by_organizer_filters_on_owner() {
        let store = MemoryStore::new();
        let repo = EventRepository::new(&store);
        let joao = organizer();
        let mut maria = organizer();
        maria.id = UserId::new("org-2");
        maria.name = "Maria".to_owned();

        repo.add(&event("Festa de João", &joao)).unwrap();
        repo.add(&event("Festa de Maria", &maria)).unwrap();

        let owned = repo.list_by_organizer(&maria.id).unwrap();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned.first().unwrap().name, "Festa de Maria");
    }

    #[test]
    fn test_delete_cascades_to_scoped_menu_items() {
        let store = MemoryStore::new();
        let events = EventRepository::new(&store);
        let items = MenuItemRepository::new(&store);
        let festa = event("Festa Junina", &organizer());
        events.add(&festa).unwrap();

        let pastel = MenuItem::new("Pastel", "", Decimal::new(85, 1), "", Category::Food)
            .for_event(festa.id.clone());
        let avulso = MenuItem::new("Refrigerante", "", Decimal::new(50, 1), "", Category::Drinks);
        items.add(&pastel).unwrap();
        items.add(&avulso).unwrap();

        assert!(events.delete(&festa.id).unwrap());
        assert!(events.get(&festa.id).unwrap().is_none());

        let names: Vec<_> = items.list().unwrap().into_iter().map(|i| i.name).collect();
        assert_eq!(names, ["Refrigerante"]);
    }

    #[test]
    fn test_delete_unknown_event_is_a_no_op() {
        let store = MemoryStore::new();
        let repo = EventRepository::new(&store);
        repo.add(&event("Festa", &organizer())).unwrap();

        assert!(!repo.delete(&EventId::new("missing")).unwrap());
        assert_eq!(repo.list().unwrap().len(), 1);
    }
}
