//! Menu item repository.

use feira_core::{EventId, MenuItemId};

use super::{RepositoryError, read_records, write_records};
use crate::models::MenuItem;
use crate::store::{Collection, Store};

/// Repository for catalog items.
pub struct MenuItemRepository<'a> {
    store: &'a dyn Store,
}

impl<'a> MenuItemRepository<'a> {
    /// Create a new menu item repository.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Get every catalog item in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document cannot be read.
    pub fn list(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        read_records(self.store, Collection::MenuItems)
    }

    /// Get the items scoped to one event.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document cannot be read.
    pub fn list_by_event(&self, event_id: &EventId) -> Result<Vec<MenuItem>, RepositoryError> {
        let mut items = self.list()?;
        items.retain(|item| item.event_id.as_ref() == Some(event_id));
        Ok(items)
    }

    /// Get an item by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document cannot be read.
    pub fn get(&self, id: &MenuItemId) -> Result<Option<MenuItem>, RepositoryError> {
        Ok(self.list()?.into_iter().find(|item| &item.id == id))
    }

    /// Append a new item. The caller generates the ID first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the document cannot be read or written.
    pub fn add(&self, item: &MenuItem) -> Result<(), RepositoryError> {
        let mut items = self.list()?;
        items.push(item.clone());
        write_records(self.store, Collection::MenuItems, &items)
    }

    /// Replace the stored record matching `item.id`.
    ///
    /// Returns `true` if a record was replaced, `false` if no record has
    /// that ID (nothing is written in that case).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the document cannot be read or written.
    pub fn update(&self, item: &MenuItem) -> Result<bool, RepositoryError> {
        let mut items = self.list()?;
        let Some(stored) = items.iter_mut().find(|stored| stored.id == item.id) else {
            return Ok(false);
        };
        *stored = item.clone();
        write_records(self.store, Collection::MenuItems, &items)?;
        Ok(true)
    }

    /// Delete an item.
    ///
    /// Returns `true` if the item was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the document cannot be read or written.
    pub fn delete(&self, id: &MenuItemId) -> Result<bool, RepositoryError> {
        let mut items = self.list()?;
        let before = items.len();
        items.retain(|item| &item.id != id);
        if items.len() == before {
            return Ok(false);
        }
        write_records(self.store, Collection::MenuItems, &items)?;
        Ok(true)
    }

    /// Delete every item scoped to `event_id`, returning how many went away.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the document cannot be read or written.
    pub fn delete_by_event(&self, event_id: &EventId) -> Result<usize, RepositoryError> {
        let mut items = self.list()?;
        let before = items.len();
        items.retain(|item| item.event_id.as_ref() != Some(event_id));
        let removed = before - items.len();
        if removed > 0 {
            write_records(self.store, Collection::MenuItems, &items)?;
        }
        Ok(removed)
    }
}
