//! Menu item management commands.
//!
//! # Usage
//!
//! ```bash
//! # List the whole catalog
//! feira menu list
//!
//! # List items scoped to one event
//! feira menu list -e <event-id>
//!
//! # Add an item
//! feira menu add -n "Pastel de Carne" -p 9.50 -c food
//!
//! # Hide an item without deleting it
//! feira menu toggle <item-id>
//! ```

use feira_core::{Category, EventId, MenuItemId, format_brl};
use feira_storefront::error::{AppError, Result};
use feira_storefront::models::MenuItem;
use feira_storefront::repo::{EventRepository, MenuItemRepository};
use feira_storefront::state::AppState;
use rust_decimal::Decimal;

/// List menu items, optionally scoped to one event.
pub fn list(state: &AppState, event: Option<&str>) -> Result<()> {
    let items = MenuItemRepository::new(state.store());
    let items = match event {
        Some(id) => items.list_by_event(&EventId::new(id))?,
        None => items.list()?,
    };

    if items.is_empty() {
        tracing::info!("Menu is empty");
        return Ok(());
    }

    for item in items {
        tracing::info!(
            id = %item.id,
            price = %format_brl(item.price),
            category = %item.category,
            available = item.available,
            "{}",
            item.name
        );
    }
    Ok(())
}

/// Add a menu item to the catalog.
pub fn add(
    state: &AppState,
    name: &str,
    description: &str,
    price: Decimal,
    image_url: &str,
    category: Category,
    event: Option<&str>,
) -> Result<()> {
    let mut item = MenuItem::new(name, description, price, image_url, category);

    if let Some(id) = event {
        let event_id = EventId::new(id);
        if EventRepository::new(state.store()).get(&event_id)?.is_none() {
            return Err(AppError::NotFound(format!("event {id}")));
        }
        item = item.for_event(event_id);
    }

    MenuItemRepository::new(state.store()).add(&item)?;
    tracing::info!(id = %item.id, "Added menu item: {}", item.name);
    Ok(())
}

/// Remove a menu item from the catalog.
pub fn remove(state: &AppState, id: &str) -> Result<()> {
    let deleted = MenuItemRepository::new(state.store()).delete(&MenuItemId::new(id))?;
    if !deleted {
        return Err(AppError::NotFound(format!("menu item {id}")));
    }
    tracing::info!("Removed menu item {id}");
    Ok(())
}

/// Flip a menu item between available and unavailable.
pub fn toggle(state: &AppState, id: &str) -> Result<()> {
    let items = MenuItemRepository::new(state.store());
    let mut item = items
        .get(&MenuItemId::new(id))?
        .ok_or_else(|| AppError::NotFound(format!("menu item {id}")))?;

    item.available = !item.available;
    items.update(&item)?;

    let label = if item.available { "available" } else { "unavailable" };
    tracing::info!("Menu item {} is now {label}", item.name);
    Ok(())
}
