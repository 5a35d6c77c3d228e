//! Event management commands.
//!
//! # Usage
//!
//! ```bash
//! # Active events
//! feira events list
//!
//! # Everything, including deactivated events
//! feira events list -a
//!
//! # Create an event (requires login)
//! feira events add -n "Festa Junina" --date "2026-06-24 18:00" -l "Praça Central"
//!
//! # Deactivate without deleting
//! feira events toggle <event-id>
//!
//! # Delete an event and its scoped menu items
//! feira events remove <event-id>
//! ```

use chrono::NaiveDateTime;
use feira_core::EventId;
use feira_storefront::error::{AppError, Result};
use feira_storefront::models::Event;
use feira_storefront::repo::{EventRepository, SessionRepository};
use feira_storefront::state::AppState;

/// List events, active ones by default.
pub fn list(state: &AppState, all: bool) -> Result<()> {
    let events = EventRepository::new(state.store());
    let events = if all {
        events.list()?
    } else {
        events.list_active()?
    };

    if events.is_empty() {
        tracing::info!("No events found");
        return Ok(());
    }

    for event in events {
        tracing::info!(
            id = %event.id,
            date = %event.date,
            location = %event.location,
            organizer = %event.organizer_name,
            active = event.is_active,
            "{}",
            event.name
        );
    }
    Ok(())
}

/// Create an event owned by the logged-in user.
pub fn add(
    state: &AppState,
    name: &str,
    description: &str,
    date: &str,
    location: &str,
    image_url: &str,
) -> Result<()> {
    let organizer = SessionRepository::new(state.store())
        .current_user()?
        .ok_or_else(|| AppError::Unauthorized("log in before creating an event".to_owned()))?;

    let date = NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M")
        .map_err(|e| AppError::InvalidInput(format!("date: {e} (expected YYYY-MM-DD HH:MM)")))?;

    let event = Event::new(name, description, date, location, image_url, &organizer);
    EventRepository::new(state.store()).add(&event)?;

    tracing::info!(id = %event.id, "Created event: {}", event.name);
    Ok(())
}

/// Flip an event between active and inactive.
pub fn toggle(state: &AppState, id: &str) -> Result<()> {
    let events = EventRepository::new(state.store());
    let mut event = events
        .get(&EventId::new(id))?
        .ok_or_else(|| AppError::NotFound(format!("event {id}")))?;

    event.is_active = !event.is_active;
    events.update(&event)?;

    let label = if event.is_active { "active" } else { "inactive" };
    tracing::info!("Event {} is now {label}", event.name);
    Ok(())
}

/// Delete an event and the menu items scoped to it.
pub fn remove(state: &AppState, id: &str) -> Result<()> {
    let deleted = EventRepository::new(state.store()).delete(&EventId::new(id))?;
    if !deleted {
        return Err(AppError::NotFound(format!("event {id}")));
    }
    tracing::info!("Removed event {id}");
    Ok(())
}
