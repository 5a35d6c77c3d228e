//! Menu item catalog model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use feira_core::{Category, EventId, MenuItemId};

/// A single item on a vendor's menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    /// Price in BRL units (not cents); never negative.
    pub price: Decimal,
    pub image_url: String,
    pub category: Category,
    /// Unavailable items stay on the menu but cannot be ordered.
    pub available: bool,
    /// The event this item belongs to; absent for a single-stall setup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<EventId>,
}

impl MenuItem {
    /// Create an available item with a fresh ID.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        image_url: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: MenuItemId::generate(),
            name: name.into(),
            description: description.into(),
            price,
            image_url: image_url.into(),
            category,
            available: true,
            event_id: None,
        }
    }

    /// Attach the item to an event.
    #[must_use]
    pub fn for_event(mut self, event_id: EventId) -> Self {
        self.event_id = Some(event_id);
        self
    }
}
