//! Shopping cart model.
//!
//! The cart is a pure value: mutations here never touch storage. Pair them
//! with [`crate::services::CartService`] to persist the result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use feira_core::MenuItemId;

use super::MenuItem;

/// One cart line: an item snapshot plus a quantity.
///
/// The embedded [`MenuItem`] is copied at add time, so later catalog edits
/// never change what the customer already put in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub item: MenuItem,
    /// Always at least 1; a line that would drop to 0 is removed instead.
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal (price times quantity).
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.item.price * Decimal::from(self.quantity)
    }
}

/// The session's shopping cart.
///
/// Serializes as a bare array of lines, matching the persisted `cart`
/// document. Totals are derived on every call, never cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The lines, in the order they were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Total amount across all lines.
    #[must_use]
    pub fn total_amount(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Add `quantity` units of `item`.
    ///
    /// An existing line for the same item absorbs the quantity; otherwise a
    /// new line is appended at the end. Adding zero units is a no-op.
    pub fn add(&mut self, item: MenuItem, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.item.id == item.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine { item, quantity });
        }
    }

    /// Set the quantity of the line for `item_id`.
    ///
    /// A quantity of zero removes the line, exactly like [`Cart::remove`].
    /// Unknown ids are ignored.
    pub fn set_quantity(&mut self, item_id: &MenuItemId, quantity: u32) {
        if quantity == 0 {
            self.remove(item_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.item.id == *item_id) {
            line.quantity = quantity;
        }
    }

    /// Remove the line for `item_id`, if present.
    pub fn remove(&mut self, item_id: &MenuItemId) {
        self.lines.retain(|line| line.item.id != *item_id);
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Consume the cart, returning its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }
}
