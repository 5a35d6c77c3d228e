//! Order model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use feira_core::{EventId, OrderId, OrderStatus, PaymentMethod, Phone};

use super::CartLine;

/// A placed order.
///
/// Lines and the total are snapshots taken at checkout. Later menu edits do
/// not change what was ordered or what is owed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// Set when the cart was scoped to a fair event, absent for counter
    /// sales.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<EventId>,
    pub items: Vec<CartLine>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
    pub customer_name: String,
    pub customer_phone: Phone,
    /// Denormalized from the event at checkout so relay keeps working if
    /// the event is deleted later.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_phone: Option<Phone>,
}
