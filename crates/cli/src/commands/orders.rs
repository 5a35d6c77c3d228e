//! Order management commands.
//!
//! # Usage
//!
//! ```bash
//! # List every order
//! feira orders list
//!
//! # Orders for one event
//! feira orders list -e <event-id>
//!
//! # Mark an order paid
//! feira orders set-status <order-id> paid
//!
//! # Rebuild the organizer relay link
//! feira orders relay <order-id>
//!
//! # Confirm an order and notify the customer
//! feira orders confirm <order-id>
//! ```

use feira_core::{EventId, OrderId, OrderStatus, format_brl};
use feira_storefront::error::{AppError, Result};
use feira_storefront::repo::{EventRepository, OrderRepository};
use feira_storefront::services::WhatsappRelay;
use feira_storefront::state::AppState;

/// List orders, optionally scoped to one event.
pub fn list(state: &AppState, event: Option<&str>) -> Result<()> {
    let orders = OrderRepository::new(state.store());
    let orders = match event {
        Some(id) => orders.list_by_event(&EventId::new(id))?,
        None => orders.list()?,
    };

    if orders.is_empty() {
        tracing::info!("No orders yet");
        return Ok(());
    }

    for order in orders {
        tracing::info!(
            id = %order.id,
            total = %format_brl(order.total_amount),
            status = %order.status,
            payment = %order.payment_method,
            "{}",
            order.customer_name
        );
    }
    Ok(())
}

/// Overwrite an order's status.
pub fn set_status(state: &AppState, id: &str, status: OrderStatus) -> Result<()> {
    let updated = OrderRepository::new(state.store()).set_status(&OrderId::new(id), status)?;
    if !updated {
        return Err(AppError::NotFound(format!("order {id}")));
    }
    tracing::info!("Order {id} is now {status}");
    Ok(())
}

/// Print the WhatsApp link that relays an order to its organizer.
pub fn relay(state: &AppState, id: &str) -> Result<()> {
    let order = OrderRepository::new(state.store())
        .get(&OrderId::new(id))?
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    let link = WhatsappRelay::new(&state.config().relay).order_link(&order)?;
    tracing::info!("Notify the organizer: {link}");
    Ok(())
}

/// Confirm an order and print the customer notification link.
///
/// Orders without an event show the merchant name where the message
/// names the event.
pub fn confirm(state: &AppState, id: &str) -> Result<()> {
    let order_id = OrderId::new(id);
    let orders = OrderRepository::new(state.store());
    let order = orders
        .get(&order_id)?
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    let event_name = match &order.event_id {
        Some(event_id) => EventRepository::new(state.store())
            .get(event_id)?
            .map(|event| event.name),
        None => None,
    };
    let event_name = event_name.unwrap_or_else(|| state.config().merchant.name.clone());

    orders.set_status(&order_id, OrderStatus::Confirmed)?;

    let link = WhatsappRelay::new(&state.config().relay).confirmation_link(&order, &event_name)?;
    tracing::info!("Order {id} confirmed. Notify the customer: {link}");
    Ok(())
}
