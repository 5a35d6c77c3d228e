//! Checkout command.
//!
//! # Usage
//!
//! ```bash
//! # Counter sale paid over PIX
//! feira checkout -n "Maria Silva" -p "(11) 91234-5678"
//!
//! # Order scoped to an event, card on pickup
//! feira checkout -n "Maria Silva" -p "(11) 91234-5678" -m credit -e <event-id>
//! ```

use feira_core::{EventId, PaymentMethod, Phone, format_brl};
use feira_storefront::error::{AppError, Result};
use feira_storefront::payments;
use feira_storefront::repo::EventRepository;
use feira_storefront::services::{CheckoutDetails, CheckoutService, WhatsappRelay};
use feira_storefront::state::AppState;

/// Place an order from the current cart.
///
/// Prints the PIX copy-and-paste code for `pix` orders and, when the order
/// is scoped to an event, the WhatsApp link that relays it to the organizer.
pub fn place(
    state: &AppState,
    name: &str,
    phone: &str,
    method: PaymentMethod,
    event: Option<&str>,
) -> Result<()> {
    let customer_phone =
        Phone::parse(phone).map_err(|e| AppError::InvalidInput(format!("phone: {e}")))?;

    let event_record = match event {
        Some(id) => Some(
            EventRepository::new(state.store())
                .get(&EventId::new(id))?
                .ok_or_else(|| AppError::NotFound(format!("event {id}")))?,
        ),
        None => None,
    };

    let order = CheckoutService::new(state.store()).place_order(CheckoutDetails {
        customer_name: name.to_owned(),
        customer_phone,
        payment_method: method,
        event: event_record.as_ref(),
    })?;

    tracing::info!(
        id = %order.id,
        total = %format_brl(order.total_amount),
        status = %order.status,
        "Order placed"
    );

    if order.payment_method == PaymentMethod::Pix {
        let code = payments::payload(&order, &state.config().merchant)?;
        tracing::info!("PIX copy-and-paste code:\n{code}");
    }

    if order.organizer_phone.is_some() {
        let link = WhatsappRelay::new(&state.config().relay).order_link(&order)?;
        tracing::info!("Notify the organizer: {link}");
    }

    Ok(())
}
