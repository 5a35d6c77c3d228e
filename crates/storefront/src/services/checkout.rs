//! Checkout service.
//!
//! Turns the active cart into an order. The order keeps its own copy of the
//! lines and total, so the catalog and the cart can move on afterwards.

use chrono::Utc;
use thiserror::Error;

use feira_core::{OrderId, OrderStatus, PaymentMethod, Phone};

use crate::models::{Cart, Event, Order};
use crate::repo::{CartRepository, OrderRepository, RepositoryError};
use crate::store::Store;

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Nothing in the cart to order.
    #[error("cart is empty")]
    EmptyCart,

    /// Repository/store error.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Details collected by the checkout form.
///
/// `event` scopes the order to a fair; counter sales pass `None`.
#[derive(Debug, Clone)]
pub struct CheckoutDetails<'e> {
    pub customer_name: String,
    pub customer_phone: Phone,
    pub payment_method: PaymentMethod,
    pub event: Option<&'e Event>,
}

/// Checkout service.
pub struct CheckoutService<'a> {
    carts: CartRepository<'a>,
    orders: OrderRepository<'a>,
}

impl<'a> CheckoutService<'a> {
    /// Create a new checkout service.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self {
            carts: CartRepository::new(store),
            orders: OrderRepository::new(store),
        }
    }

    /// Place an order from the active cart, then clear the cart.
    ///
    /// The new order starts out `Pending`. When an event is given, its id
    /// and organizer phone are copied onto the order so relay still works
    /// after the event is gone.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart` if there is nothing in the cart.
    /// Returns `CheckoutError::Repository` if the store fails.
    pub fn place_order(&self, details: CheckoutDetails<'_>) -> Result<Order, CheckoutError> {
        let cart = self.carts.load()?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let total_amount = cart.total_amount();
        let order = Order {
            id: OrderId::generate(),
            event_id: details.event.map(|event| event.id.clone()),
            items: cart.into_lines(),
            total_amount,
            status: OrderStatus::Pending,
            payment_method: details.payment_method,
            created_at: Utc::now(),
            customer_name: details.customer_name,
            customer_phone: details.customer_phone,
            organizer_phone: details.event.map(|event| event.organizer_phone.clone()),
        };
        self.orders.add(&order)?;
        self.carts.save(&Cart::new())?;

        tracing::info!(order_id = %order.id, total = %order.total_amount, "order placed");
        Ok(order)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDateTime;
    use feira_core::{Category, Email, UserId};
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::{MenuItem, User};
    use crate::services::CartService;
    use crate::store::MemoryStore;

    fn details() -> CheckoutDetails<'static> {
        CheckoutDetails {
            customer_name: "Maria".to_owned(),
            customer_phone: Phone::parse("(11) 98888-7777").unwrap(),
            payment_method: PaymentMethod::Pix,
            event: None,
        }
    }

    fn fill_cart(store: &MemoryStore) {
        let pastel = MenuItem::new("Pastel", "", Decimal::new(85, 1), "", Category::Food);
        let caldo = MenuItem::new("Caldo", "", Decimal::new(120, 1), "", Category::Food);
        let cart = CartService::new(store);
        cart.add(pastel, 2).unwrap();
        cart.add(caldo, 1).unwrap();
    }

    #[test]
    fn test_empty_cart_cannot_check_out() {
        let store = MemoryStore::new();
        let checkout = CheckoutService::new(&store);

        let err = checkout.place_order(details()).unwrap_err();
        assert!(matches!(err, CheckoutError::EmptyCart));
    }

    #[test]
    fn test_place_order_snapshots_the_cart_and_clears_it() {
        let store = MemoryStore::new();
        fill_cart(&store);

        let order = CheckoutService::new(&store).place_order(details()).unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.total_amount, Decimal::new(290, 1));
        assert_eq!(order.event_id, None);
        assert_eq!(order.organizer_phone, None);
        assert!(CartService::new(&store).cart().unwrap().is_empty());
    }

    #[test]
    fn test_event_order_carries_the_organizer_contact() {
        let store = MemoryStore::new();
        fill_cart(&store);

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
        let festa = Event::new("Festa Junina", "", date, "Praça", "", &organizer);

        let mut with_event = details();
        with_event.event = Some(&festa);
        let order = CheckoutService::new(&store).place_order(with_event).unwrap();

        assert_eq!(order.event_id.as_ref(), Some(&festa.id));
        assert_eq!(order.organizer_phone.as_ref(), Some(&organizer.phone));
    }
}
