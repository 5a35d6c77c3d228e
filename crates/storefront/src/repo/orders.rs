//! Order repository.
//!
//! Orders are append-only. There is no delete; cancelled business flows are
//! modeled as status changes so the sales history stays intact.

use feira_core::{EventId, OrderId, OrderStatus};

use super::{RepositoryError, read_records, write_records};
use crate::models::Order;
use crate::store::{Collection, Store};

/// Repository for placed orders.
pub struct OrderRepository<'a> {
    store: &'a dyn Store,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Get every order in placement order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document cannot be read.
    pub fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        read_records(self.store, Collection::Orders)
    }

    /// Get the orders placed against one event.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document cannot be read.
    pub fn list_by_event(&self, event_id: &EventId) -> Result<Vec<Order>, RepositoryError> {
        let mut orders = self.list()?;
        orders.retain(|order| order.event_id.as_ref() == Some(event_id));
        Ok(orders)
    }

    /// Get an order by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document cannot be read.
    pub fn get(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError> {
        Ok(self.list()?.into_iter().find(|order| &order.id == id))
    }

    /// Append a new order. The caller generates the ID first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the document cannot be read or written.
    pub fn add(&self, order: &Order) -> Result<(), RepositoryError> {
        let mut orders = self.list()?;
        orders.push(order.clone());
        write_records(self.store, Collection::Orders, &orders)
    }

    /// Overwrite the status of one order, leaving every other field alone.
    ///
    /// Returns `true` if the order was found, `false` otherwise (nothing is
    /// written in that case).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the document cannot be read or written.
    pub fn set_status(&self, id: &OrderId, status: OrderStatus) -> Result<bool, RepositoryError> {
        let mut orders = self.list()?;
        let Some(order) = orders.iter_mut().find(|order| &order.id == id) else {
            return Ok(false);
        };
        order.status = status;
        write_records(self.store, Collection::Orders, &orders)?;
        Ok(true)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use feira_core::{PaymentMethod, Phone};
    use rust_decimal::Decimal;

    use super::*;
    use crate::store::MemoryStore;

    fn order(id: &str, event_id: Option<EventId>) -> Order {
        Order {
            id: OrderId::new(id),
            event_id,
            items: Vec::new(),
            total_amount: Decimal::new(170, 1),
            status: OrderStatus::Pending,
            payment_method: PaymentMethod::Pix,
            created_at: Utc::now(),
            customer_name: "Maria".to_owned(),
            customer_phone: Phone::parse("11988887777").unwrap(),
            organizer_phone: None,
        }
    }

    #[test]
    fn test_add_and_list_keep_placement_order() {
        let store = MemoryStore::new();
        let repo = OrderRepository::new(&store);

        repo.add(&order("order-1", None)).unwrap();
        repo.add(&order("order-2", None)).unwrap();

        let ids: Vec<_> = repo
            .list()
            .unwrap()
            .into_iter()
            .map(|o| o.id.into_inner())
            .collect();
        assert_eq!(ids, ["order-1", "order-2"]);
    }

    #[test]
    fn test_set_status_touches_only_the_status() {
        let store = MemoryStore::new();
        let repo = OrderRepository::new(&store);
        let placed = order("order-1", None);
        repo.add(&placed).unwrap();

        assert!(repo.set_status(&placed.id, OrderStatus::Paid).unwrap());

        let stored = repo.get(&placed.id).unwrap().unwrap();
        assert_eq!(stored.status, OrderStatus::Paid);
        assert_eq!(stored.customer_name, placed.customer_name);
        assert_eq!(stored.total_amount, placed.total_amount);
    }

    #[test]
    fn test_set_status_unknown_order_writes_nothing() {
        let store = MemoryStore::new();
        let repo = OrderRepository::new(&store);
        repo.add(&order("order-1", None)).unwrap();

        assert!(
            !repo
                .set_status(&OrderId::new("missing"), OrderStatus::Paid)
                .unwrap()
        );
        assert_eq!(
            repo.get(&OrderId::new("order-1")).unwrap().unwrap().status,
            OrderStatus::Pending
        );
    }

    #[test]
    fn test_list_by_event_filters_counter_sales_out() {
        let store = MemoryStore::new();
        let repo = OrderRepository::new(&store);
        let festa = EventId::generate();

        repo.add(&order("order-1", Some(festa.clone()))).unwrap();
        repo.add(&order("order-2", None)).unwrap();

        let scoped = repo.list_by_event(&festa).unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped.first().unwrap().id, OrderId::new("order-1"));
    }
}
