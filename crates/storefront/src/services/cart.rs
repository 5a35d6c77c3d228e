//! Cart service.
//!
//! Pairs each pure `Cart` mutation with persistence: load the cart
//! document, apply the change, write the whole cart back, hand the updated
//! cart to the caller.

use feira_core::MenuItemId;

use crate::models::{Cart, MenuItem};
use crate::repo::{CartRepository, RepositoryError};
use crate::store::Store;

/// Cart service.
pub struct CartService<'a> {
    carts: CartRepository<'a>,
}

impl<'a> CartService<'a> {
    /// Create a new cart service.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self {
            carts: CartRepository::new(store),
        }
    }

    /// Get the current cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document cannot be read.
    pub fn cart(&self) -> Result<Cart, RepositoryError> {
        self.carts.load()
    }

    /// Add `quantity` of `item`, merging into an existing line for the same
    /// item. Quantity 0 changes nothing but still returns the cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the document cannot be read or written.
    pub fn add(&self, item: MenuItem, quantity: u32) -> Result<Cart, RepositoryError> {
        self.mutate(|cart| cart.add(item, quantity))
    }

    /// Set the quantity of one line. Zero removes the line; an unknown item
    /// changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the document cannot be read or written.
    pub fn set_quantity(
        &self,
        item_id: &MenuItemId,
        quantity: u32,
    ) -> Result<Cart, RepositoryError> {
        self.mutate(|cart| cart.set_quantity(item_id, quantity))
    }

    /// Remove one line. An unknown item changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the document cannot be read or written.
    pub fn remove(&self, item_id: &MenuItemId) -> Result<Cart, RepositoryError> {
        self.mutate(|cart| cart.remove(item_id))
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the document cannot be read or written.
    pub fn clear(&self) -> Result<Cart, RepositoryError> {
        self.mutate(Cart::clear)
    }

    fn mutate(&self, apply: impl FnOnce(&mut Cart)) -> Result<Cart, RepositoryError> {
        let mut cart = self.carts.load()?;
        apply(&mut cart);
        self.carts.save(&cart)?;
        Ok(cart)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use feira_core::Category;
    use rust_decimal::Decimal;

    use super::*;
    use crate::repo::MenuItemRepository;
    use crate::store::MemoryStore;

    fn pastel() -> MenuItem {
        MenuItem::new("Pastel", "", Decimal::new(85, 1), "", Category::Food)
    }

    #[test]
    fn test_add_persists_across_service_instances() {
        let store = MemoryStore::new();
        let item = pastel();

        CartService::new(&store).add(item.clone(), 2).unwrap();

        let cart = CartService::new(&store).cart().unwrap();
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.lines().first().unwrap().item.id, item.id);
    }

    #[test]
    fn test_add_merges_lines_for_the_same_item() {
        let store = MemoryStore::new();
        let service = CartService::new(&store);
        let item = pastel();

        service.add(item.clone(), 1).unwrap();
        let cart = service.add(item, 2).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_set_quantity_zero_removes_the_line() {
        let store = MemoryStore::new();
        let service = CartService::new(&store);
        let item = pastel();
        service.add(item.clone(), 2).unwrap();

        let cart = service.set_quantity(&item.id, 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_snapshot_pricing_ignores_later_catalog_edits() {
        let store = MemoryStore::new();
        let catalog = MenuItemRepository::new(&store);
        let mut item = pastel();
        catalog.add(&item).unwrap();

        let service = CartService::new(&store);
        service.add(item.clone(), 2).unwrap();

        item.price = Decimal::new(200, 1);
        catalog.update(&item).unwrap();

        let cart = service.cart().unwrap();
        assert_eq!(cart.total_amount(), Decimal::new(170, 1));
    }

    #[test]
    fn test_clear_leaves_an_empty_cart_behind() {
        let store = MemoryStore::new();
        let service = CartService::new(&store);
        service.add(pastel(), 3).unwrap();

        let cart = service.clear().unwrap();
        assert!(cart.is_empty());
        assert!(CartService::new(&store).cart().unwrap().is_empty());
    }
}
