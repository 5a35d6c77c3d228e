//! Domain models for the storefront collections.
//!
//! Every model serializes with camelCase field names; the serialized shape
//! is the storage contract shared with the web front end, so renaming a
//! field here is a data migration.

pub mod cart;
pub mod event;
pub mod menu_item;
pub mod order;
pub mod user;

pub use cart::{Cart, CartLine};
pub use event::Event;
pub use menu_item::MenuItem;
pub use order::Order;
pub use user::{Registration, User};
