//! Command implementations for the Feira CLI.

pub mod account;
pub mod cart;
pub mod checkout;
pub mod events;
pub mod menu;
pub mod orders;
pub mod store;
