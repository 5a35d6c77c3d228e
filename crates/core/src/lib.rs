//! Feira Core - Shared types library.
//!
//! This crate provides common types used across all Feira components:
//! - `storefront` - Catalog, cart, checkout, payments and relay library
//! - `cli` - Command-line front end for running a stall
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no storage
//! access, no clocks. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, phones, money
//!   formatting and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
