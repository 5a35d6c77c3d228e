//! Feira Storefront library.
//!
//! The storefront core for small-vendor events: catalog, cart, checkout,
//! PIX payment payloads and WhatsApp order relay, backed by a pluggable
//! document store. Front ends (web UI, CLI) call into this crate and
//! render the results; nothing here draws a screen or opens a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod models;
pub mod payments;
pub mod repo;
pub mod seed;
pub mod services;
pub mod state;
pub mod store;
