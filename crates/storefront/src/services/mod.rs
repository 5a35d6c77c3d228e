//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Registration, login, and the session seat
//! - `cart` - Cart operations (load, mutate, persist)
//! - `checkout` - Turning the active cart into an order
//! - `whatsapp` - Order relay messages and `wa.me` deep links
//!
//! Services borrow the store and are constructed per use; none of them hold
//! state of their own.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod whatsapp;

pub use auth::{AuthError, AuthService};
pub use cart::CartService;
pub use checkout::{CheckoutDetails, CheckoutError, CheckoutService};
pub use whatsapp::{RelayError, WhatsappRelay};
