//! Core types for Feira.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod email;
pub mod id;
pub mod money;
pub mod phone;
pub mod status;

pub use category::Category;
pub use email::{Email, EmailError};
pub use id::*;
pub use money::{format_brl, two_decimals};
pub use phone::{Phone, PhoneError};
pub use status::{OrderStatus, PaymentMethod};
