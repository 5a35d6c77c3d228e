//! Payment payload encoders.
//!
//! PIX is the only arrangement today. Card payments settle at the counter
//! machine and never need a payload.

pub mod pix;

pub use pix::{PixError, payload};
