//! Integration tests for Feira.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p feira-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `canteen_flow` - Seed, cart, PIX checkout against a single store
//! - `marketplace_flow` - Accounts, events, scoped catalogs, order relay
//! - `persistence` - File-backed store reopen and corrupt-document recovery
//!
//! Tests run against in-process stores (in-memory or a temp directory), so
//! no external services are required.
