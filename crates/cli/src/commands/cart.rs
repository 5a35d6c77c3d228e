//! Cart inspection and editing commands.
//!
//! # Usage
//!
//! ```bash
//! # Show the cart
//! feira cart show
//!
//! # Add two units of an item
//! feira cart add <item-id> -q 2
//!
//! # Pin a line to an exact quantity (0 removes it)
//! feira cart set <item-id> -q 5
//!
//! # Start over
//! feira cart clear
//! ```

use feira_core::{MenuItemId, format_brl};
use feira_storefront::error::{AppError, Result};
use feira_storefront::repo::MenuItemRepository;
use feira_storefront::services::CartService;
use feira_storefront::state::AppState;

/// Print the cart lines and totals.
pub fn show(state: &AppState) -> Result<()> {
    let cart = CartService::new(state.store()).cart()?;

    if cart.is_empty() {
        tracing::info!("Cart is empty");
        return Ok(());
    }

    for line in cart.lines() {
        tracing::info!(
            quantity = line.quantity,
            subtotal = %format_brl(line.subtotal()),
            "{}",
            line.item.name
        );
    }
    tracing::info!(
        items = cart.total_items(),
        total = %format_brl(cart.total_amount()),
        "Cart total"
    );
    Ok(())
}

/// Add a menu item to the cart. Unavailable items are rejected.
pub fn add(state: &AppState, id: &str, quantity: u32) -> Result<()> {
    let item = MenuItemRepository::new(state.store())
        .get(&MenuItemId::new(id))?
        .ok_or_else(|| AppError::NotFound(format!("menu item {id}")))?;

    if !item.available {
        return Err(AppError::InvalidInput(format!(
            "menu item {id} is not available"
        )));
    }

    let name = item.name.clone();
    let cart = CartService::new(state.store()).add(item, quantity)?;
    tracing::info!(items = cart.total_items(), "Added {name} to cart");
    Ok(())
}

/// Pin a cart line to an exact quantity.
pub fn set(state: &AppState, id: &str, quantity: u32) -> Result<()> {
    let cart = CartService::new(state.store()).set_quantity(&MenuItemId::new(id), quantity)?;
    tracing::info!(
        items = cart.total_items(),
        total = %format_brl(cart.total_amount()),
        "Updated cart"
    );
    Ok(())
}

/// Remove a line from the cart.
pub fn remove(state: &AppState, id: &str) -> Result<()> {
    let cart = CartService::new(state.store()).remove(&MenuItemId::new(id))?;
    tracing::info!(items = cart.total_items(), "Removed item from cart");
    Ok(())
}

/// Empty the cart.
pub fn clear(state: &AppState) -> Result<()> {
    CartService::new(state.store()).clear()?;
    tracing::info!("Cart cleared");
    Ok(())
}
