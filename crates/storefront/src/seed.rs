//! Demo data for a first run.
//!
//! A small canteen catalog plus one admin account, enough to click through
//! the whole flow without setting anything up. Seeding is explicit (the
//! `seed` command) and never touches a collection that already has records.

use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;

use feira_core::{Category, Email, Phone, UserId};

use crate::models::{MenuItem, User};
use crate::repo::{MenuItemRepository, RepositoryError, UserRepository};
use crate::store::Store;

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Repository/store error.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// A built-in demo record failed validation.
    #[error("invalid demo record: {0}")]
    InvalidRecord(String),
}

/// What [`demo_data`] ended up inserting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub menu_items: usize,
    pub users: usize,
}

/// Insert the demo catalog and admin account.
///
/// Collections that already hold records are left alone, so seeding twice,
/// or seeding a live store, changes nothing.
///
/// # Errors
///
/// Returns `SeedError::Repository` if the store fails.
pub fn demo_data(store: &dyn Store) -> Result<SeedSummary, SeedError> {
    let mut summary = SeedSummary {
        menu_items: 0,
        users: 0,
    };

    let items = MenuItemRepository::new(store);
    if items.list()?.is_empty() {
        for item in demo_menu() {
            items.add(&item)?;
            summary.menu_items += 1;
        }
    }

    let users = UserRepository::new(store);
    if users.list()?.is_empty() {
        users.add(&admin_account()?)?;
        summary.users = 1;
    }

    tracing::info!(
        menu_items = summary.menu_items,
        users = summary.users,
        "seeded demo data"
    );
    Ok(summary)
}

fn demo_menu() -> Vec<MenuItem> {
    vec![
        demo_item(
            "Pastel de Queijo",
            "Delicioso pastel recheado com queijo derretido",
            Decimal::new(85, 1),
            4_553_111,
            Category::Food,
        ),
        demo_item(
            "Caldo de Mandioca",
            "Caldo quente de mandioca com carne e temperos",
            Decimal::new(12, 0),
            539_451,
            Category::Food,
        ),
        demo_item(
            "Refrigerante",
            "Lata de refrigerante gelado",
            Decimal::new(5, 0),
            2_983_100,
            Category::Drinks,
        ),
        demo_item(
            "Água",
            "Garrafa de água mineral",
            Decimal::new(3, 0),
            327_090,
            Category::Drinks,
        ),
        demo_item(
            "Pé de Moleque",
            "Doce tradicional de amendoim",
            Decimal::new(45, 1),
            1_028_714,
            Category::Desserts,
        ),
        demo_item(
            "Cachorro Quente",
            "Cachorro quente completo com molhos",
            Decimal::new(10, 0),
            3_023_479,
            Category::Food,
        ),
    ]
}

fn demo_item(
    name: &str,
    description: &str,
    price: Decimal,
    photo: u64,
    category: Category,
) -> MenuItem {
    let image_url = format!("https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg");
    MenuItem::new(name, description, price, image_url, category)
}

fn admin_account() -> Result<User, SeedError> {
    let email = Email::parse("admin@example.com")
        .map_err(|e| SeedError::InvalidRecord(format!("admin email: {e}")))?;
    let phone = Phone::parse("(11) 99999-9999")
        .map_err(|e| SeedError::InvalidRecord(format!("admin phone: {e}")))?;

    Ok(User {
        id: UserId::generate(),
        name: "admin".to_owned(),
        email,
        phone,
        password: "admin123".to_owned(),
        is_admin: true,
        created_at: Utc::now(),
    })
}
