//! Feira CLI - storefront management from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Prepare the data directory
//! feira init
//!
//! # Load the demo catalog and admin account
//! feira seed
//!
//! # Browse the menu and build a cart
//! feira menu list
//! feira cart add <item-id> -q 2
//!
//! # Place an order paid over PIX
//! feira checkout -n "Maria Silva" -p "(11) 91234-5678" -m pix
//!
//! # Manage orders
//! feira orders list
//! feira orders set-status <order-id> paid
//! ```
//!
//! # Commands
//!
//! - `init` - Create the data directory and empty collections
//! - `seed` - Load the demo catalog and admin account
//! - `menu` - List and manage menu items
//! - `cart` - Inspect and edit the cart
//! - `checkout` - Place an order from the current cart
//! - `orders` - List orders, update status, build relay links
//! - `events` - List and manage events
//! - `register` / `login` / `logout` / `whoami` - Accounts and sessions

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use feira_core::{Category, OrderStatus, PaymentMethod};
use feira_storefront::config::StorefrontConfig;
use feira_storefront::error::Result;
use feira_storefront::state::AppState;
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "feira")]
#[command(author, version, about = "Feira CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and empty collections
    Init,
    /// Load the demo catalog and admin account
    Seed,
    /// List and manage menu items
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },
    /// Inspect and edit the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place an order from the current cart
    Checkout {
        /// Customer name
        #[arg(short, long)]
        name: String,

        /// Customer phone number
        #[arg(short, long)]
        phone: String,

        /// Payment method (`pix`, `credit`, `debit`)
        #[arg(short, long, default_value = "pix")]
        method: PaymentMethod,

        /// Event the order belongs to
        #[arg(short, long)]
        event: Option<String>,
    },
    /// List orders, update status, build relay links
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// List and manage events
    Events {
        #[command(subcommand)]
        action: EventAction,
    },
    /// Create an account and log it in
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Phone number
        #[arg(short, long)]
        phone: String,

        /// Account password
        #[arg(long)]
        password: String,
    },
    /// Log in with email and password
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },
    /// End the current session
    Logout,
    /// Show the logged-in user
    Whoami,
}

#[derive(Subcommand)]
enum MenuAction {
    /// List menu items
    List {
        /// Only show items scoped to this event
        #[arg(short, long)]
        event: Option<String>,
    },
    /// Add a menu item
    Add {
        /// Item name
        #[arg(short, long)]
        name: String,

        /// Item description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Price in BRL, for example `8.50`
        #[arg(short, long)]
        price: Decimal,

        /// Image URL
        #[arg(short, long, default_value = "")]
        image_url: String,

        /// Category (`food`, `drinks`, `snacks`, `desserts`)
        #[arg(short, long, default_value = "food")]
        category: Category,

        /// Event the item belongs to
        #[arg(short, long)]
        event: Option<String>,
    },
    /// Remove a menu item
    Remove {
        /// Menu item id
        id: String,
    },
    /// Flip a menu item between available and unavailable
    Toggle {
        /// Menu item id
        id: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart contents and totals
    Show,
    /// Add a menu item to the cart
    Add {
        /// Menu item id
        id: String,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Pin a cart line to an exact quantity (0 removes it)
    Set {
        /// Menu item id
        id: String,

        /// New quantity
        #[arg(short, long)]
        quantity: u32,
    },
    /// Remove a line from the cart
    Remove {
        /// Menu item id
        id: String,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum OrderAction {
    /// List orders
    List {
        /// Only show orders for this event
        #[arg(short, long)]
        event: Option<String>,
    },
    /// Overwrite an order's status
    SetStatus {
        /// Order id
        id: String,

        /// New status (`pending`, `confirmed`, `paid`, `completed`)
        status: OrderStatus,
    },
    /// Print the WhatsApp link that relays an order to its organizer
    Relay {
        /// Order id
        id: String,
    },
    /// Confirm an order and print the customer notification link
    Confirm {
        /// Order id
        id: String,
    },
}

#[derive(Subcommand)]
enum EventAction {
    /// List events
    List {
        /// Include inactive events
        #[arg(short, long)]
        all: bool,
    },
    /// Create an event (requires login)
    Add {
        /// Event name
        #[arg(short, long)]
        name: String,

        /// Event description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Date and time, `YYYY-MM-DD HH:MM`
        #[arg(long)]
        date: String,

        /// Venue or address
        #[arg(short, long)]
        location: String,

        /// Image URL
        #[arg(short, long, default_value = "")]
        image_url: String,
    },
    /// Flip an event between active and inactive
    Toggle {
        /// Event id
        id: String,
    },
    /// Delete an event and its scoped menu items
    Remove {
        /// Event id
        id: String,
    },
}

fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = StorefrontConfig::from_env()?;
    let state = AppState::new(config)?;

    match cli.command {
        Commands::Init => commands::store::init(&state),
        Commands::Seed => commands::store::seed(&state),
        Commands::Menu { action } => match action {
            MenuAction::List { event } => commands::menu::list(&state, event.as_deref()),
            MenuAction::Add {
                name,
                description,
                price,
                image_url,
                category,
                event,
            } => commands::menu::add(
                &state,
                &name,
                &description,
                price,
                &image_url,
                category,
                event.as_deref(),
            ),
            MenuAction::Remove { id } => commands::menu::remove(&state, &id),
            MenuAction::Toggle { id } => commands::menu::toggle(&state, &id),
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&state),
            CartAction::Add { id, quantity } => commands::cart::add(&state, &id, quantity),
            CartAction::Set { id, quantity } => commands::cart::set(&state, &id, quantity),
            CartAction::Remove { id } => commands::cart::remove(&state, &id),
            CartAction::Clear => commands::cart::clear(&state),
        },
        Commands::Checkout {
            name,
            phone,
            method,
            event,
        } => commands::checkout::place(&state, &name, &phone, method, event.as_deref()),
        Commands::Orders { action } => match action {
            OrderAction::List { event } => commands::orders::list(&state, event.as_deref()),
            OrderAction::SetStatus { id, status } => {
                commands::orders::set_status(&state, &id, status)
            }
            OrderAction::Relay { id } => commands::orders::relay(&state, &id),
            OrderAction::Confirm { id } => commands::orders::confirm(&state, &id),
        },
        Commands::Events { action } => match action {
            EventAction::List { all } => commands::events::list(&state, all),
            EventAction::Add {
                name,
                description,
                date,
                location,
                image_url,
            } => commands::events::add(&state, &name, &description, &date, &location, &image_url),
            EventAction::Toggle { id } => commands::events::toggle(&state, &id),
            EventAction::Remove { id } => commands::events::remove(&state, &id),
        },
        Commands::Register {
            name,
            email,
            phone,
            password,
        } => commands::account::register(&state, &name, &email, &phone, &password),
        Commands::Login { email, password } => commands::account::login(&state, &email, &password),
        Commands::Logout => commands::account::logout(&state),
        Commands::Whoami => commands::account::whoami(&state),
    }
}
