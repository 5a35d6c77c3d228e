//! Store bootstrap commands.
//!
//! # Usage
//!
//! ```bash
//! # Create the data directory and empty collections
//! feira init
//!
//! # Load the demo catalog and admin account
//! feira seed
//! ```
//!
//! # Environment Variables
//!
//! - `FEIRA_DATA_DIR` - Directory holding the JSON documents (default `data`)

use feira_storefront::error::Result;
use feira_storefront::seed;
use feira_storefront::state::AppState;

/// Report where the store lives. Empty collections are written on startup,
/// so by the time this runs the directory is ready.
pub fn init(state: &AppState) -> Result<()> {
    tracing::info!(
        "Store initialized at {}",
        state.config().data_dir.display()
    );
    Ok(())
}

/// Load the demo catalog and admin account into an empty store.
pub fn seed(state: &AppState) -> Result<()> {
    let summary = seed::demo_data(state.store())?;
    if summary.menu_items == 0 && summary.users == 0 {
        tracing::info!("Nothing to seed, store already has data");
    }
    Ok(())
}
