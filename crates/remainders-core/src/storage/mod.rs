pub mod database;

pub use database::{Database, KEY_BOX_SETTINGS, KEY_EVENTS, KEY_ORDER, KEY_THEME};

use std::path::PathBuf;

/// Returns `~/.config/remainders[-dev]/` based on REMAINDERS_ENV.
///
/// Set REMAINDERS_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("REMAINDERS_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("remainders-dev")
    } else {
        base_dir.join("remainders")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
