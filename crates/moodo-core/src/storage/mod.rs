pub mod config;
pub mod database;
pub mod migrations;

pub use config::Config;
pub use database::Database;

use std::path::PathBuf;

/// Returns `~/.config/moodo[-dev]/` based on MOODO_ENV.
///
/// Set MOODO_ENV=dev to use the development data directory, or
/// MOODO_DATA_DIR to point somewhere else entirely (tests use this).
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(dir) = std::env::var("MOODO_DATA_DIR") {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("MOODO_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("moodo-dev")
    } else {
        base_dir.join("moodo")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
