mod config;
mod state;

pub use config::Config;
pub use state::SessionStore;

use std::path::PathBuf;

/// Returns `~/.config/souschef[-dev]/` based on SOUSCHEF_ENV.
///
/// Set SOUSCHEF_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("SOUSCHEF_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("souschef-dev")
    } else {
        base_dir.join("souschef")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
