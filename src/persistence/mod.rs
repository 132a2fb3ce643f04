pub mod config;
pub mod scene;

use std::path::PathBuf;

/// Get or create the vectorgl config directory (~/.config/vectorgl/).
pub fn config_dir() -> Option<PathBuf> {
    let dir = dirs::config_dir()?.join("vectorgl");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}
