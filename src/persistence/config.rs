use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::plot::types::{Viewport, PLOT_HEIGHT, PLOT_WIDTH};

/// File name used when `generate` is given no output path.
pub const DEFAULT_OUTPUT_FILE: &str = "freeglut_drawing.cpp";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Where `generate` writes the program.
    pub output_file: String,
    /// Viewport for new scenes.
    pub viewport: Viewport,
    /// Preview PNG size in pixels.
    pub preview_width: u32,
    pub preview_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            viewport: Viewport::default(),
            preview_width: PLOT_WIDTH,
            preview_height: PLOT_HEIGHT,
        }
    }
}

/// Path to the config file.
pub fn config_path() -> Option<PathBuf> {
    Some(super::config_dir()?.join("config.toml"))
}

/// Load config from disk, returning defaults if file doesn't exist or is invalid.
pub fn load_config() -> Config {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Config::default(),
    }
}

/// Load from an explicit path; a missing file is created with defaults.
pub fn load_config_from(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring invalid config {}: {}", path.display(), e);
                Config::default()
            }
        },
        Err(_) => {
            // Create default config file on first run
            let config = Config::default();
            match write_default_config(path, &config) {
                Ok(()) => debug!("wrote default config to {}", path.display()),
                Err(e) => warn!("{}", e),
            }
            config
        }
    }
}

/// Write a default config file with comments.
fn write_default_config(path: &Path, config: &Config) -> Result<(), String> {
    let content = format!(
        "# vectorgl configuration\n\
         \n\
         # File written by `vectorgl generate` when no -o is given\n\
         output_file = \"{}\"\n\
         \n\
         # Preview image size in pixels\n\
         preview_width = {}\n\
         preview_height = {}\n\
         \n\
         # Plotting window for newly created scenes\n\
         [viewport]\n\
         x_min = {:.1}\n\
         x_max = {:.1}\n\
         y_min = {:.1}\n\
         y_max = {:.1}\n",
        config.output_file,
        config.preview_width,
        config.preview_height,
        config.viewport.x_min,
        config.viewport.x_max,
        config.viewport.y_min,
        config.viewport.y_max,
    );
    std::fs::write(path, content.as_bytes())
        .map_err(|e| format!("write error {}: {}", path.display(), e))
}
