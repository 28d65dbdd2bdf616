use std::path::PathBuf;

use crate::config::Config;

/// Shared, read-only server state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub static_dir: PathBuf,
    pub default_viewport_width: u32,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            static_dir: config.static_dir.clone(),
            default_viewport_width: config.default_viewport_width,
        }
    }
}
