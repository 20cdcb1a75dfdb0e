pub mod app;
pub mod error;
pub mod logging;
pub mod renderer;
pub mod settings;

use std::path::PathBuf;

use dirs::preference_dir;

pub fn base_path() -> PathBuf {
    preference_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gridmaze")
}
