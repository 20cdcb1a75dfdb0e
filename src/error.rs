use cgrid::GridError;
use thiserror::Error;

use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
