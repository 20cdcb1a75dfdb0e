use std::{
    fs, io,
    path::{Path, PathBuf},
};

use cgrid::{Algorithm, DEFAULT_OPEN_PROBABILITY};
use log::{info, warn};
use ron::{extensions::Extensions, ser::PrettyConfig};
use serde::{Deserialize, Serialize};

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLUMNS: usize = 20;

/// Which searches a run performs, each one on its own freshly generated grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum AlgorithmChoice {
    Bfs,
    Dfs,
    #[default]
    Both,
}

impl AlgorithmChoice {
    pub fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmChoice::Bfs => vec![Algorithm::Bfs],
            AlgorithmChoice::Dfs => vec![Algorithm::Dfs],
            AlgorithmChoice::Both => Algorithm::ALL.to_vec(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load/save settings file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse settings file: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub rows: Option<usize>,
    #[serde(default)]
    pub columns: Option<usize>,
    #[serde(default)]
    pub open_probability: Option<f64>,
    #[serde(default)]
    pub algorithm: Option<AlgorithmChoice>,
    #[serde(default)]
    pub color: Option<bool>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn populate(mut self) -> Self {
        self.rows = Some(self.get_rows());
        self.columns = Some(self.get_columns());
        self.open_probability = Some(self.get_open_probability());
        self.algorithm = Some(self.get_algorithm());
        self.color = Some(self.get_color());

        self
    }

    pub fn set_rows(mut self, value: usize) -> Self {
        self.rows = Some(value);
        self
    }

    pub fn get_rows(&self) -> usize {
        self.rows.unwrap_or(DEFAULT_ROWS)
    }

    pub fn set_columns(mut self, value: usize) -> Self {
        self.columns = Some(value);
        self
    }

    pub fn get_columns(&self) -> usize {
        self.columns.unwrap_or(DEFAULT_COLUMNS)
    }

    pub fn set_open_probability(mut self, value: f64) -> Self {
        self.open_probability = Some(value);
        self
    }

    pub fn get_open_probability(&self) -> f64 {
        self.open_probability.unwrap_or(DEFAULT_OPEN_PROBABILITY)
    }

    pub fn set_algorithm(mut self, value: AlgorithmChoice) -> Self {
        self.algorithm = Some(value);
        self
    }

    pub fn get_algorithm(&self) -> AlgorithmChoice {
        self.algorithm.unwrap_or_default()
    }

    pub fn set_color(mut self, value: bool) -> Self {
        self.color = Some(value);
        self
    }

    pub fn get_color(&self) -> bool {
        self.color.unwrap_or(true)
    }

    pub fn set_seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn default_path() -> PathBuf {
        crate::base_path().join("settings.ron")
    }

    fn options() -> ron::Options {
        ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
    }

    /// Reads the settings, a missing file is created with the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(settings_string) => Ok(Self::options().from_str(&settings_string)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!("no settings at {:?}, creating default", path);
                if let Err(err) = Self::write_default(path) {
                    warn!("could not create settings file {:?}: {}", path, err);
                }
                Ok(Self::options().from_str(DEFAULT_SETTINGS)?)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let text = Self::options().to_string_pretty(self, PrettyConfig::default())?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, text)?;
        Ok(())
    }

    pub fn reset_config(path: &Path) -> Result<(), SettingsError> {
        Self::write_default(path)
    }

    fn write_default(path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}
