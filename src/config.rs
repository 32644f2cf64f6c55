use crate::band::{self, BandRanges, EqBand};
use crate::constants;
use crate::options::ShowOptions;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "SWORD_EQ_CONFIG";
pub const CONFIG_FILE_NAME: &str = "sword-eq.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid gain range: min {min} dB must be below max {max} dB, at most 96 dB apart")]
    GainRange { min: f32, max: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
    pub show_eq_window: bool,
    pub bypass: bool,
    pub show_grid: bool,
    pub show_labels: bool,
    pub show_response_plot: bool,
    pub min_gain_db: f32,
    pub max_gain_db: f32,
    pub save_on_exit: bool,
    pub bands: Vec<EqBand>,
}

impl Default for Config {
    fn default() -> Self {
        let show_options = ShowOptions::default();
        Self {
            theme: Theme::default(),
            show_eq_window: true,
            bypass: show_options.bypass,
            show_grid: show_options.grid,
            show_labels: show_options.labels,
            show_response_plot: show_options.response_plot,
            min_gain_db: constants::MIN_GAIN_DB,
            max_gain_db: constants::MAX_GAIN_DB,
            save_on_exit: false,
            bands: band::default_bands(),
        }
    }
}

impl Config {
    pub fn default_path() -> PathBuf {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => PathBuf::from(CONFIG_FILE_NAME),
        }
    }

    /// Loads from the default path. A missing file gives the defaults, a
    /// broken one is reported and replaced by the defaults.
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(error) => {
                log::warn!("{error}; using defaults");
                Self::default()
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw).map_err(|error| match error {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            error => error,
        })
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validated()
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let raw = self.to_toml()?;
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, raw).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn ranges(&self) -> BandRanges {
        BandRanges::with_gain_range(self.min_gain_db, self.max_gain_db)
    }

    pub fn show_options(&self) -> ShowOptions {
        ShowOptions {
            bypass: self.bypass,
            grid: self.show_grid,
            labels: self.show_labels,
            response_plot: self.show_response_plot,
        }
    }

    pub fn set_show_options(&mut self, show_options: &ShowOptions) {
        self.bypass = show_options.bypass;
        self.show_grid = show_options.grid;
        self.show_labels = show_options.labels;
        self.show_response_plot = show_options.response_plot;
    }

    /// Rejects an empty, inverted or oversized gain range and clamps bands
    /// into range. Bands without a usable position are dropped, a broken Q
    /// falls back to the default.
    fn validated(mut self) -> Result<Self, ConfigError> {
        let span = self.max_gain_db - self.min_gain_db;
        if !self.min_gain_db.is_finite()
            || !self.max_gain_db.is_finite()
            || !(span > 0.0 && span <= constants::MAX_GAIN_SPAN_DB)
        {
            return Err(ConfigError::GainRange {
                min: self.min_gain_db,
                max: self.max_gain_db,
            });
        }
        let ranges = self.ranges();
        self.bands = self
            .bands
            .iter()
            .filter(|band| band.frequency.is_finite() && band.gain_db.is_finite())
            .map(|band| {
                let q = if band.q.is_finite() {
                    band.q
                } else {
                    constants::DEFAULT_Q
                };
                EqBand { q, ..*band }.clamped(&ranges)
            })
            .collect();
        Ok(self)
    }
}
