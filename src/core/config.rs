//! core/config.rs
//! User configuration (JSON).
//!
//! Lookup order:
//! - `$ARTIFACTUAL_CONFIG` if set
//! - `<config dir>/artifactual/config.json`
//!
//! Every field has a default, so a partial file is fine and a missing file
//! means "all defaults".

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::error::ConfigError;

pub const CONFIG_ENV: &str = "ARTIFACTUAL_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Peak opacity of the status symbol (0.0..=1.0).
    pub checkmark_opacity: f32,
    /// Fade-in / fade-out length, milliseconds.
    pub animation_ms: u64,
    /// Status symbol edge, pixels.
    pub status_size: u32,
    pub drop_area_height: f32,
    pub window_width: f32,
    pub window_height: f32,
    /// Folder holding check.gif and the icons.
    pub assets_dir: PathBuf,
    pub fetch_timeout_secs: u64,
    pub theme: ThemeChoice,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            checkmark_opacity: 0.95,
            animation_ms: 650,
            status_size: 64,
            drop_area_height: 400.0,
            window_width: 800.0,
            window_height: 600.0,
            assets_dir: PathBuf::from("_res"),
            fetch_timeout_secs: 30,
            theme: ThemeChoice::Dark,
        }
    }
}

impl Config {
    pub fn animation_length(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Where the config file is expected (it may not exist).
    pub fn default_path() -> Option<PathBuf> {
        if let Some(p) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(p));
        }
        dirs::config_dir().map(|d| d.join("artifactual").join("config.json"))
    }

    /// Ok(None) when the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Option<Config>, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut config: Config =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        config.checkmark_opacity = config.checkmark_opacity.clamp(0.0, 1.0);
        Ok(Some(config))
    }

    /// Never fails: problems are logged and defaults are used.
    pub fn load() -> Config {
        let Some(path) = Self::default_path() else {
            log::debug!("no config directory; using defaults");
            return Config::default();
        };

        match Self::load_from(&path) {
            Ok(Some(config)) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Ok(None) => Config::default(),
            Err(e) => {
                log::warn!("{e}; using defaults");
                Config::default()
            }
        }
    }
}
