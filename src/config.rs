//! Application configuration
//!
//! Loads config from ~/.config/linkdeck/config.toml with sensible defaults.
//! Any read or parse failure falls back to defaults without interrupting
//! startup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Catalog theme applied to pages that have no stored appearance
    pub default_theme: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_theme: "Default".to_string(),
        }
    }
}

/// Storage settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Override for the page file location (default: data dir)
    pub path: Option<PathBuf>,
}

/// Preview export settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PreviewConfig {
    /// Override for where the preview page is written
    pub output: Option<PathBuf>,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub storage: StorageConfig,
    pub preview: PreviewConfig,
}

impl Config {
    /// Get the config directory path (~/.config/linkdeck)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("linkdeck"))
    }

    /// Get the config file path (~/.config/linkdeck/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load config from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            log::info!("Could not determine config path, using defaults");
            return Self::default();
        };

        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse config {:?}: {}, using defaults", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Failed to read config {:?}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Where the preview page is written
    pub fn preview_output(&self) -> PathBuf {
        self.preview
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from("preview.html"))
    }
}
