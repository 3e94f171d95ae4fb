//! Configuration file management
//!
//! Loads TOML configuration files and provides application settings.
//! Default config path: ~/.config/textcon/config.toml

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display settings
    pub display: DisplayConfig,
    /// Font settings
    pub font: FontConfig,
    /// Chart output settings
    pub chart: ChartConfig,
}

/// Display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// BIOS text mode number for the rendering surface (0, 1, 2, 3, 7)
    pub mode: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { mode: 0x03 }
    }
}

/// Font settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Built-in font name (selects by cell size if empty)
    pub name: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
        }
    }
}

/// Chart output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Label chart rows and columns with hex digits
    pub hex_labels: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self { hex_labels: true }
    }
}

impl Config {
    /// Config file path (~/.config/textcon/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("textcon").join("config.toml"))
    }

    /// Load settings from the default path, falling back to built-in
    /// defaults when the file is missing or malformed.
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => {
                        info!("Loaded config: {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        warn!("Failed to load config {}: {}", path.display(), e);
                    }
                }
            }
        }
        info!("Using built-in default config");
        Self::default()
    }

    fn load_from_file(path: &PathBuf) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self =
            toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Write the default settings to the config path, creating parent
    /// directories as needed. Returns the path written.
    pub fn write_default_config() -> Result<PathBuf> {
        let path = Self::config_path().context("no user config directory")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let text =
            toml::to_string_pretty(&Self::default()).context("serializing default config")?;
        std::fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.display.mode, 0x03);
        assert!(config.font.name.is_empty());
        assert!(config.chart.hex_labels);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config = toml::from_str("[display]\nmode = 7\n").unwrap();
        assert_eq!(config.display.mode, 0x07);
        assert!(config.chart.hex_labels);
    }

    #[test]
    fn default_config_round_trips() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let config: Config = toml::from_str(&text).unwrap();
        assert_eq!(config.display.mode, Config::default().display.mode);
    }
}
