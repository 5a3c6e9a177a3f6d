//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{APP_NAME, DEFAULT_BACKGROUND_COLOR, DEFAULT_TEXT_COLOR};
use crate::models::RgbColor;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Export output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory the exported `card.png` is written into.
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        // Downloads directory when the platform has one, current dir otherwise
        let output_dir = dirs::download_dir().unwrap_or_else(|| PathBuf::from("."));
        Self { output_dir }
    }
}

/// Default card colors applied when the screen mounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    /// Default caption text color (hex).
    pub text_color: String,
    /// Default card background color (hex).
    pub background_color: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }
}

impl CardConfig {
    /// Parses the configured text color.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored value is not a valid hex color.
    pub fn text_color(&self) -> Result<RgbColor> {
        RgbColor::from_hex(&self.text_color).context("Invalid card.text_color in config")
    }

    /// Parses the configured background color.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored value is not a valid hex color.
    pub fn background_color(&self) -> Result<RgbColor> {
        RgbColor::from_hex(&self.background_color).context("Invalid card.background_color in config")
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/makecard/config.toml`
/// - macOS: `~/Library/Application Support/makecard/config.toml`
/// - Windows: `%APPDATA%\makecard\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Export output settings
    #[serde(default)]
    pub export: ExportConfig,
    /// Default card colors
    #[serde(default)]
    pub card: CardConfig,
}

impl Config {
    /// Gets the platform-specific configuration directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be determined.
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join(APP_NAME))
    }

    /// Gets the configuration file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be determined.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Checks whether a configuration file exists.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file().map(|p| p.exists()).unwrap_or(false)
    }

    /// Loads the configuration, falling back to defaults when the file is
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::config_file()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Saves the configuration to the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let path = Self::config_file()?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_card_colors_parse() {
        let config = Config::default();
        assert_eq!(config.card.text_color().unwrap(), RgbColor::new(255, 255, 255));
        assert_eq!(
            config.card.background_color().unwrap(),
            RgbColor::new(11, 14, 17)
        );
    }

    #[test]
    fn test_invalid_color_rejected() {
        let card = CardConfig {
            text_color: "not-a-color".to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        };
        assert!(card.text_color().is_err());
        assert!(card.background_color().is_ok());
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: Config = toml::from_str("[ui]\ntheme_mode = \"Dark\"\n").unwrap();
        assert_eq!(parsed.ui.theme_mode, ThemeMode::Dark);
        assert_eq!(parsed.card, CardConfig::default());
    }
}
