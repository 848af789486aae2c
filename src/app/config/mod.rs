// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[slider]` - Divider handle appearance and keyboard step
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_COMPARE_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_compare::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Comparison slider settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SliderConfig {
    /// Radius of the round drag handle in logical pixels.
    #[serde(
        default = "default_handle_radius",
        skip_serializing_if = "Option::is_none"
    )]
    pub handle_radius: Option<f32>,

    /// Width of the divider line in logical pixels.
    #[serde(default = "default_line_width", skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f32>,

    /// Whether the "Before"/"After" labels are drawn over the images.
    #[serde(default = "default_show_labels", skip_serializing_if = "Option::is_none")]
    pub show_labels: Option<bool>,

    /// Arrow-key step in percentage points.
    #[serde(
        default = "default_keyboard_step",
        skip_serializing_if = "Option::is_none"
    )]
    pub keyboard_step: Option<f32>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            handle_radius: default_handle_radius(),
            line_width: default_line_width(),
            show_labels: default_show_labels(),
            keyboard_step: default_keyboard_step(),
        }
    }
}

impl SliderConfig {
    /// Resolves optional values against defaults and clamps them to their
    /// supported ranges, so a hand-edited file cannot request a nonsensical
    /// handle or step.
    #[must_use]
    pub fn resolve(&self) -> SliderSettings {
        SliderSettings {
            handle_radius: clamp_or(
                self.handle_radius,
                DEFAULT_HANDLE_RADIUS,
                MIN_HANDLE_RADIUS,
                MAX_HANDLE_RADIUS,
            ),
            line_width: clamp_or(
                self.line_width,
                DEFAULT_LINE_WIDTH,
                MIN_LINE_WIDTH,
                MAX_LINE_WIDTH,
            ),
            show_labels: self.show_labels.unwrap_or(true),
            keyboard_step: clamp_or(
                self.keyboard_step,
                DEFAULT_KEYBOARD_STEP_PERCENT,
                MIN_KEYBOARD_STEP_PERCENT,
                MAX_KEYBOARD_STEP_PERCENT,
            ),
        }
    }
}

/// Effective slider settings after defaults and clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSettings {
    pub handle_radius: f32,
    pub line_width: f32,
    pub show_labels: bool,
    pub keyboard_step: f32,
}

impl Default for SliderSettings {
    fn default() -> Self {
        SliderConfig::default().resolve()
    }
}

fn clamp_or(value: Option<f32>, default: f32, min: f32, max: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() => v.clamp(min, max),
        _ => default,
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Comparison slider settings.
    #[serde(default)]
    pub slider: SliderConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_handle_radius() -> Option<f32> {
    Some(DEFAULT_HANDLE_RADIUS)
}

fn default_line_width() -> Option<f32> {
    Some(DEFAULT_LINE_WIDTH)
}

fn default_show_labels() -> Option<bool> {
    Some(true)
}

fn default_keyboard_step() -> Option<f32> {
    Some(DEFAULT_KEYBOARD_STEP_PERCENT)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            slider: SliderConfig {
                handle_radius: Some(24.0),
                line_width: Some(2.0),
                show_labels: Some(false),
                keyboard_step: Some(2.5),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[slider\nbroken")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").expect("write config");

        let loaded = load_from_path(&config_path).expect("load config");
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
        assert_eq!(loaded.slider, SliderConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse config");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);

        let invalid = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(invalid.is_err());
    }

    #[test]
    fn save_with_override_writes_into_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn resolve_clamps_out_of_range_values() {
        let slider = SliderConfig {
            handle_radius: Some(500.0),
            line_width: Some(0.0),
            show_labels: None,
            keyboard_step: Some(f32::NAN),
        };
        let settings = slider.resolve();
        assert_eq!(settings.handle_radius, MAX_HANDLE_RADIUS);
        assert_eq!(settings.line_width, MIN_LINE_WIDTH);
        assert!(settings.show_labels);
        assert_eq!(settings.keyboard_step, DEFAULT_KEYBOARD_STEP_PERCENT);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert!(config.general.language.is_none());
        let settings = config.slider.resolve();
        assert_eq!(settings.handle_radius, DEFAULT_HANDLE_RADIUS);
        assert_eq!(settings.line_width, DEFAULT_LINE_WIDTH);
        assert_eq!(settings.keyboard_step, DEFAULT_KEYBOARD_STEP_PERCENT);
    }
}
