// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[contact]` - Recipient address and submission timing
//! - `[gallery]` - Gallery grid layout
//! - `[assets]` - Image directory and remote fetching
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set the `ICED_FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("fr".to_string());
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
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

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

/// Contact form settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactConfig {
    /// Address used in the generated `mailto:` link.
    #[serde(default = "default_recipient", skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    /// Delay before the mail client opens (milliseconds).
    #[serde(
        default = "default_submit_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub submit_delay_ms: Option<u64>,

    /// Time the success banner stays visible (seconds).
    #[serde(
        default = "default_success_reset_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub success_reset_secs: Option<u64>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: default_recipient(),
            submit_delay_ms: default_submit_delay_ms(),
            success_reset_secs: default_success_reset_secs(),
        }
    }
}

impl ContactConfig {
    /// Recipient address, falling back to the default for blank values.
    #[must_use]
    pub fn recipient(&self) -> &str {
        self.recipient
            .as_deref()
            .map(str::trim)
            .filter(|address| !address.is_empty())
            .unwrap_or(DEFAULT_CONTACT_RECIPIENT)
    }

    #[must_use]
    pub fn submit_delay(&self) -> Duration {
        let millis = self
            .submit_delay_ms
            .unwrap_or(DEFAULT_SUBMIT_DELAY_MS)
            .min(MAX_SUBMIT_DELAY_MS);
        Duration::from_millis(millis)
    }

    #[must_use]
    pub fn success_reset(&self) -> Duration {
        let secs = self
            .success_reset_secs
            .unwrap_or(DEFAULT_SUCCESS_RESET_SECS)
            .clamp(MIN_SUCCESS_RESET_SECS, MAX_SUCCESS_RESET_SECS);
        Duration::from_secs(secs)
    }
}

/// Gallery layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Tiles per row.
    #[serde(default = "default_columns", skip_serializing_if = "Option::is_none")]
    pub columns: Option<u16>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
        }
    }
}

impl GalleryConfig {
    #[must_use]
    pub fn columns(&self) -> u16 {
        self.columns
            .unwrap_or(DEFAULT_GALLERY_COLUMNS)
            .clamp(MIN_GALLERY_COLUMNS, MAX_GALLERY_COLUMNS)
    }
}

/// Image loading settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetsConfig {
    /// Directory that local image references resolve against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_dir: Option<PathBuf>,

    /// Whether remote images are fetched at all.
    #[serde(
        default = "default_fetch_remote",
        skip_serializing_if = "Option::is_none"
    )]
    pub fetch_remote: Option<bool>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            image_dir: None,
            fetch_remote: default_fetch_remote(),
        }
    }
}

impl AssetsConfig {
    #[must_use]
    pub fn image_dir(&self) -> PathBuf {
        self.image_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGE_DIR))
    }

    #[must_use]
    pub fn fetch_remote(&self) -> bool {
        self.fetch_remote.unwrap_or(DEFAULT_FETCH_REMOTE)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub assets: AssetsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_recipient() -> Option<String> {
    Some(DEFAULT_CONTACT_RECIPIENT.to_string())
}

fn default_submit_delay_ms() -> Option<u64> {
    Some(DEFAULT_SUBMIT_DELAY_MS)
}

fn default_success_reset_secs() -> Option<u64> {
    Some(DEFAULT_SUCCESS_RESET_SECS)
}

fn default_columns() -> Option<u16> {
    Some(DEFAULT_GALLERY_COLUMNS)
}

fn default_fetch_remote() -> Option<bool> {
    Some(DEFAULT_FETCH_REMOTE)
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
/// default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    log::info!("loaded settings from {}", path.display());
                    return (config, None);
                }
                Err(err) => {
                    log::warn!("ignoring {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
        log::debug!("no settings at {}, using defaults", path.display());
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
