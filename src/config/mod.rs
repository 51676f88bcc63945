// SPDX-License-Identifier: MPL-2.0
//! This module handles the overlay configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[player]` - Quiet period, poll interval, skip step
//! - `[feed]` - Companion content source and player page url
//! - `[features]` - Optional controls present on the host page
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Set `EMBED_CONTROLS_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use embed_controls::config;
//!
//! let (config, warning) = config::load_with_override(None);
//! if let Some(key) = warning {
//!     eprintln!("{key}");
//! }
//! println!("{:?}", config.player.quiet_period());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::video::{PollInterval, QuietPeriod, SkipStep};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "EmbedControls";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "EMBED_CONTROLS_CONFIG_DIR";

/// Default location of the companion content document.
pub const DEFAULT_FEED_SOURCE: &str = "video_data.json";

/// Default player page used to build related-video links.
pub const DEFAULT_PAGE_URL: &str = "http://localhost/player.html";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Player synchronization settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerConfig {
    /// Seconds of inactivity before the controls hide while playing.
    #[serde(default = "default_quiet_period_secs", skip_serializing_if = "Option::is_none")]
    pub quiet_period_secs: Option<u32>,

    /// Progress sampling period in milliseconds.
    #[serde(default = "default_poll_interval_ms", skip_serializing_if = "Option::is_none")]
    pub poll_interval_ms: Option<u64>,

    /// Seconds skipped by a double-activation on the video surface.
    #[serde(default = "default_skip_step_secs", skip_serializing_if = "Option::is_none")]
    pub skip_step_secs: Option<f64>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            quiet_period_secs: default_quiet_period_secs(),
            poll_interval_ms: default_poll_interval_ms(),
            skip_step_secs: default_skip_step_secs(),
        }
    }
}

impl PlayerConfig {
    #[must_use]
    pub fn quiet_period(&self) -> QuietPeriod {
        self.quiet_period_secs
            .map(QuietPeriod::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn poll_interval(&self) -> PollInterval {
        self.poll_interval_ms
            .map(PollInterval::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn skip_step(&self) -> SkipStep {
        self.skip_step_secs.map(SkipStep::new).unwrap_or_default()
    }
}

/// Companion content settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedConfig {
    /// Path or http(s) url of the content document.
    #[serde(default = "default_feed_source")]
    pub source: String,

    /// Player page url used as the base for related-video links.
    #[serde(default = "default_page_url")]
    pub page_url: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            source: default_feed_source(),
            page_url: default_page_url(),
        }
    }
}

/// Optional controls the host page provides.
///
/// A control missing from the page is disabled here; gestures targeting it
/// are logged and ignored instead of failing the page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureSet {
    #[serde(default = "enabled")]
    pub settings_menu: bool,
    #[serde(default = "enabled")]
    pub tabs: bool,
    #[serde(default = "enabled")]
    pub rating: bool,
    #[serde(default = "enabled")]
    pub fullscreen: bool,
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self {
            settings_menu: true,
            tabs: true,
            rating: true,
            fullscreen: true,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub player: PlayerConfig,

    #[serde(default)]
    pub feed: FeedConfig,

    #[serde(default)]
    pub features: FeatureSet,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_quiet_period_secs() -> Option<u32> {
    Some(DEFAULT_QUIET_PERIOD_SECS)
}

fn default_poll_interval_ms() -> Option<u64> {
    Some(DEFAULT_POLL_INTERVAL_MS)
}

fn default_skip_step_secs() -> Option<f64> {
    Some(DEFAULT_SKIP_STEP_SECS)
}

fn default_feed_source() -> String {
    DEFAULT_FEED_SOURCE.to_string()
}

fn default_page_url() -> String {
    DEFAULT_PAGE_URL.to_string()
}

fn enabled() -> bool {
    true
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honoring the explicit override first and
/// then the environment variable.
fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if base_dir.is_some() {
        return base_dir;
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from `base_dir`, or from the default directory.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring config at {}: {}", path.display(), err);
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
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            player: PlayerConfig {
                quiet_period_secs: Some(5),
                poll_interval_ms: Some(250),
                skip_step_secs: Some(15.0),
            },
            feed: FeedConfig {
                source: "https://example.com/video_data.json".to_string(),
                page_url: "https://example.com/player.html".to_string(),
            },
            features: FeatureSet {
                settings_menu: false,
                ..FeatureSet::default()
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

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[player\nbroken")
            .expect("failed to write config");

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
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[player]\nquiet_period_secs = 7\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.player.quiet_period_secs, Some(7));
        assert_eq!(loaded.player.poll_interval_ms, Some(DEFAULT_POLL_INTERVAL_MS));
        assert_eq!(loaded.feed.source, DEFAULT_FEED_SOURCE);
        assert!(loaded.features.rating);
    }

    #[test]
    fn player_config_clamps_out_of_range_values() {
        let player = PlayerConfig {
            quiet_period_secs: Some(0),
            poll_interval_ms: Some(1),
            skip_step_secs: Some(1_000.0),
        };
        assert_eq!(player.quiet_period().value(), MIN_QUIET_PERIOD_SECS);
        assert_eq!(player.poll_interval().value(), MIN_POLL_INTERVAL_MS);
        assert_eq!(player.skip_step().value(), MAX_SKIP_STEP_SECS);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
