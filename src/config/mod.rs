// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Theme mode
//! - `[form]` - Message length cap and attachment size limit
//! - `[submission]` - Simulated backend delay and success rate
//! - `[notifications]` - Outcome notice display window
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `FEEDBACK_FORM_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use feedback_form::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let delay = config.submission.delay();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
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
            theme_mode: default_theme_mode(),
        }
    }
}

/// Form input limits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormConfig {
    /// Maximum characters in the message field.
    #[serde(
        default = "default_message_max_chars",
        skip_serializing_if = "Option::is_none"
    )]
    pub message_max_chars: Option<usize>,

    /// Largest attachment accepted, in bytes.
    #[serde(
        default = "default_max_attachment_bytes",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_attachment_bytes: Option<u64>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            message_max_chars: default_message_max_chars(),
            max_attachment_bytes: default_max_attachment_bytes(),
        }
    }
}

impl FormConfig {
    /// Message cap, kept within `1..=MAX_MESSAGE_MAX_CHARS`.
    #[must_use]
    pub fn message_max_chars(&self) -> usize {
        self.message_max_chars
            .unwrap_or(DEFAULT_MESSAGE_MAX_CHARS)
            .clamp(1, MAX_MESSAGE_MAX_CHARS)
    }

    /// Attachment size limit in bytes.
    #[must_use]
    pub fn max_attachment_bytes(&self) -> u64 {
        self.max_attachment_bytes
            .unwrap_or(DEFAULT_MAX_ATTACHMENT_BYTES)
    }
}

/// Simulated backend settings.
///
/// Both values are placeholders for a real endpoint and keep the behavior of
/// the hard-coded mock by default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionConfig {
    /// Time the simulated call takes before answering (milliseconds).
    #[serde(
        default = "default_submission_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub delay_ms: Option<u64>,

    /// Probability (0.0 to 1.0) that a submission is accepted.
    #[serde(
        default = "default_success_rate",
        skip_serializing_if = "Option::is_none"
    )]
    pub success_rate: Option<f64>,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_submission_delay_ms(),
            success_rate: default_success_rate(),
        }
    }
}

impl SubmissionConfig {
    /// Simulated network delay, capped at `MAX_SUBMISSION_DELAY_MS`.
    #[must_use]
    pub fn delay(&self) -> Duration {
        let millis = self
            .delay_ms
            .unwrap_or(DEFAULT_SUBMISSION_DELAY_MS)
            .min(MAX_SUBMISSION_DELAY_MS);
        Duration::from_millis(millis)
    }

    /// Success probability clamped to `[0.0, 1.0]`. NaN falls back to the default.
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        let rate = self.success_rate.unwrap_or(DEFAULT_SUCCESS_RATE);
        if rate.is_nan() {
            DEFAULT_SUCCESS_RATE
        } else {
            rate.clamp(0.0, 1.0)
        }
    }
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// How long outcome notices stay visible (seconds).
    #[serde(
        default = "default_notice_display_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub display_secs: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            display_secs: default_notice_display_secs(),
        }
    }
}

impl NotificationsConfig {
    /// Notice display window, clamped to the supported range.
    #[must_use]
    pub fn display_duration(&self) -> Duration {
        let secs = self
            .display_secs
            .unwrap_or(DEFAULT_NOTICE_DISPLAY_SECS)
            .clamp(MIN_NOTICE_DISPLAY_SECS, MAX_NOTICE_DISPLAY_SECS);
        Duration::from_secs(secs)
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

    /// Form input limits.
    #[serde(default)]
    pub form: FormConfig,

    /// Simulated backend settings.
    #[serde(default)]
    pub submission: SubmissionConfig,

    /// Toast notification settings.
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_message_max_chars() -> Option<usize> {
    Some(DEFAULT_MESSAGE_MAX_CHARS)
}

fn default_max_attachment_bytes() -> Option<u64> {
    Some(DEFAULT_MAX_ATTACHMENT_BYTES)
}

fn default_submission_delay_ms() -> Option<u64> {
    Some(DEFAULT_SUBMISSION_DELAY_MS)
}

fn default_success_rate() -> Option<f64> {
    Some(DEFAULT_SUCCESS_RATE)
}

fn default_notice_display_secs() -> Option<u64> {
    Some(DEFAULT_NOTICE_DISPLAY_SECS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<ThemeMode>().map_err(D::Error::custom)
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
/// default config with the message key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded configuration");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default configuration");
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
// Tests
// =============================================================================
