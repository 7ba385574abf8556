//! Application settings stored as TOML in the platform config directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Weekday;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::session::SessionRule;
use crate::services::ticker::TickerConfig;

pub const SETTINGS_FILE_NAME: &str = "settings.toml";
pub const DEFAULT_CATALOG_FILE_NAME: &str = "workshops.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("countdown_interval_secs must be at least 1")]
    ZeroCountdownInterval,
    #[error("status_interval_secs must be at least 1")]
    ZeroStatusInterval,
    #[error("could not determine a configuration directory for this platform")]
    NoConfigDir,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Occurrence catalog; relative paths resolve against the settings file's directory.
    pub catalog_path: Option<PathBuf>,
    pub countdown_interval_secs: u64,
    pub status_interval_secs: u64,
    pub session_weekday: Weekday,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            countdown_interval_secs: 1,
            status_interval_secs: 60,
            session_weekday: Weekday::Sun,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.countdown_interval_secs == 0 {
            return Err(SettingsError::ZeroCountdownInterval);
        }
        if self.status_interval_secs == 0 {
            return Err(SettingsError::ZeroStatusInterval);
        }
        Ok(())
    }

    pub fn ticker_config(&self) -> TickerConfig {
        TickerConfig {
            countdown_interval: Duration::from_secs(self.countdown_interval_secs),
            status_interval: Duration::from_secs(self.status_interval_secs),
        }
    }

    pub fn session_rule(&self) -> SessionRule {
        SessionRule::new(self.session_weekday)
    }

    /// Catalog location, falling back to `workshops.json` beside the settings.
    pub fn resolve_catalog_path(&self, base_dir: &Path) -> PathBuf {
        match &self.catalog_path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => base_dir.join(path),
            None => base_dir.join(DEFAULT_CATALOG_FILE_NAME),
        }
    }
}

/// Per-user configuration directory, e.g. `~/.config/workshop-countdown`.
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("org", "workshop", "workshop-countdown")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SettingsError::NoConfigDir.into())
}

pub fn default_settings_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(SETTINGS_FILE_NAME))
}

/// Reads and validates settings. A missing file yields the defaults.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        log::debug!("No settings at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings from {}", path.display()))?;
    let settings: Settings = toml::from_str(&data)
        .with_context(|| format!("failed to parse settings at {}", path.display()))?;
    settings
        .validate()
        .with_context(|| format!("invalid settings in {}", path.display()))?;

    Ok(settings)
}
