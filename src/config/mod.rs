// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use pitlane::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.api_url = Some("https://api.pitlane.example".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

mod defaults;

pub use defaults::{
    DEFAULT_API_URL, DEFAULT_TOAST_DURATION_MS, MAX_TOASTS, PIT_TOAST_DURATION_MS,
};

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Backend base URL. Falls back to [`DEFAULT_API_URL`] when unset.
    pub api_url: Option<String>,
    /// Default toast auto-dismiss duration in milliseconds.
    #[serde(default)]
    pub toast_duration_ms: Option<u64>,
    /// Enables the richer toast profile (optional title line).
    #[serde(default)]
    pub rich_toasts: Option<bool>,
}

impl Config {
    /// Returns the effective backend base URL.
    #[must_use]
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Returns the effective default toast duration in milliseconds.
    #[must_use]
    pub fn toast_duration_ms(&self) -> u64 {
        self.toast_duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS)
    }

    /// Returns whether the richer toast profile is enabled. Off by default.
    #[must_use]
    pub fn rich_toasts(&self) -> bool {
        self.rich_toasts.unwrap_or(false)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
