// SPDX-License-Identifier: MPL-2.0
//! Durable session storage using CBOR format.
//!
//! The session (token plus cached user record) persists across launches so
//! users stay logged in. It is stored in CBOR (Concise Binary Object
//! Representation) for:
//! - Compact binary storage
//! - Fast serialization/deserialization
//! - Clear separation from user-editable TOML preferences
//!
//! # Path Resolution
//!
//! The session file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. Set `PITLANE_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use crate::api::User;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Session file name within the app data directory.
const SESSION_FILE: &str = "session.cbor";

/// The persisted authentication session.
///
/// An absent token means "not logged in"; a cached user without a token is
/// never written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionState {
    /// Bearer token for authenticated API calls.
    #[serde(default)]
    pub token: Option<String>,

    /// Cached user record from the last successful auth call. Refreshed by
    /// `fetch_me`; may be stale until then.
    #[serde(default)]
    pub user: Option<User>,
}

impl SessionState {
    /// Returns whether a session token is present.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Loads the session from the default location.
    ///
    /// Returns a tuple of (state, optional_warning). If loading fails,
    /// returns a logged-out state with a warning message explaining what went
    /// wrong. The warning can be surfaced to the user via notifications.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads the session from a custom directory.
    ///
    /// # Arguments
    ///
    /// * `base_dir` - Optional base directory. If `None`, uses default path
    ///   resolution.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::session_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(_) => (
                        Self::default(),
                        Some("Stored session is unreadable; you have been logged out".to_string()),
                    ),
                }
            }
            Err(_) => (
                Self::default(),
                Some("Could not read the stored session".to_string()),
            ),
        }
    }

    /// Saves the session to the default location.
    ///
    /// Creates the parent directory if it doesn't exist.
    /// Returns an optional warning message if save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves the session to a custom directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::session_file_path_with_override(base_dir) else {
            return Some("Could not determine the session file path".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("Could not create the session directory".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("Could not write the session file".to_string());
                }
                None
            }
            Err(_) => Some("Could not create the session file".to_string()),
        }
    }

    /// Returns the full path to the session file with optional override.
    fn session_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(SESSION_FILE);
            path
        })
    }
}
