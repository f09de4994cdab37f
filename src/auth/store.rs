// SPDX-License-Identifier: MPL-2.0
//! Session orchestration: login, registration, logout, and token refresh.
//!
//! The store owns the in-memory [`SessionState`] and keeps the on-disk copy
//! in sync after every mutation. API calls go through the stateless
//! [`ApiClient`]; the store only adds session bookkeeping on top.

use super::session::SessionState;
use crate::api::{ApiClient, User};
use crate::error::{Error, Result};
use std::path::PathBuf;

/// Holds the current session and persists it across launches.
#[derive(Debug)]
pub struct AuthStore {
    session: SessionState,
    /// Data-dir override, mainly for tests. `None` uses default resolution.
    data_dir: Option<PathBuf>,
}

impl AuthStore {
    /// Restores the session from the default location.
    ///
    /// Returns the store plus an optional user-facing warning when the stored
    /// session could not be read (the user is then logged out).
    #[must_use]
    pub fn restore() -> (Self, Option<String>) {
        Self::restore_from(None)
    }

    /// Restores the session from a custom data directory.
    #[must_use]
    pub fn restore_from(data_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let (session, warning) = SessionState::load_from(data_dir.clone());
        (Self { session, data_dir }, warning)
    }

    /// Returns the bearer token, if logged in.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    /// Returns the cached user record, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    /// Returns whether a session token is present.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// Creates an account and establishes the resulting session.
    pub async fn register(
        &mut self,
        api: &ApiClient,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User> {
        let response = api.register(username, email, password).await?;
        self.establish(response.token, response.user.clone());
        Ok(response.user)
    }

    /// Logs in and establishes the resulting session.
    pub async fn login(&mut self, api: &ApiClient, identifier: &str, password: &str) -> Result<User> {
        let response = api.login(identifier, password).await?;
        self.establish(response.token, response.user.clone());
        Ok(response.user)
    }

    /// Clears the session, in memory and on disk.
    pub fn logout(&mut self) {
        self.session = SessionState::default();
        self.persist();
    }

    /// Refreshes the cached user record from the backend.
    ///
    /// Without a token this is a no-op returning `Ok(None)`. A rejection from
    /// the backend (expired or revoked token) clears the session and also
    /// returns `Ok(None)`; only transport and decode failures surface as
    /// errors, leaving the session untouched.
    pub async fn fetch_me(&mut self, api: &ApiClient) -> Result<Option<User>> {
        let Some(token) = self.session.token.clone() else {
            return Ok(None);
        };

        match api.me(&token).await {
            Ok(user) => {
                self.session.user = Some(user.clone());
                self.persist();
                Ok(Some(user))
            }
            Err(Error::Api(api_error)) if !is_transport(&api_error) => {
                self.logout();
                Ok(None)
            }
            Err(other) => Err(other),
        }
    }

    fn establish(&mut self, token: String, user: User) {
        self.session = SessionState {
            token: Some(token),
            user: Some(user),
        };
        self.persist();
    }

    fn persist(&self) {
        if let Some(warning) = self.session.save_to(self.data_dir.clone()) {
            eprintln!("Failed to save session: {}", warning);
        }
    }
}

/// True for failures where no backend verdict was received.
fn is_transport(error: &crate::error::ApiError) -> bool {
    use crate::error::ApiError;
    matches!(error, ApiError::Network(_) | ApiError::Decode(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_user() -> User {
        User {
            id: 7,
            username: "PitStopMaster".to_string(),
            email: "master@example.com".to_string(),
            total_score: 4210,
            accuracy_rate: 82.5,
        }
    }

    #[test]
    fn fresh_store_is_logged_out() {
        let dir = tempdir().expect("failed to create temp dir");
        let (store, warning) = AuthStore::restore_from(Some(dir.path().to_path_buf()));
        assert!(!store.is_logged_in());
        assert!(warning.is_none());
    }

    #[test]
    fn establish_then_restore_round_trips() {
        let dir = tempdir().expect("failed to create temp dir");
        let (mut store, _) = AuthStore::restore_from(Some(dir.path().to_path_buf()));
        store.establish("tok-abc".to_string(), sample_user());

        let (restored, warning) = AuthStore::restore_from(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert!(restored.is_logged_in());
        assert_eq!(restored.token(), Some("tok-abc"));
        assert_eq!(restored.user().map(|u| u.username.as_str()), Some("PitStopMaster"));
    }

    #[test]
    fn logout_clears_memory_and_disk() {
        let dir = tempdir().expect("failed to create temp dir");
        let (mut store, _) = AuthStore::restore_from(Some(dir.path().to_path_buf()));
        store.establish("tok-abc".to_string(), sample_user());

        store.logout();
        assert!(!store.is_logged_in());
        assert!(store.user().is_none());

        let (restored, _) = AuthStore::restore_from(Some(dir.path().to_path_buf()));
        assert!(!restored.is_logged_in());
    }

    #[tokio::test]
    async fn fetch_me_without_token_is_a_noop() {
        let dir = tempdir().expect("failed to create temp dir");
        let (mut store, _) = AuthStore::restore_from(Some(dir.path().to_path_buf()));
        let api = ApiClient::new("http://localhost:5000");

        let result = store.fetch_me(&api).await.expect("no-op must not fail");
        assert!(result.is_none());
        assert!(!store.is_logged_in());
    }
}
