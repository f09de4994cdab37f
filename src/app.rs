// SPDX-License-Identifier: MPL-2.0
//! Application root state wiring the client components together.
//!
//! The `App` struct owns the configuration, the API client, the auth store,
//! and the toast notifier, and is the single place that connects them: route
//! resolution consults the session, session-restore problems surface as
//! toasts, and notification expirations are applied here. Whatever renders
//! the views and toasts holds this context by reference; there are no
//! process-wide globals, so tests can run several independent apps.

use crate::api::ApiClient;
use crate::auth::AuthStore;
use crate::config::Config;
use crate::notifications::{ExpiryFeed, Kind, NotificationId, Notifier, Options};
use crate::router::{self, Resolution};
use std::path::PathBuf;
use std::time::Duration;

/// Root client context.
#[derive(Debug)]
pub struct App {
    config: Config,
    api: ApiClient,
    auth: AuthStore,
    notifications: Notifier,
}

impl App {
    /// Builds the app from a configuration, restoring any persisted session.
    ///
    /// Returns the app plus the notification expiry feed; the caller drains
    /// the feed and applies each id via [`App::apply_expiry`].
    #[must_use]
    pub fn new(config: Config) -> (Self, ExpiryFeed) {
        Self::with_data_dir(config, None)
    }

    /// Builds the app with a custom data directory for session storage.
    #[must_use]
    pub fn with_data_dir(config: Config, data_dir: Option<PathBuf>) -> (Self, ExpiryFeed) {
        let (auth, restore_warning) = AuthStore::restore_from(data_dir);
        let (mut notifications, expiry) = Notifier::with_settings(
            config.toast_duration_ms.map(Duration::from_millis),
            config.rich_toasts(),
        );

        if let Some(warning) = restore_warning {
            // Sticky toast: zero duration spawns no timer, so construction
            // works outside a runtime and the message waits to be seen.
            notifications.add(
                warning,
                Options::kind(Kind::Warning).with_duration(Duration::ZERO),
            );
        }

        let api = ApiClient::new(config.api_url());

        (
            Self {
                config,
                api,
                auth,
                notifications,
            },
            expiry,
        )
    }

    /// Resolves a path against the route table and the current session.
    #[must_use]
    pub fn navigate(&self, path: &str) -> Resolution {
        router::resolve(path, self.auth.is_logged_in())
    }

    /// Applies an expired-toast id from the expiry feed.
    pub fn apply_expiry(&mut self, id: NotificationId) {
        self.notifications.remove(id);
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the API client.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Returns the auth store.
    #[must_use]
    pub fn auth(&self) -> &AuthStore {
        &self.auth
    }

    /// Returns the auth store mutably (login/logout flows).
    pub fn auth_mut(&mut self) -> &mut AuthStore {
        &mut self.auth
    }

    /// Returns the notifier.
    #[must_use]
    pub fn notifications(&self) -> &Notifier {
        &self.notifications
    }

    /// Returns the notifier mutably (queuing toasts).
    pub fn notifications_mut(&mut self) -> &mut Notifier {
        &mut self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Route;
    use tempfile::tempdir;

    fn test_app() -> (App, ExpiryFeed, tempfile::TempDir) {
        let dir = tempdir().expect("failed to create temp dir");
        let (app, expiry) = App::with_data_dir(Config::default(), Some(dir.path().to_path_buf()));
        (app, expiry, dir)
    }

    #[test]
    fn fresh_app_is_logged_out_with_no_toasts() {
        let (app, _expiry, _dir) = test_app();
        assert!(!app.auth().is_logged_in());
        assert!(app.notifications().is_empty());
    }

    #[test]
    fn api_client_uses_configured_url() {
        let dir = tempdir().expect("failed to create temp dir");
        let config = Config {
            api_url: Some("http://race.example:8080/".to_string()),
            ..Config::default()
        };
        let (app, _expiry) = App::with_data_dir(config, Some(dir.path().to_path_buf()));
        assert_eq!(app.api().base_url(), "http://race.example:8080");
    }

    #[test]
    fn navigation_follows_session_state() {
        let (app, _expiry, _dir) = test_app();
        assert_eq!(app.navigate("/"), Resolution::Matched(Route::Home));
        assert_eq!(
            app.navigate("/predictions"),
            Resolution::Redirect {
                to: Route::Login,
                from: Route::MyPredictions
            }
        );
    }

    #[test]
    fn rich_toasts_setting_reaches_the_notifier() {
        let dir = tempdir().expect("failed to create temp dir");
        let config = Config {
            rich_toasts: Some(true),
            ..Config::default()
        };
        let (app, _expiry) = App::with_data_dir(config, Some(dir.path().to_path_buf()));
        assert!(app.notifications().rich_toasts());

        let (plain, _expiry, _dir) = test_app();
        assert!(!plain.notifications().rich_toasts());
    }

    #[test]
    fn corrupt_session_surfaces_a_sticky_warning_toast() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("session.cbor"), b"garbage")
            .expect("failed to write corrupt session");

        let (app, _expiry) = App::with_data_dir(Config::default(), Some(dir.path().to_path_buf()));

        assert_eq!(app.notifications().len(), 1);
        let toast = app.notifications().iter().next().unwrap();
        assert_eq!(toast.kind(), Kind::Warning);
        assert_eq!(toast.duration(), Duration::ZERO);
    }
}
