// SPDX-License-Identifier: MPL-2.0
//! `pitlane` is the client core of the PitLane race-prediction app.
//!
//! It provides the toast notification queue, view routing with auth guards,
//! persisted session state, typed wrappers around the backend HTTP API, and
//! user preference management. Rendering is out of scope: a display surface
//! observes the notification queue and the resolved routes through the
//! read-only views exposed here.

#![doc(html_root_url = "https://docs.rs/pitlane/0.1.0")]

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod notifications;
pub mod paths;
pub mod router;
