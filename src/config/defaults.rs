// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **API**: Backend base URL
//! - **Toasts**: Notification durations and capacity

// ==========================================================================
// API Defaults
// ==========================================================================

/// Default backend base URL when no `api_url` is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default time before a toast auto-dismisses (in milliseconds).
/// A duration of zero disables auto-dismissal.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Auto-dismiss duration for pit-stop toasts (in milliseconds).
/// Pit events are transient, so these stay on screen briefly.
pub const PIT_TOAST_DURATION_MS: u64 = 1800;

/// Maximum number of toasts held at once. Adding beyond this evicts
/// the oldest entry immediately.
pub const MAX_TOASTS: usize = 3;
