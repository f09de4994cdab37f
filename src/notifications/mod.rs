// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (prediction submitted, login failed, pit stops)
//! without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with kinds and options
//! - [`queue`] - Capacity-bounded FIFO `Queue` with id allocation
//! - [`notifier`] - `Notifier` facade with shorthand helpers and auto-dismiss
//!   timers
//!
//! # Usage
//!
//! ```ignore
//! use pitlane::notifications::Notifier;
//!
//! let (mut notifier, mut expiry) = Notifier::new();
//!
//! notifier.success("Prediction submitted");
//! notifier.pit("Verstappen pits for mediums");
//!
//! // Somewhere in the owner's event loop:
//! while let Some(id) = expiry.recv().await {
//!     notifier.remove(id);
//! }
//! ```
//!
//! # Design Considerations
//!
//! - At most 3 toasts are live at once; adding more evicts the oldest
//! - Default duration 3s; pit toasts 1.8s; a zero duration pins a toast
//! - Expiry timers are never cancelled; `remove` is idempotent instead

mod notification;
mod notifier;
mod queue;

pub use notification::{Kind, Notification, NotificationId, Options};
pub use notifier::{ExpiryFeed, Notifier};
pub use queue::Queue;
