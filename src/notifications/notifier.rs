// SPDX-License-Identifier: MPL-2.0
//! Timer-backed facade over the toast [`Queue`].
//!
//! The `Notifier` owns a queue and schedules the auto-dismissal of every
//! toast added with a nonzero duration. Expiry is a one-shot `tokio` sleep
//! task per toast; when it fires, the toast's id is sent over an unbounded
//! channel. The channel receiver is handed out at construction so the owner
//! (the composition root, or whatever drives the display surface) applies
//! expirations on its own task, never concurrently with other mutations.
//!
//! Pending timers are not cancelled when a toast is removed early; a late
//! expiry lands on [`Notifier::remove`], which is idempotent.

use super::notification::{Kind, Notification, NotificationId, Options};
use super::queue::Queue;
use std::time::Duration;
use tokio::sync::mpsc;

/// Receiving half of the expiry channel.
///
/// Each received id identifies a toast whose display time has elapsed. Feed
/// it back into [`Notifier::remove`]; ids of already-removed toasts are
/// harmless no-ops.
pub type ExpiryFeed = mpsc::UnboundedReceiver<NotificationId>;

/// Queues toasts and schedules their auto-dismissal.
#[derive(Debug)]
pub struct Notifier {
    queue: Queue,
    expiry_tx: mpsc::UnboundedSender<NotificationId>,
    /// Configured default duration; overrides the per-kind default when set.
    default_duration: Option<Duration>,
    /// Whether the richer toast profile (title lines) is enabled.
    rich_toasts: bool,
}

impl Notifier {
    /// Creates a notifier and the expiry feed its timers report into.
    #[must_use]
    pub fn new() -> (Self, ExpiryFeed) {
        Self::with_settings(None, false)
    }

    /// Creates a notifier with a configured default toast duration.
    ///
    /// The configured duration applies to toasts added without an explicit
    /// one; shorthand presets like [`Notifier::pit`] still pass their own.
    #[must_use]
    pub fn with_default_duration(default_duration: Option<Duration>) -> (Self, ExpiryFeed) {
        Self::with_settings(default_duration, false)
    }

    /// Creates a notifier with a configured default duration and toast
    /// profile.
    ///
    /// In the compact profile (`rich_toasts = false`) title lines are
    /// stripped on add, so the display surface never sees one; the richer
    /// profile keeps them.
    #[must_use]
    pub fn with_settings(
        default_duration: Option<Duration>,
        rich_toasts: bool,
    ) -> (Self, ExpiryFeed) {
        let (expiry_tx, expiry_rx) = mpsc::unbounded_channel();
        (
            Self {
                queue: Queue::new(),
                expiry_tx,
                default_duration,
                rich_toasts,
            },
            expiry_rx,
        )
    }

    /// Returns whether the richer toast profile is enabled.
    #[must_use]
    pub fn rich_toasts(&self) -> bool {
        self.rich_toasts
    }

    /// Adds a toast and schedules its auto-dismissal.
    ///
    /// Must be called from within a tokio runtime when the resolved duration
    /// is nonzero, since the expiry timer is a spawned task.
    pub fn add(&mut self, message: impl Into<String>, mut options: Options) -> NotificationId {
        if options.duration.is_none() {
            options.duration = self.default_duration;
        }
        if !self.rich_toasts {
            options.title = None;
        }

        let id = self.queue.add(message, options);

        // The entry was just appended, so the lookup cannot fail.
        let duration = self
            .queue
            .iter()
            .find(|n| n.id() == id)
            .map(Notification::duration)
            .unwrap_or(Duration::ZERO);

        if !duration.is_zero() {
            let tx = self.expiry_tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(duration).await;
                // The receiver may be gone during shutdown; nothing to do then.
                let _ = tx.send(id);
            });
        }

        id
    }

    /// Removes a toast by id. Safe to call for ids that already expired or
    /// were evicted. Returns `true` if an entry was removed.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        self.queue.remove(id)
    }

    /// Queues an informational toast.
    pub fn info(&mut self, message: impl Into<String>) -> NotificationId {
        self.add(message, Options::kind(Kind::Info))
    }

    /// Queues a success toast.
    pub fn success(&mut self, message: impl Into<String>) -> NotificationId {
        self.add(message, Options::kind(Kind::Success))
    }

    /// Queues a warning toast.
    pub fn warning(&mut self, message: impl Into<String>) -> NotificationId {
        self.add(message, Options::kind(Kind::Warning))
    }

    /// Queues an error toast.
    pub fn error(&mut self, message: impl Into<String>) -> NotificationId {
        self.add(message, Options::kind(Kind::Error))
    }

    /// Queues a short-lived pit-stop toast.
    pub fn pit(&mut self, message: impl Into<String>) -> NotificationId {
        self.add(
            message,
            Options::kind(Kind::Pit).with_duration(Kind::Pit.default_duration()),
        )
    }

    /// Returns the live toasts in insertion order (the display surface view).
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }

    /// Returns whether a toast with the given id is currently live.
    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.queue.contains(id)
    }

    /// Returns the number of live toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are no live toasts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Clears all live toasts. Pending expiry timers still fire and no-op.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
