// SPDX-License-Identifier: MPL-2.0
//! The bounded toast queue.
//!
//! The `Queue` owns the ordered sequence of live notifications and the id
//! counter. It is a plain synchronous state machine; timed auto-dismissal is
//! layered on top by the [`Notifier`](super::Notifier).

use super::notification::{Notification, NotificationId, Options};
use crate::config::MAX_TOASTS;
use std::collections::VecDeque;

/// Capacity-bounded FIFO of live notifications.
///
/// Insertion order is preserved; when full, adding evicts the oldest entry
/// (the one with the smallest id still present) before appending.
#[derive(Debug)]
pub struct Queue {
    entries: VecDeque<Notification>,
    next_id: u64,
    capacity: usize,
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl Queue {
    /// Creates an empty queue with the standard capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MAX_TOASTS)
    }

    /// Creates an empty queue with a custom capacity bound.
    ///
    /// A zero capacity is clamped to one; the queue must always be able to
    /// hold the entry being added.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            next_id: 1,
            capacity,
        }
    }

    /// Adds a notification and returns its freshly allocated id.
    ///
    /// If the queue is at capacity, the oldest entries are evicted first so
    /// the bound always holds after insertion. The message is accepted as-is;
    /// there is nothing to validate.
    pub fn add(&mut self, message: impl Into<String>, options: Options) -> NotificationId {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }

        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let icon = options
            .icon
            .unwrap_or_else(|| options.kind.icon().to_string());
        let duration = options
            .duration
            .unwrap_or_else(|| options.kind.default_duration());

        self.entries.push_back(Notification {
            id,
            kind: options.kind,
            message: message.into(),
            icon,
            title: options.title,
            duration,
        });

        id
    }

    /// Removes the entry with the given id, preserving the relative order of
    /// the rest. Returns `true` if an entry was removed.
    ///
    /// Removing an unknown id is a no-op: an entry may already be gone because
    /// it was evicted by capacity or auto-dismissed, and expiry timers race
    /// against manual dismissal.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.entries.iter().position(|n| n.id() == id) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }

    /// Returns whether an entry with the given id is currently queued.
    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.entries.iter().any(|n| n.id() == id)
    }

    /// Returns the live notifications in insertion order.
    ///
    /// This is the read-only view a display surface observes.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Returns the number of live notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the capacity bound.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clears all notifications.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
