// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, its `Kind` enumeration,
//! and the `Options` accepted when queuing a new toast.

use crate::config::{DEFAULT_TOAST_DURATION_MS, PIT_TOAST_DURATION_MS};
use std::time::Duration;

/// Unique identifier for a notification.
///
/// Ids are allocated by the owning [`Queue`](super::Queue), start at 1, and
/// are never reused for the lifetime of that queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(pub(super) u64);

impl NotificationId {
    /// Returns the raw id value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category of a toast. Determines the default icon and, for `Pit`,
/// a shorter default display duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Informational message.
    #[default]
    Info,
    /// Operation completed successfully.
    Success,
    /// Something went wrong.
    Error,
    /// Warning that doesn't block the user.
    Warning,
    /// Transient pit-stop event.
    Pit,
}

impl Kind {
    /// Returns the default display glyph for this kind.
    ///
    /// Unknown kinds cannot exist in Rust, but the `Info` glyph is still the
    /// documented fallback for anything without a dedicated one.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Kind::Success => "\u{2705}",        // ✅
            Kind::Error => "\u{274c}",          // ❌
            Kind::Warning => "\u{26a0}\u{fe0f}", // ⚠️
            Kind::Pit => "\u{1f527}",           // 🔧
            Kind::Info => "\u{2139}\u{fe0f}",   // ℹ️
        }
    }

    /// Returns the default auto-dismiss duration for this kind.
    #[must_use]
    pub fn default_duration(self) -> Duration {
        match self {
            Kind::Pit => Duration::from_millis(PIT_TOAST_DURATION_MS),
            _ => Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
        }
    }
}

/// Options accepted by [`Queue::add`](super::Queue::add).
///
/// Every field has a sensible default, so `Options::default()` produces a
/// plain info toast with the standard duration.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Category of the message.
    pub kind: Kind,
    /// Override glyph. When `None`, derived from `kind`.
    pub icon: Option<String>,
    /// Optional title line (richer toast profile only).
    pub title: Option<String>,
    /// Time before auto-removal. `None` uses the kind default;
    /// `Duration::ZERO` disables auto-removal.
    pub duration: Option<Duration>,
}

impl Options {
    /// Options for a toast of the given kind, everything else defaulted.
    #[must_use]
    pub fn kind(kind: Kind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Sets an override glyph.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets a title line (richer toast profile).
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets an explicit auto-dismiss duration. `Duration::ZERO` disables
    /// auto-dismissal.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// A single queued user-facing status message.
#[derive(Debug, Clone)]
pub struct Notification {
    pub(super) id: NotificationId,
    pub(super) kind: Kind,
    pub(super) message: String,
    pub(super) icon: String,
    pub(super) title: Option<String>,
    pub(super) duration: Duration,
}

impl Notification {
    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the category.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the display text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the display glyph (explicit override or kind default).
    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Returns the optional title line.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the auto-dismiss duration. Zero means the toast stays until
    /// removed explicitly.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_distinct_icon() {
        let icons = [
            Kind::Info.icon(),
            Kind::Success.icon(),
            Kind::Error.icon(),
            Kind::Warning.icon(),
            Kind::Pit.icon(),
        ];
        for (i, a) in icons.iter().enumerate() {
            for b in icons.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn pit_duration_is_shorter_than_default() {
        assert!(Kind::Pit.default_duration() < Kind::Info.default_duration());
    }

    #[test]
    fn default_options_are_plain_info() {
        let options = Options::default();
        assert_eq!(options.kind, Kind::Info);
        assert!(options.icon.is_none());
        assert!(options.title.is_none());
        assert!(options.duration.is_none());
    }

    #[test]
    fn options_builder_sets_fields() {
        let options = Options::kind(Kind::Warning)
            .with_icon("!")
            .with_title("Heads up")
            .with_duration(Duration::from_millis(500));

        assert_eq!(options.kind, Kind::Warning);
        assert_eq!(options.icon.as_deref(), Some("!"));
        assert_eq!(options.title.as_deref(), Some("Heads up"));
        assert_eq!(options.duration, Some(Duration::from_millis(500)));
    }
}
