//! Notification delivery for the countdown timer.
//!
//! The engine decides *when* to notify and *with what payload*; delivery is
//! the job of a [`Notifier`] injected into the engine. This module provides:
//!
//! - [`NotificationEvent`]: the Warning/Completion payloads
//! - [`Notifier`]: toast + live-region capability
//! - [`TerminalNotifier`]: prints notifications for the terminal front-end
//! - [`MockNotifier`]: recording fake for tests

mod terminal;

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use self::terminal::TerminalNotifier;

/// How long a Warning toast stays visible.
const WARNING_VISIBILITY_MS: u64 = 800;

/// How long a Completion toast stays visible.
const COMPLETION_VISIBILITY_MS: u64 = 5000;

/// Live-region text announced on completion.
pub const COMPLETION_ANNOUNCEMENT: &str = "Timer complete!";

/// Toast text shown on completion.
pub const COMPLETION_TOAST: &str = "Time is up!";

// ============================================================================
// NotificationKind / NotificationEvent
// ============================================================================

/// Kind of notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Countdown is about to expire
    Warning,
    /// Countdown reached zero
    Completion,
}

impl NotificationKind {
    /// Suggested visibility of the toast.
    ///
    /// Warnings are short-lived and dismissible; completions linger.
    pub fn visibility(&self) -> Duration {
        Duration::from_millis(self.visibility_ms())
    }

    /// Suggested visibility of the toast in milliseconds.
    pub fn visibility_ms(&self) -> u64 {
        match self {
            NotificationKind::Warning => WARNING_VISIBILITY_MS,
            NotificationKind::Completion => COMPLETION_VISIBILITY_MS,
        }
    }
}

/// A notification decided by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NotificationEvent {
    /// Pre-expiry warning
    Warning {
        /// Remaining seconds at the time of the warning
        #[serde(rename = "secondsRemaining")]
        seconds_remaining: u32,
    },
    /// Countdown finished
    Completion,
}

impl NotificationEvent {
    pub fn kind(&self) -> NotificationKind {
        match self {
            NotificationEvent::Warning { .. } => NotificationKind::Warning,
            NotificationEvent::Completion => NotificationKind::Completion,
        }
    }

    /// Text for the accessibility live region.
    pub fn live_text(&self) -> String {
        match self {
            NotificationEvent::Warning { seconds_remaining } => {
                remaining_text(*seconds_remaining)
            }
            NotificationEvent::Completion => COMPLETION_ANNOUNCEMENT.to_string(),
        }
    }

    /// Text for the visual toast.
    pub fn toast_text(&self) -> String {
        match self {
            NotificationEvent::Warning { seconds_remaining } => {
                remaining_text(*seconds_remaining)
            }
            NotificationEvent::Completion => COMPLETION_TOAST.to_string(),
        }
    }
}

fn remaining_text(seconds: u32) -> String {
    let unit = if seconds == 1 { "second" } else { "seconds" };
    format!("{} {} remaining", seconds, unit)
}

// ============================================================================
// Notifier
// ============================================================================

/// Capability the engine uses to surface notifications.
pub trait Notifier {
    /// Shows a visual notification.
    fn notify(&self, event: &NotificationEvent);

    /// Writes text to the accessibility live region.
    fn announce_live(&self, text: &str);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, event: &NotificationEvent) {
        (**self).notify(event)
    }

    fn announce_live(&self, text: &str) {
        (**self).announce_live(text)
    }
}

// ============================================================================
// MockNotifier
// ============================================================================

/// Recording notifier for tests.
#[derive(Debug, Default)]
pub struct MockNotifier {
    notifications: std::sync::Mutex<Vec<NotificationEvent>>,
    announcements: std::sync::Mutex<Vec<String>>,
}

impl MockNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get_notifications(&self) -> Vec<NotificationEvent> {
        self.notifications.lock().unwrap().clone()
    }

    #[must_use]
    pub fn get_announcements(&self) -> Vec<String> {
        self.announcements.lock().unwrap().clone()
    }

    /// Number of recorded notifications of the given kind.
    #[must_use]
    pub fn count(&self, kind: NotificationKind) -> usize {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|event| event.kind() == kind)
            .count()
    }

    pub fn clear(&self) {
        self.notifications.lock().unwrap().clear();
        self.announcements.lock().unwrap().clear();
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, event: &NotificationEvent) {
        self.notifications.lock().unwrap().push(*event);
    }

    fn announce_live(&self, text: &str) {
        self.announcements.lock().unwrap().push(text.to_string());
    }
}
