//! Terminal notifier.
//!
//! Prints toasts and live-region announcements to stdout, either as
//! human-readable lines or as JSON lines.

use serde::Serialize;

use super::{NotificationEvent, Notifier};

/// JSON shape of a printed toast.
#[derive(Serialize)]
struct ToastLine<'a> {
    toast: &'a NotificationEvent,
    text: String,
    #[serde(rename = "visibleMs")]
    visible_ms: u64,
}

/// JSON shape of a printed announcement.
#[derive(Serialize)]
struct LiveLine<'a> {
    live: &'a str,
}

/// Notifier that writes to the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier {
    json: bool,
}

impl TerminalNotifier {
    #[must_use]
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Formats a toast line.
    pub fn format_toast(&self, event: &NotificationEvent) -> String {
        if self.json {
            let line = ToastLine {
                toast: event,
                text: event.toast_text(),
                visible_ms: event.kind().visibility_ms(),
            };
            to_json_line(&line)
        } else {
            format!("[toast] {}", event.toast_text())
        }
    }

    /// Formats a live-region line.
    pub fn format_live(&self, text: &str) -> String {
        if self.json {
            to_json_line(&LiveLine { live: text })
        } else {
            format!("[status] {}", text)
        }
    }
}

fn to_json_line<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        tracing::warn!("Failed to serialize notification: {}", e);
        String::new()
    })
}

impl Notifier for TerminalNotifier {
    fn notify(&self, event: &NotificationEvent) {
        tracing::info!(
            kind = ?event.kind(),
            visible_ms = event.kind().visibility_ms(),
            "Notification"
        );
        println!("{}", self.format_toast(event));
    }

    fn announce_live(&self, text: &str) {
        tracing::debug!("Live region: {}", text);
        println!("{}", self.format_live(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_toast() {
        let notifier = TerminalNotifier::new(false);
        assert_eq!(
            notifier.format_toast(&NotificationEvent::Completion),
            "[toast] Time is up!"
        );
        assert_eq!(
            notifier.format_toast(&NotificationEvent::Warning {
                seconds_remaining: 10
            }),
            "[toast] 10 seconds remaining"
        );
    }

    #[test]
    fn test_plain_live() {
        let notifier = TerminalNotifier::new(false);
        assert_eq!(notifier.format_live("Timer complete!"), "[status] Timer complete!");
    }

    #[test]
    fn test_json_toast() {
        let notifier = TerminalNotifier::new(true);
        let line = notifier.format_toast(&NotificationEvent::Warning {
            seconds_remaining: 3,
        });
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["toast"]["kind"], "warning");
        assert_eq!(value["toast"]["secondsRemaining"], 3);
        assert_eq!(value["text"], "3 seconds remaining");
        assert_eq!(value["visibleMs"], 800);
    }

    #[test]
    fn test_json_live() {
        let notifier = TerminalNotifier::new(true);
        assert_eq!(
            notifier.format_live("1 second remaining"),
            r#"{"live":"1 second remaining"}"#
        );
    }
}
