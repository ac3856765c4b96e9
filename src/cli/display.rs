//! Display utilities for the Pomodoro Timer CLI.
//!
//! This module provides formatted output for:
//! - The countdown clock and toggle button
//! - Configured duration edits
//! - Help and error messages

use serde::Serialize;

use crate::types::DisplayState;

/// JSON shape of a configured-duration line.
#[derive(Serialize)]
struct ConfiguredLine {
    configured: ConfiguredValue,
}

#[derive(Serialize)]
struct ConfiguredValue {
    minutes: u32,
    seconds: u32,
}

const HELP_TEXT: &str = "\
Commands:
  toggle, t        Start or pause the countdown
  start            Start the countdown
  pause, p         Pause the countdown
  reset, r         Reset to the configured duration
  min <n>, m <n>   Set configured minutes (0-59)
  sec <n>, s <n>   Set configured seconds (0-59)
  set <m> <s>      Set configured minutes and seconds (clamped to 0-59)
  update, u        Apply the configured duration
  help, h          Show this list
  quit, q          Exit";

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Formats a display state as a line.
    pub fn format_state(state: &DisplayState, json: bool) -> String {
        if json {
            to_json_line(state)
        } else {
            format!("{}  [{}]", state.clock(), state.toggle_text())
        }
    }

    /// Formats a configured-duration edit as a line.
    pub fn format_configured(minutes: u32, seconds: u32, json: bool) -> String {
        if json {
            let line = ConfiguredLine {
                configured: ConfiguredValue { minutes, seconds },
            };
            to_json_line(&line)
        } else {
            format!("Custom time: {:02}:{:02} (type `update` to apply)", minutes, seconds)
        }
    }

    /// Shows the countdown.
    pub fn show_state(state: &DisplayState, json: bool) {
        println!("{}", Self::format_state(state, json));
    }

    /// Shows a configured-duration edit.
    pub fn show_configured(minutes: u32, seconds: u32, json: bool) {
        println!("{}", Self::format_configured(minutes, seconds, json));
    }

    /// Shows the list of interactive commands.
    pub fn show_help() {
        println!("{}", HELP_TEXT);
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("Error: {}", message);
    }

    /// Shows a hint for resolving an error.
    pub fn show_hint(suggestion: &str) {
        eprintln!("Hint: {}", suggestion);
    }
}

fn to_json_line<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        tracing::warn!("Failed to serialize output line: {}", e);
        String::new()
    })
}

// ============================================================================
// Tests
// ============================================================================
