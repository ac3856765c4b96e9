//! Core data types for the countdown timer.
//!
//! This module defines the data structures used for:
//! - The configured duration with its [0, 59] component bounds
//! - Countdown state (remaining time, phase, configured duration)
//! - Display state handed to the presentation layer
//! - Parsing of raw minute/second input

use serde::{Deserialize, Serialize};

/// Largest value a minutes or seconds component may hold.
pub const MAX_COMPONENT: u32 = 59;

// ============================================================================
// CountdownPhase
// ============================================================================

/// Represents the current phase of the countdown.
///
/// Completion is transient: the engine reports it through an event and lands
/// back in `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountdownPhase {
    /// Not counting down
    #[default]
    Idle,
    /// Counting down once per tick
    Running,
}

// ============================================================================
// CountdownDuration
// ============================================================================

/// A minutes/seconds pair, each component within [0, 59].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownDuration {
    minutes: u32,
    seconds: u32,
}

impl CountdownDuration {
    /// Creates a duration, clamping each component to [0, 59].
    pub fn new(minutes: u32, seconds: u32) -> Self {
        Self {
            minutes: minutes.min(MAX_COMPONENT),
            seconds: seconds.min(MAX_COMPONENT),
        }
    }

    /// Splits a total number of seconds into minutes and seconds.
    ///
    /// Totals beyond 59:59 saturate at 59:59.
    pub fn from_total_seconds(total: u32) -> Self {
        let total = total.min(MAX_COMPONENT * 60 + MAX_COMPONENT);
        Self::new(total / 60, total % 60)
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Total seconds; the canonical value for comparisons.
    pub fn total_seconds(&self) -> u32 {
        self.minutes * 60 + self.seconds
    }

    /// Replaces the minutes component, clamped to [0, 59].
    pub fn set_minutes(&mut self, minutes: u32) {
        self.minutes = minutes.min(MAX_COMPONENT);
    }

    /// Replaces the seconds component, clamped to [0, 59].
    pub fn set_seconds(&mut self, seconds: u32) {
        self.seconds = seconds.min(MAX_COMPONENT);
    }
}

// ============================================================================
// CountdownState
// ============================================================================

/// Represents the current state of the countdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownState {
    /// Current phase
    pub phase: CountdownPhase,
    /// Remaining seconds; never negative
    pub remaining_seconds: u32,
    /// Duration applied on reset or explicit update
    pub configured: CountdownDuration,
}

impl CountdownState {
    /// Creates an idle state whose remaining time equals the configured duration.
    pub fn new(configured: CountdownDuration) -> Self {
        Self {
            phase: CountdownPhase::Idle,
            remaining_seconds: configured.total_seconds(),
            configured,
        }
    }

    /// Returns true if the countdown is running.
    pub fn is_running(&self) -> bool {
        self.phase == CountdownPhase::Running
    }

    /// Configured duration in seconds.
    pub fn configured_seconds(&self) -> u32 {
        self.configured.total_seconds()
    }

    /// Goes idle with the configured duration restored.
    pub fn rewind(&mut self) {
        self.phase = CountdownPhase::Idle;
        self.remaining_seconds = self.configured.total_seconds();
    }

    /// Builds the render inputs for the current state.
    pub fn display(&self) -> DisplayState {
        DisplayState::new(self.remaining_seconds, self.is_running())
    }
}

// ============================================================================
// DisplayState
// ============================================================================

/// Render inputs for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Zero-padded minutes ("MM")
    pub minutes: String,
    /// Zero-padded seconds ("SS")
    pub seconds: String,
    /// Whether the countdown is running
    #[serde(rename = "isRunning")]
    pub is_running: bool,
}

impl DisplayState {
    pub fn new(remaining_seconds: u32, is_running: bool) -> Self {
        Self {
            minutes: format!("{:02}", remaining_seconds / 60),
            seconds: format!("{:02}", remaining_seconds % 60),
            is_running,
        }
    }

    /// Returns the "MM:SS" clock text.
    pub fn clock(&self) -> String {
        format!("{}:{}", self.minutes, self.seconds)
    }

    /// Text of the single Start/Pause button.
    pub fn toggle_text(&self) -> &'static str {
        if self.is_running {
            "Pause"
        } else {
            "Start"
        }
    }

    /// Accessible label of the Start/Pause button.
    pub fn toggle_label(&self) -> &'static str {
        if self.is_running {
            "Pause timer"
        } else {
            "Start timer"
        }
    }
}

// ============================================================================
// Input parsing
// ============================================================================

/// Parses a raw minutes/seconds entry.
///
/// The leading integer is taken and trailing text is ignored; an entry with
/// no leading digits counts as 0. Returns `None` when the value falls outside
/// [0, 59], in which case the caller keeps its previous value.
pub fn parse_time_component(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Some(0);
    }

    let value: u64 = rest[..digits_len].parse().ok()?;
    if negative && value != 0 {
        return None;
    }
    if value > u64::from(MAX_COMPONENT) {
        return None;
    }
    u32::try_from(value).ok()
}

// ============================================================================
// Tests
// ============================================================================
