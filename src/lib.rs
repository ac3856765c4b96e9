//! Pomodoro Timer Library
//!
//! This library provides a single countdown timer with threshold warnings.
//! It includes:
//! - Countdown engine (state machine, clock driver, threshold notifier)
//! - Notification capability with terminal and mock implementations
//! - Configuration loading and validation
//! - CLI command parsing, display utilities and the interactive session
//! - Type definitions for durations, state and display

pub mod cli;
pub mod config;
pub mod engine;
pub mod notification;
pub mod types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, TimerConfig};
pub use engine::{
    intent_channel, ClockDriver, CountdownEngine, EngineHandle, ThresholdNotifier, TimerEvent,
    UserIntent, WarningMode,
};
pub use notification::{
    MockNotifier, NotificationEvent, NotificationKind, Notifier, TerminalNotifier,
};
pub use types::{CountdownDuration, CountdownPhase, CountdownState, DisplayState};
