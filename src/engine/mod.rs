//! Countdown engine for the Pomodoro Timer.
//!
//! This module contains the core countdown functionality:
//! - `countdown`: state machine, run loop and presentation events
//! - `clock`: periodic tick scheduling with a single cancellation handle
//! - `threshold`: warning/completion decisions with de-duplication

pub mod clock;
pub mod countdown;
pub mod threshold;

pub use clock::ClockDriver;
pub use countdown::{intent_channel, CountdownEngine, EngineHandle, TimerEvent, UserIntent};
pub use threshold::{threshold_for, ThresholdNotifier, WarningMode};
