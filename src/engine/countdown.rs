//! Countdown engine.
//!
//! This module provides the core timer functionality:
//! - State transitions (Idle ⇄ Running, transient completion)
//! - Countdown driven by the [`ClockDriver`]
//! - Threshold warnings and completion delivered through a [`Notifier`]
//! - Presentation events over an unbounded channel
//!
//! Operations that schedule ticks must run inside a Tokio runtime.

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use super::clock::ClockDriver;
use super::threshold::ThresholdNotifier;
use crate::config::TimerConfig;
use crate::notification::{NotificationEvent, Notifier};
use crate::types::{parse_time_component, CountdownPhase, CountdownState, DisplayState};

// ============================================================================
// TimerEvent
// ============================================================================

/// Events for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Countdown started or resumed
    Started {
        /// Remaining seconds
        remaining_seconds: u32,
    },
    /// Countdown paused
    Paused {
        /// Remaining seconds
        remaining_seconds: u32,
    },
    /// Countdown reset to the configured duration
    Reset {
        /// Remaining seconds
        remaining_seconds: u32,
    },
    /// Configured duration committed as the new remaining time
    DurationApplied {
        /// Remaining seconds
        remaining_seconds: u32,
    },
    /// One tick elapsed
    Tick {
        /// Remaining seconds
        remaining_seconds: u32,
    },
    /// Countdown finished and rewound to the configured duration
    Completed {
        /// Remaining seconds after rewinding
        remaining_seconds: u32,
    },
    /// Configured duration edited (not yet applied)
    ConfiguredDurationChanged {
        /// Configured minutes
        minutes: u32,
        /// Configured seconds
        seconds: u32,
    },
}

impl TimerEvent {
    /// Render inputs after this event, if it changed the countdown.
    pub fn display(&self) -> Option<DisplayState> {
        match *self {
            TimerEvent::Started { remaining_seconds }
            | TimerEvent::Tick { remaining_seconds } => {
                Some(DisplayState::new(remaining_seconds, true))
            }
            TimerEvent::Paused { remaining_seconds }
            | TimerEvent::Reset { remaining_seconds }
            | TimerEvent::DurationApplied { remaining_seconds }
            | TimerEvent::Completed { remaining_seconds } => {
                Some(DisplayState::new(remaining_seconds, false))
            }
            TimerEvent::ConfiguredDurationChanged { .. } => None,
        }
    }
}

// ============================================================================
// UserIntent / EngineHandle
// ============================================================================

/// Intents forwarded from the presentation layer to a running engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    /// Pause if running, otherwise start
    Toggle,
    /// Start or resume
    Start,
    /// Pause, keeping the remaining time
    Pause,
    /// Stop and restore the configured duration
    Reset,
    /// Stop and commit the configured duration
    ApplyConfiguredDuration,
    /// Edit the configured duration, clamping each component
    SetConfiguredDuration {
        /// Configured minutes
        minutes: u32,
        /// Configured seconds
        seconds: u32,
    },
    /// Raw minutes entry
    MinutesInput(String),
    /// Raw seconds entry
    SecondsInput(String),
    /// Stop the run loop
    Shutdown,
}

/// Sender side of an engine's intent channel.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    intent_tx: mpsc::UnboundedSender<UserIntent>,
}

impl EngineHandle {
    /// Wraps an intent sender.
    pub fn new(intent_tx: mpsc::UnboundedSender<UserIntent>) -> Self {
        Self { intent_tx }
    }

    /// Sends an intent to the engine.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine has stopped.
    pub fn send(&self, intent: UserIntent) -> Result<()> {
        self.intent_tx
            .send(intent)
            .context("Countdown engine is not running")
    }

    /// Starts or pauses the countdown.
    pub fn on_toggle(&self) -> Result<()> {
        self.send(UserIntent::Toggle)
    }

    /// Resets to the configured duration.
    pub fn on_reset(&self) -> Result<()> {
        self.send(UserIntent::Reset)
    }

    /// Applies the configured duration.
    pub fn on_apply_custom_duration(&self) -> Result<()> {
        self.send(UserIntent::ApplyConfiguredDuration)
    }

    /// Forwards a raw minutes entry.
    pub fn on_minutes_input_change(&self, raw: impl Into<String>) -> Result<()> {
        self.send(UserIntent::MinutesInput(raw.into()))
    }

    /// Forwards a raw seconds entry.
    pub fn on_seconds_input_change(&self, raw: impl Into<String>) -> Result<()> {
        self.send(UserIntent::SecondsInput(raw.into()))
    }

    /// Asks the engine to stop its run loop.
    pub fn shutdown(&self) -> Result<()> {
        self.send(UserIntent::Shutdown)
    }
}

/// Creates an intent channel for [`CountdownEngine::run`].
pub fn intent_channel() -> (EngineHandle, mpsc::UnboundedReceiver<UserIntent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EngineHandle::new(tx), rx)
}

// ============================================================================
// CountdownEngine
// ============================================================================

/// Countdown state machine with its clock driver and threshold notifier.
pub struct CountdownEngine<N: Notifier> {
    state: CountdownState,
    clock: ClockDriver,
    threshold: ThresholdNotifier,
    notifier: N,
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl<N: Notifier> CountdownEngine<N> {
    /// Creates an idle engine from the given configuration.
    pub fn new(
        config: &TimerConfig,
        notifier: N,
        event_tx: mpsc::UnboundedSender<TimerEvent>,
    ) -> Self {
        Self {
            state: CountdownState::new(config.duration()),
            clock: ClockDriver::new(config.tick_interval()),
            threshold: ThresholdNotifier::new(config.warning_mode),
            notifier,
            event_tx,
        }
    }

    /// Runs the engine until shutdown.
    ///
    /// Pending intents are handled before a tick that is due at the same time.
    /// The loop ends on [`UserIntent::Shutdown`] or when every handle is dropped.
    pub async fn run(&mut self, mut intents: mpsc::UnboundedReceiver<UserIntent>) {
        tracing::debug!(
            period = ?self.clock.period(),
            warning_mode = self.threshold.mode().as_str(),
            "Countdown engine running"
        );

        loop {
            tokio::select! {
                biased;
                intent = intents.recv() => match intent {
                    Some(UserIntent::Shutdown) | None => break,
                    Some(intent) => self.handle_intent(intent),
                },
                _ = self.clock.next_tick() => self.tick(),
            }
        }

        self.dispose();
    }

    /// Applies a single intent.
    pub fn handle_intent(&mut self, intent: UserIntent) {
        match intent {
            UserIntent::Toggle => {
                self.toggle();
            }
            UserIntent::Start => {
                self.start();
            }
            UserIntent::Pause => {
                self.pause();
            }
            UserIntent::Reset => self.reset(),
            UserIntent::ApplyConfiguredDuration => self.apply_configured_duration(),
            UserIntent::SetConfiguredDuration { minutes, seconds } => {
                self.set_configured_duration(minutes, seconds)
            }
            UserIntent::MinutesInput(raw) => {
                self.on_minutes_input_change(&raw);
            }
            UserIntent::SecondsInput(raw) => {
                self.on_seconds_input_change(&raw);
            }
            UserIntent::Shutdown => self.dispose(),
        }
    }

    /// Starts counting down.
    ///
    /// Returns false if already running or if there is nothing to count down.
    pub fn start(&mut self) -> bool {
        if self.state.is_running() {
            tracing::debug!("Start ignored: already running");
            return false;
        }
        if self.state.remaining_seconds == 0 {
            tracing::debug!("Start ignored: no time remaining");
            return false;
        }

        self.state.phase = CountdownPhase::Running;
        self.clock.schedule();
        tracing::debug!(remaining = self.state.remaining_seconds, "Countdown started");

        self.emit(TimerEvent::Started {
            remaining_seconds: self.state.remaining_seconds,
        });
        true
    }

    /// Pauses the countdown, keeping the remaining time.
    ///
    /// Returns false if not running.
    pub fn pause(&mut self) -> bool {
        if !self.state.is_running() {
            tracing::debug!("Pause ignored: not running");
            return false;
        }

        self.clock.cancel();
        self.state.phase = CountdownPhase::Idle;
        tracing::debug!(remaining = self.state.remaining_seconds, "Countdown paused");

        self.emit(TimerEvent::Paused {
            remaining_seconds: self.state.remaining_seconds,
        });
        true
    }

    /// Pauses if running, otherwise starts.
    pub fn toggle(&mut self) -> bool {
        if self.state.is_running() {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Stops and restores the configured duration.
    pub fn reset(&mut self) {
        self.rewind();
        tracing::debug!(remaining = self.state.remaining_seconds, "Countdown reset");

        self.emit(TimerEvent::Reset {
            remaining_seconds: self.state.remaining_seconds,
        });
    }

    /// Stops and commits the configured duration as the remaining time.
    pub fn apply_configured_duration(&mut self) {
        self.rewind();
        tracing::debug!(
            remaining = self.state.remaining_seconds,
            "Configured duration applied"
        );

        self.emit(TimerEvent::DurationApplied {
            remaining_seconds: self.state.remaining_seconds,
        });
    }

    /// Edits the configured duration, clamping each component to [0, 59].
    ///
    /// The remaining time and running state are left alone.
    pub fn set_configured_duration(&mut self, minutes: u32, seconds: u32) {
        self.state.configured.set_minutes(minutes);
        self.state.configured.set_seconds(seconds);
        self.emit_configured();
    }

    /// Handles a raw minutes entry.
    ///
    /// Returns false if the entry was rejected and the previous value kept.
    pub fn on_minutes_input_change(&mut self, raw: &str) -> bool {
        match parse_time_component(raw) {
            Some(minutes) => {
                self.state.configured.set_minutes(minutes);
                self.emit_configured();
                true
            }
            None => {
                tracing::warn!("Rejected minutes input: {:?}", raw);
                false
            }
        }
    }

    /// Handles a raw seconds entry.
    ///
    /// Returns false if the entry was rejected and the previous value kept.
    pub fn on_seconds_input_change(&mut self, raw: &str) -> bool {
        match parse_time_component(raw) {
            Some(seconds) => {
                self.state.configured.set_seconds(seconds);
                self.emit_configured();
                true
            }
            None => {
                tracing::warn!("Rejected seconds input: {:?}", raw);
                false
            }
        }
    }

    /// Advances the countdown by one tick.
    ///
    /// Completion fires when the remaining time reaches zero, or immediately
    /// if a tick finds it already at zero. Does nothing while idle.
    pub fn tick(&mut self) {
        if !self.state.is_running() {
            return;
        }

        if self.state.remaining_seconds > 0 {
            self.state.remaining_seconds -= 1;
            self.emit(TimerEvent::Tick {
                remaining_seconds: self.state.remaining_seconds,
            });
        }

        let decision = self
            .threshold
            .evaluate(self.state.remaining_seconds, self.state.configured_seconds());

        match decision {
            Some(event @ NotificationEvent::Warning { .. }) => self.deliver(&event),
            Some(event @ NotificationEvent::Completion) => {
                self.deliver(&event);
                self.complete();
            }
            None => {}
        }
    }

    /// Cancels any pending tick. Call before tearing the engine down.
    pub fn dispose(&mut self) {
        if self.clock.cancel() {
            tracing::debug!("Pending tick cancelled on dispose");
        }
        self.state.phase = CountdownPhase::Idle;
    }

    /// Returns a reference to the current countdown state.
    pub fn get_state(&self) -> &CountdownState {
        &self.state
    }

    /// Render inputs for the current state.
    pub fn display(&self) -> DisplayState {
        self.state.display()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Returns true if a tick is scheduled.
    pub fn is_tick_scheduled(&self) -> bool {
        self.clock.is_scheduled()
    }

    pub fn last_announced_second(&self) -> Option<u32> {
        self.threshold.last_announced()
    }

    /// Returns a mutable reference to the countdown state (for testing).
    #[cfg(test)]
    pub fn get_state_mut(&mut self) -> &mut CountdownState {
        &mut self.state
    }

    fn rewind(&mut self) {
        self.clock.cancel();
        self.threshold.clear();
        self.state.rewind();
    }

    fn complete(&mut self) {
        self.rewind();
        tracing::info!(
            remaining = self.state.remaining_seconds,
            "Countdown complete"
        );

        self.emit(TimerEvent::Completed {
            remaining_seconds: self.state.remaining_seconds,
        });
    }

    fn deliver(&self, event: &NotificationEvent) {
        self.notifier.notify(event);
        self.notifier.announce_live(&event.live_text());
    }

    fn emit_configured(&self) {
        self.emit(TimerEvent::ConfiguredDurationChanged {
            minutes: self.state.configured.minutes(),
            seconds: self.state.configured.seconds(),
        });
    }

    fn emit(&self, event: TimerEvent) {
        if self.event_tx.send(event).is_err() {
            tracing::trace!("No presentation listener for timer event");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
