//! Threshold notifier.
//!
//! Decides after each tick whether a Warning or a Completion is due and
//! remembers the last announced second so that no value is announced twice.

use serde::{Deserialize, Serialize};

use crate::notification::NotificationEvent;

/// Configured durations below this many seconds count as short timers.
pub const SHORT_TIMER_LIMIT_SECONDS: u32 = 60;

/// Warning threshold for short timers.
pub const SHORT_TIMER_THRESHOLD: u32 = 3;

/// Warning threshold for all other timers.
pub const DEFAULT_THRESHOLD: u32 = 10;

/// Which remaining-second values produce a Warning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningMode {
    /// Only when the remaining time equals the threshold
    #[default]
    Threshold,
    /// For every remaining second at or below the threshold
    EverySecond,
}

impl WarningMode {
    /// Returns the name used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningMode::Threshold => "threshold",
            WarningMode::EverySecond => "every-second",
        }
    }
}

/// Returns the warning threshold for a configured duration.
pub fn threshold_for(configured_seconds: u32) -> u32 {
    if configured_seconds < SHORT_TIMER_LIMIT_SECONDS {
        SHORT_TIMER_THRESHOLD
    } else {
        DEFAULT_THRESHOLD
    }
}

/// Per-tick notification decision with de-duplication.
#[derive(Debug, Clone, Default)]
pub struct ThresholdNotifier {
    mode: WarningMode,
    last_announced: Option<u32>,
}

impl ThresholdNotifier {
    pub fn new(mode: WarningMode) -> Self {
        Self {
            mode,
            last_announced: None,
        }
    }

    pub fn mode(&self) -> WarningMode {
        self.mode
    }

    pub fn last_announced(&self) -> Option<u32> {
        self.last_announced
    }

    /// Forgets the last announced second.
    pub fn clear(&mut self) {
        self.last_announced = None;
    }

    /// Inspects the post-tick remaining time.
    pub fn evaluate(
        &mut self,
        remaining_seconds: u32,
        configured_seconds: u32,
    ) -> Option<NotificationEvent> {
        if remaining_seconds == 0 {
            self.clear();
            return Some(NotificationEvent::Completion);
        }

        let threshold = threshold_for(configured_seconds);
        let due = match self.mode {
            WarningMode::Threshold => remaining_seconds == threshold,
            WarningMode::EverySecond => remaining_seconds <= threshold,
        };

        if !due || self.last_announced == Some(remaining_seconds) {
            return None;
        }

        self.last_announced = Some(remaining_seconds);
        Some(NotificationEvent::Warning {
            seconds_remaining: remaining_seconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning(seconds_remaining: u32) -> Option<NotificationEvent> {
        Some(NotificationEvent::Warning { seconds_remaining })
    }

    mod threshold_for_tests {
        use super::*;

        #[test]
        fn test_short_timer() {
            assert_eq!(threshold_for(0), 3);
            assert_eq!(threshold_for(15), 3);
            assert_eq!(threshold_for(59), 3);
        }

        #[test]
        fn test_long_timer() {
            assert_eq!(threshold_for(60), 10);
            assert_eq!(threshold_for(210), 10);
            assert_eq!(threshold_for(3599), 10);
        }
    }

    mod threshold_mode_tests {
        use super::*;

        #[test]
        fn test_warns_only_at_threshold() {
            let mut notifier = ThresholdNotifier::default();
            assert_eq!(notifier.evaluate(11, 120), None);
            assert_eq!(notifier.evaluate(10, 120), warning(10));
            assert_eq!(notifier.evaluate(9, 120), None);
            assert_eq!(notifier.evaluate(1, 120), None);
        }

        #[test]
        fn test_short_timer_threshold() {
            let mut notifier = ThresholdNotifier::default();
            assert_eq!(notifier.evaluate(10, 15), None);
            assert_eq!(notifier.evaluate(3, 15), warning(3));
        }

        #[test]
        fn test_same_value_is_not_announced_twice() {
            let mut notifier = ThresholdNotifier::default();
            assert_eq!(notifier.evaluate(10, 120), warning(10));
            assert_eq!(notifier.evaluate(10, 120), None);
            assert_eq!(notifier.last_announced(), Some(10));
        }

        #[test]
        fn test_clear_allows_announcing_again() {
            let mut notifier = ThresholdNotifier::default();
            notifier.evaluate(10, 120);
            notifier.clear();
            assert_eq!(notifier.evaluate(10, 120), warning(10));
        }
    }

    mod every_second_mode_tests {
        use super::*;

        #[test]
        fn test_warns_every_second_under_threshold() {
            let mut notifier = ThresholdNotifier::new(WarningMode::EverySecond);
            assert_eq!(notifier.evaluate(4, 30), None);
            assert_eq!(notifier.evaluate(3, 30), warning(3));
            assert_eq!(notifier.evaluate(2, 30), warning(2));
            assert_eq!(notifier.evaluate(1, 30), warning(1));
        }

        #[test]
        fn test_no_duplicate_for_same_second() {
            let mut notifier = ThresholdNotifier::new(WarningMode::EverySecond);
            assert_eq!(notifier.evaluate(2, 30), warning(2));
            assert_eq!(notifier.evaluate(2, 30), None);
        }
    }

    mod completion_tests {
        use super::*;

        #[test]
        fn test_zero_is_completion() {
            let mut notifier = ThresholdNotifier::default();
            assert_eq!(notifier.evaluate(0, 120), Some(NotificationEvent::Completion));
        }

        #[test]
        fn test_completion_clears_guard() {
            let mut notifier = ThresholdNotifier::default();
            notifier.evaluate(10, 120);
            notifier.evaluate(0, 120);
            assert_eq!(notifier.last_announced(), None);
        }
    }

    #[test]
    fn test_warning_mode_as_str_matches_serde() {
        for mode in [WarningMode::Threshold, WarningMode::EverySecond] {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
        }
    }

    #[test]
    fn test_notifier_keeps_mode() {
        assert_eq!(ThresholdNotifier::default().mode(), WarningMode::Threshold);
        assert_eq!(
            ThresholdNotifier::new(WarningMode::EverySecond).mode(),
            WarningMode::EverySecond
        );
    }

    #[test]
    fn test_warning_mode_serde() {
        let json = serde_json::to_string(&WarningMode::EverySecond).unwrap();
        assert_eq!(json, "\"every-second\"");
        let mode: WarningMode = serde_json::from_str("\"threshold\"").unwrap();
        assert_eq!(mode, WarningMode::Threshold);
    }
}
