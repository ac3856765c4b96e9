//! Clock driver for the countdown engine.
//!
//! Wraps a `tokio::time::Interval` that only exists while the countdown is
//! running. Dropping the interval is the cancellation; a new schedule always
//! starts one full period after `schedule()`.

use std::future;

use tokio::time::{interval_at, Duration, Instant, Interval, MissedTickBehavior};

/// Default tick period.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Periodic tick source with a single cancellation handle.
#[derive(Debug)]
pub struct ClockDriver {
    period: Duration,
    ticker: Option<Interval>,
}

impl ClockDriver {
    /// Creates an unscheduled driver with the given period.
    ///
    /// A zero period is raised to one millisecond.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            ticker: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Starts a fresh schedule, replacing any existing one.
    pub fn schedule(&mut self) {
        let mut ticker = interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.ticker = Some(ticker);
    }

    /// Cancels the pending schedule.
    ///
    /// Returns true if a schedule was active.
    pub fn cancel(&mut self) -> bool {
        self.ticker.take().is_some()
    }

    /// Returns true if ticks are scheduled.
    pub fn is_scheduled(&self) -> bool {
        self.ticker.is_some()
    }

    /// Waits for the next tick.
    ///
    /// Never resolves while nothing is scheduled.
    pub async fn next_tick(&mut self) {
        match self.ticker.as_mut() {
            Some(ticker) => {
                ticker.tick().await;
            }
            None => future::pending::<()>().await,
        }
    }
}

impl Default for ClockDriver {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[test]
    fn test_new_is_unscheduled() {
        let driver = ClockDriver::default();
        assert!(!driver.is_scheduled());
        assert_eq!(driver.period(), Duration::from_secs(1));
    }

    #[test]
    fn test_zero_period_is_raised() {
        let driver = ClockDriver::new(Duration::ZERO);
        assert_eq!(driver.period(), Duration::from_millis(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let mut driver = ClockDriver::default();
        driver.schedule();
        assert!(driver.is_scheduled());

        assert!(driver.cancel());
        assert!(!driver.is_scheduled());
        assert!(!driver.cancel());
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let mut driver = ClockDriver::default();
        driver.schedule();

        let early = timeout(Duration::from_millis(999), driver.next_tick()).await;
        assert!(early.is_err(), "Tick fired before a full period elapsed");

        let on_time = timeout(Duration::from_millis(10), driver.next_tick()).await;
        assert!(on_time.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unscheduled_never_ticks() {
        let mut driver = ClockDriver::default();
        let result = timeout(Duration::from_secs(10), driver.next_tick()).await;
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_starts_fresh() {
        let mut driver = ClockDriver::default();
        driver.schedule();
        tokio::time::sleep(Duration::from_millis(900)).await;

        driver.cancel();
        driver.schedule();

        // The old schedule would have fired 100ms from now.
        let result = timeout(Duration::from_millis(500), driver.next_tick()).await;
        assert!(result.is_err());
    }
}
