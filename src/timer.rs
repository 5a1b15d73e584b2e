//! Wall-clock deadline shared by the time-bounded drivers.

use std::time::{Duration, Instant};

/// A deadline that is checked, not enforced.
///
/// Drivers call [`Timer::tick`] once per outer iteration; an iteration that is
/// already running always completes, so a run may overshoot its budget by up to
/// one iteration.
#[derive(Debug, Clone)]
pub struct Timer {
    start: Instant,
    max_duration: Duration,
    stopped: bool,
}

impl Timer {
    /// Start a timer that expires after `max_duration`.
    pub fn new(max_duration: Duration) -> Self {
        Timer {
            start: Instant::now(),
            max_duration,
            stopped: max_duration.is_zero(),
        }
    }

    /// Start a timer from a budget in milliseconds.
    pub fn from_millis(millis: u64) -> Self {
        Timer::new(Duration::from_millis(millis))
    }

    /// Sample the clock and latch the stopped flag once the budget is spent.
    pub fn tick(&mut self) {
        if self.start.elapsed() >= self.max_duration {
            self.stopped = true;
        }
    }

    /// Whether the last tick observed an expired budget.
    pub fn has_stopped(&self) -> bool {
        self.stopped
    }

    /// Time since the timer was started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
