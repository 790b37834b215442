//! Recurring tick timing
//!
//! Portable interval timer without async or platform timers: the owner asks
//! whether a tick is due for the current instant and reports when it fired.
//! Cancelling a tick is dropping its timer.

use embassy_time::{Duration, Instant};

/// Longest accepted interval or duration, one day in milliseconds
pub const MAX_TIMER_MS: f64 = 86_400_000.0;

/// Deadline tracker for one recurring callback
#[derive(Debug, Clone, Copy)]
pub struct TickTimer {
    interval: Duration,
    next: Instant,
}

impl TickTimer {
    /// Timer whose first tick fires one `interval` after `now`
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next: later(now, interval),
        }
    }

    /// Instant of the next tick
    pub const fn deadline(&self) -> Instant {
        self.next
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Record that the tick fired at `now` and schedule the next one
    ///
    /// After a stall of more than two intervals the backlog is dropped
    /// instead of replayed as a burst of ticks.
    pub fn advance(&mut self, now: Instant) {
        let max_drift = self.interval.checked_add(self.interval).unwrap_or(Duration::MAX);
        if now > later(self.next, max_drift) {
            self.next = now;
        }
        self.next = later(self.next, self.interval);
    }
}

/// `at + by`, saturating at the end of time
fn later(at: Instant, by: Duration) -> Instant {
    at.checked_add(by).unwrap_or(Instant::MAX)
}

/// Convert fractional milliseconds, keeping microsecond precision
///
/// Never returns a zero duration, so a timer built from it always advances.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn duration_from_millis(ms: f64) -> Duration {
    let micros = libm::round(ms * 1000.0);
    if micros.is_nan() || micros < 1.0 {
        return Duration::from_micros(1);
    }
    Duration::from_micros(micros as u64)
}
