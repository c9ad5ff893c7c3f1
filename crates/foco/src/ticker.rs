//! The one-second tick schedule
//!
//! Stands in for a repeating interval callback inside a cooperative event
//! loop. At most one deadline is armed at a time: `start` replaces any prior
//! deadline and `stop` clears it, so a paused or reset countdown never sees a
//! stale tick.

use std::time::{Duration, Instant};

/// Default tick period
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A single repeating deadline
#[derive(Debug, Clone)]
pub struct TickSchedule {
    period: Duration,
    next: Option<Instant>,
}

impl Default for TickSchedule {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl TickSchedule {
    pub fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    pub fn is_armed(&self) -> bool {
        self.next.is_some()
    }

    /// Arm the schedule, discarding any previous deadline
    pub fn start(&mut self, now: Instant) {
        if self.next.is_some() {
            tracing::trace!("replacing armed tick schedule");
        }
        self.next = Some(now + self.period);
    }

    /// Disarm the schedule
    pub fn stop(&mut self) {
        self.next = None;
    }

    /// Consume one due tick, if any.
    ///
    /// The deadline advances by exactly one period, so after a stall the
    /// caller sees the missed ticks one call at a time.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next {
            Some(deadline) if now >= deadline => {
                self.next = Some(deadline + self.period);
                true
            }
            _ => false,
        }
    }

    /// How long the event loop may block before the next tick is due
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.next.map(|deadline| deadline.saturating_duration_since(now))
    }
}
