//! Countdown timer state machine
//!
//! A configured duration, a remaining-seconds counter and a running flag.
//! The counter only moves through [`Countdown::tick`], and the duration only
//! moves while the countdown is stopped.

use serde::Serialize;

/// Shortest allowed focus cycle, in minutes
pub const MIN_MINUTES: u32 = 1;
/// Longest allowed focus cycle, in minutes
pub const MAX_MINUTES: u32 = 120;
/// Duration a fresh countdown starts with
pub const DEFAULT_MINUTES: u32 = 25;

/// Phase of the countdown, derived from its fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    /// Stopped with time left (full or partially used)
    Idle,
    /// Counting down
    Running,
    /// Reached zero; stays here until reset or a duration change
    Expired,
}

impl TimerPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Idle => "idle",
            TimerPhase::Running => "running",
            TimerPhase::Expired => "expired",
        }
    }
}

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed
    Ignored,
    /// One second elapsed, time remains
    Counted,
    /// This tick took the counter to zero
    Expired,
}

/// Clamp a minute count into the allowed range
pub fn clamp_minutes(minutes: i64) -> u32 {
    minutes.clamp(MIN_MINUTES as i64, MAX_MINUTES as i64) as u32
}

/// The countdown state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Countdown {
    duration_minutes: u32,
    remaining_seconds: u32,
    running: bool,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_MINUTES)
    }
}

impl Countdown {
    /// A stopped countdown with `minutes` (clamped) on the clock
    pub fn new(minutes: u32) -> Self {
        let duration_minutes = clamp_minutes(minutes as i64);
        Self {
            duration_minutes,
            remaining_seconds: duration_minutes * 60,
            running: false,
        }
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn running(&self) -> bool {
        self.running
    }

    /// Full length of the configured cycle in seconds
    pub fn total_seconds(&self) -> u32 {
        self.duration_minutes * 60
    }

    pub fn phase(&self) -> TimerPhase {
        if self.running {
            TimerPhase::Running
        } else if self.remaining_seconds == 0 {
            TimerPhase::Expired
        } else {
            TimerPhase::Idle
        }
    }

    /// Fraction of the cycle already elapsed, in [0, 1]
    pub fn progress(&self) -> f64 {
        if self.remaining_seconds == 0 {
            return 1.0;
        }
        1.0 - self.remaining_seconds as f64 / self.total_seconds() as f64
    }

    /// Shift the duration by `delta` minutes and refill the counter.
    ///
    /// Returns false (and changes nothing) while running.
    pub fn set_duration(&mut self, delta: i32) -> bool {
        if self.running {
            return false;
        }
        self.duration_minutes = clamp_minutes(self.duration_minutes as i64 + delta as i64);
        self.remaining_seconds = self.total_seconds();
        true
    }

    /// Start or pause. Returns the new running flag.
    ///
    /// An expired countdown has nothing left to run and stays stopped.
    pub fn toggle_run(&mut self) -> bool {
        if self.running {
            self.running = false;
        } else if self.remaining_seconds > 0 {
            self.running = true;
        }
        self.running
    }

    /// Advance one second
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Ignored;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.running = false;
            return TickOutcome::Expired;
        }
        TickOutcome::Counted
    }

    /// Stop and refill to the configured duration
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_seconds = self.total_seconds();
    }
}
