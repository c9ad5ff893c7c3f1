//! Runtime shell: owns the state, the tick schedule and the haptic backend,
//! and carries out the effects the reducer asks for.

use chrono::{DateTime, Local};
use foco_haptic::Haptic;
use std::time::{Duration, Instant};

use crate::app::{Action, AppState, Effect};
use crate::ticker::TickSchedule;

pub struct Runtime {
    state: AppState,
    ticks: TickSchedule,
    haptic: Box<dyn Haptic>,
}

impl Runtime {
    pub fn new(state: AppState, haptic: Box<dyn Haptic>) -> Self {
        Self::with_schedule(state, TickSchedule::default(), haptic)
    }

    pub fn with_schedule(state: AppState, ticks: TickSchedule, haptic: Box<dyn Haptic>) -> Self {
        Self {
            state,
            ticks,
            haptic,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn is_ticking(&self) -> bool {
        self.ticks.is_armed()
    }

    /// Dispatch a user action at the current time
    pub fn dispatch(&mut self, action: Action) {
        self.dispatch_at(action, Instant::now(), Local::now());
    }

    /// Dispatch with explicit monotonic and wall-clock times
    pub fn dispatch_at(&mut self, action: Action, now: Instant, wall: DateTime<Local>) {
        let effects = self.state.update(action, wall);
        for effect in effects {
            self.apply(effect, now);
        }
    }

    /// Run every tick that has come due by `now`. Returns how many ran.
    pub fn pump(&mut self, now: Instant) -> u32 {
        let mut ran = 0;
        while self.ticks.poll(now) {
            self.dispatch_at(Action::Tick, now, Local::now());
            ran += 1;
        }
        ran
    }

    /// How long the event loop may wait for input before the next tick
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.ticks.timeout(now)
    }

    /// Stop future ticks; called when the screen goes away
    pub fn shutdown(&mut self) {
        self.ticks.stop();
    }

    fn apply(&mut self, effect: Effect, now: Instant) {
        match effect {
            Effect::StartTicking => self.ticks.start(now),
            Effect::StopTicking => self.ticks.stop(),
            Effect::Vibrate(ms) => foco_haptic::pulse(self.haptic.as_ref(), ms),
        }
    }
}
