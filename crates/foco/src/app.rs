//! Application state and the action reducer
//!
//! The view dispatches [`Action`]s into [`AppState::update`], which mutates
//! the state and hands back the [`Effect`]s the shell must perform. Nothing
//! here touches the clock, the terminal or the vibrator directly.

use chrono::{DateTime, Local};
use foco_core::Config;
use foco_haptic::{CONFIRM_PULSE_MS, EXPIRY_PULSE_MS};

use crate::mood::{MoodBoard, MoodEntry, MoodKey, MoodOption, MoodTable};
use crate::timer::{Countdown, TickOutcome, TimerPhase};

/// Screen tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Timer,
    Mood,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Timer, Tab::Mood];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Timer => "Timer",
            Tab::Mood => "Mood",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Timer => 0,
            Tab::Mood => 1,
        }
    }

    pub fn next(&self) -> Tab {
        match self {
            Tab::Timer => Tab::Mood,
            Tab::Mood => Tab::Timer,
        }
    }
}

/// User intents and the periodic tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AdjustDuration(i32),
    ToggleRun,
    Tick,
    Reset,
    SelectMood(MoodKey),
    SelectNextMood,
    SelectPrevMood,
    RegisterMood,
    SwitchTab(Tab),
    NextTab,
}

/// Side effects requested by the reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Arm the one-second tick, replacing any armed one
    StartTicking,
    /// Disarm the tick
    StopTicking,
    /// Haptic pulse of the given milliseconds
    Vibrate(u32),
}

/// Read model for the timer tab
#[derive(Debug, Clone, PartialEq)]
pub struct TimerView {
    pub duration_minutes: u32,
    pub remaining_seconds: u32,
    pub running: bool,
    pub progress: f64,
    pub phase: TimerPhase,
}

/// Read model for the mood tab
#[derive(Debug, Clone)]
pub struct MoodView<'a> {
    pub options: &'a [MoodOption],
    pub pending: Option<MoodKey>,
    pub log: Vec<&'a MoodEntry>,
}

/// Everything the view needs for one render
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    pub tab: Tab,
    pub timer: TimerView,
    pub mood: MoodView<'a>,
}

/// The whole screen's state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    tab: Tab,
    timer: Countdown,
    moods: MoodBoard,
}

impl AppState {
    pub fn new(timer: Countdown, moods: MoodBoard) -> Self {
        Self {
            tab: Tab::default(),
            timer,
            moods,
        }
    }

    /// Build the initial state from config, with an optional minutes override
    pub fn from_config(config: &Config, minutes: Option<u32>) -> Self {
        let timer = Countdown::new(minutes.unwrap_or(config.timer.default_minutes));
        let table = MoodTable::with_overrides(&config.mood.labels);
        Self::new(timer, MoodBoard::new(table, config.mood.time_format.clone()))
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn timer(&self) -> &Countdown {
        &self.timer
    }

    pub fn moods(&self) -> &MoodBoard {
        &self.moods
    }

    /// Apply one action. `now` stamps any mood entry created.
    pub fn update(&mut self, action: Action, now: DateTime<Local>) -> Vec<Effect> {
        match action {
            Action::AdjustDuration(delta) => {
                if self.timer.set_duration(delta) {
                    tracing::debug!(minutes = self.timer.duration_minutes(), "duration changed");
                }
                Vec::new()
            }
            Action::ToggleRun => {
                if self.timer.toggle_run() {
                    tracing::info!(remaining = self.timer.remaining_seconds(), "countdown started");
                    vec![Effect::StartTicking]
                } else {
                    tracing::info!(
                        remaining = self.timer.remaining_seconds(),
                        phase = self.timer.phase().as_str(),
                        "countdown stopped"
                    );
                    vec![Effect::StopTicking]
                }
            }
            Action::Tick => match self.timer.tick() {
                TickOutcome::Counted => Vec::new(),
                TickOutcome::Expired => {
                    tracing::info!(minutes = self.timer.duration_minutes(), "countdown expired");
                    vec![Effect::StopTicking, Effect::Vibrate(EXPIRY_PULSE_MS)]
                }
                // A tick with nothing running means the schedule outlived the run
                TickOutcome::Ignored => vec![Effect::StopTicking],
            },
            Action::Reset => {
                self.timer.reset();
                tracing::debug!("countdown reset");
                vec![Effect::StopTicking]
            }
            Action::SelectMood(key) => {
                self.moods.select(key);
                Vec::new()
            }
            Action::SelectNextMood => {
                self.moods.select_next();
                Vec::new()
            }
            Action::SelectPrevMood => {
                self.moods.select_prev();
                Vec::new()
            }
            Action::RegisterMood => match self.moods.register(now) {
                Some(entry) => {
                    tracing::info!(mood = entry.mood.as_str(), id = entry.id, "mood registered");
                    vec![Effect::Vibrate(CONFIRM_PULSE_MS)]
                }
                None => Vec::new(),
            },
            Action::SwitchTab(tab) => {
                self.tab = tab;
                Vec::new()
            }
            Action::NextTab => {
                self.tab = self.tab.next();
                Vec::new()
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            tab: self.tab,
            timer: TimerView {
                duration_minutes: self.timer.duration_minutes(),
                remaining_seconds: self.timer.remaining_seconds(),
                running: self.timer.running(),
                progress: self.timer.progress(),
                phase: self.timer.phase(),
            },
            mood: MoodView {
                options: self.moods.options(),
                pending: self.moods.pending(),
                log: self.moods.log().iter().collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn run(state: &mut AppState, action: Action) -> Vec<Effect> {
        state.update(action, Local::now())
    }

    #[test]
    fn test_scenario_full_cycle() {
        let mut state = AppState::default();
        assert_eq!(run(&mut state, Action::ToggleRun), vec![Effect::StartTicking]);

        let mut effects = Vec::new();
        for _ in 0..1500 {
            effects.extend(run(&mut state, Action::Tick));
        }

        let snap = state.snapshot();
        assert_eq!(snap.timer.remaining_seconds, 0);
        assert!(!snap.timer.running);
        assert_eq!(snap.timer.phase, TimerPhase::Expired);
        assert_eq!(snap.timer.progress, 1.0);
        assert_eq!(effects, vec![Effect::StopTicking, Effect::Vibrate(500)]);
    }

    #[test]
    fn test_adjust_while_running_is_noop() {
        let mut state = AppState::default();
        run(&mut state, Action::ToggleRun);
        run(&mut state, Action::Tick);
        let before = state.timer().clone();

        assert!(run(&mut state, Action::AdjustDuration(5)).is_empty());
        assert_eq!(state.timer(), &before);
    }

    #[test]
    fn test_adjust_scenario() {
        let mut state = AppState::default();
        run(&mut state, Action::AdjustDuration(5));
        assert_eq!(state.snapshot().timer.duration_minutes, 30);
        run(&mut state, Action::AdjustDuration(200));
        assert_eq!(state.snapshot().timer.duration_minutes, 120);
        assert_eq!(state.snapshot().timer.remaining_seconds, 7200);
    }

    #[test]
    fn test_pause_and_reset_stop_ticking() {
        let mut state = AppState::default();
        run(&mut state, Action::ToggleRun);
        assert_eq!(run(&mut state, Action::ToggleRun), vec![Effect::StopTicking]);

        run(&mut state, Action::ToggleRun);
        run(&mut state, Action::Tick);
        assert_eq!(run(&mut state, Action::Reset), vec![Effect::StopTicking]);

        let snap = state.snapshot();
        assert_eq!(snap.timer.remaining_seconds, 1500);
        assert!(!snap.timer.running);
    }

    #[test]
    fn test_stray_tick_requests_stop() {
        let mut state = AppState::default();
        assert_eq!(run(&mut state, Action::Tick), vec![Effect::StopTicking]);
        assert_eq!(state.timer().remaining_seconds(), 1500);
    }

    #[test]
    fn test_register_scenario() {
        let mut state = AppState::default();
        run(&mut state, Action::SwitchTab(Tab::Mood));
        run(&mut state, Action::SelectMood(MoodKey::Tired));
        let now = Local::now();
        let effects = state.update(Action::RegisterMood, now);

        assert_eq!(effects, vec![Effect::Vibrate(50)]);
        let snap = state.snapshot();
        assert_eq!(snap.tab, Tab::Mood);
        assert_eq!(snap.mood.pending, None);
        assert_eq!(snap.mood.log.len(), 1);
        assert_eq!(snap.mood.log[0].mood, MoodKey::Tired);
        assert_eq!(snap.mood.log[0].label, "😕 Tired");
        assert_eq!(snap.mood.log[0].time, now.format("%H:%M").to_string());
    }

    #[test]
    fn test_register_without_selection() {
        let mut state = AppState::default();
        assert!(run(&mut state, Action::RegisterMood).is_empty());
        assert!(state.snapshot().mood.log.is_empty());
    }

    #[test]
    fn test_register_twenty_five() {
        let mut state = AppState::default();
        for _ in 0..25 {
            run(&mut state, Action::SelectNextMood);
            run(&mut state, Action::RegisterMood);
        }
        let snap = state.snapshot();
        assert_eq!(snap.mood.log.len(), 20);
        // Selection restarts at the first mood after each registration
        assert!(snap.mood.log.iter().all(|e| e.mood == MoodKey::Great));
        assert!(snap.mood.log.windows(2).all(|w| w[0].id > w[1].id));
    }

    #[test]
    fn test_tabs() {
        let mut state = AppState::default();
        assert_eq!(state.tab(), Tab::Timer);
        run(&mut state, Action::NextTab);
        assert_eq!(state.tab(), Tab::Mood);
        run(&mut state, Action::NextTab);
        assert_eq!(state.tab(), Tab::Timer);
        assert_eq!(Tab::Mood.index(), 1);
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.timer.default_minutes = 500;
        let mut labels = BTreeMap::new();
        labels.insert("great".to_string(), "woo".to_string());
        config.mood.labels = labels;

        let state = AppState::from_config(&config, None);
        assert_eq!(state.timer().duration_minutes(), 120);
        assert_eq!(state.snapshot().mood.options[0].label, "woo");

        let state = AppState::from_config(&config, Some(10));
        assert_eq!(state.timer().duration_minutes(), 10);
    }
}
