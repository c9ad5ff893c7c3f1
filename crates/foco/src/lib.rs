//! foco - Focus countdown and mood log
//!
//! "Protect the focus, notice the mood."
//!
//! Two independent state slices on one screen:
//! - a countdown timer with an adjustable duration (1 to 120 minutes)
//! - a bounded, newest-first log of self-reported moods
//!
//! The view dispatches [`app::Action`]s into [`app::AppState`]; the
//! [`runtime::Runtime`] applies the resulting effects (tick scheduling and
//! haptic pulses).

pub mod app;
pub mod keys;
pub mod mood;
pub mod runtime;
pub mod ticker;
pub mod timer;
pub mod ui;

pub use app::{Action, AppState, Effect, Tab};
pub use mood::{MoodBoard, MoodEntry, MoodKey, MoodLog, MoodTable};
pub use runtime::Runtime;
pub use ticker::TickSchedule;
pub use timer::{Countdown, TimerPhase};
