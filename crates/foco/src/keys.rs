//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{Action, Tab};
use crate::mood::MoodKey;

/// What a key press asks the event loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    ToggleHelp,
    Dispatch(Action),
}

/// Map a key press on `tab` to a command
pub fn action_for(tab: Tab, key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    let global = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('?') => Some(Command::ToggleHelp),
        KeyCode::Tab | KeyCode::BackTab => Some(Command::Dispatch(Action::NextTab)),
        KeyCode::Char('t') => Some(Command::Dispatch(Action::SwitchTab(Tab::Timer))),
        KeyCode::Char('m') => Some(Command::Dispatch(Action::SwitchTab(Tab::Mood))),
        _ => None,
    };
    if global.is_some() {
        return global;
    }

    let action = match tab {
        Tab::Timer => timer_action(key.code),
        Tab::Mood => mood_action(key.code),
    };
    action.map(Command::Dispatch)
}

fn timer_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Enter => Some(Action::ToggleRun),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Some(Action::AdjustDuration(1)),
        KeyCode::Char('-') | KeyCode::Down => Some(Action::AdjustDuration(-1)),
        KeyCode::Char(']') | KeyCode::PageUp => Some(Action::AdjustDuration(5)),
        KeyCode::Char('[') | KeyCode::PageDown => Some(Action::AdjustDuration(-5)),
        _ => None,
    }
}

fn mood_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            Some(Action::SelectMood(MoodKey::ALL[index]))
        }
        KeyCode::Right | KeyCode::Char('l') => Some(Action::SelectNextMood),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::SelectPrevMood),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::RegisterMood),
        _ => None,
    }
}
