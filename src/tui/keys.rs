use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::terminal::RawModeGuard;

/// What a keypress asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate,
    Longer,
    Shorter,
    ToggleDigits,
    ToggleSymbols,
    ToggleUppercase,
    Copy,
    Quit,
}

/// Wait for a key, at most `timeout` when one is given. `None` on timeout or
/// unmapped keys.
pub fn next_action(timeout: Option<Duration>) -> std::io::Result<Option<Action>> {
    let _guard = RawModeGuard::new()?;

    if let Some(timeout) = timeout
        && !event::poll(timeout)?
    {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key)),
        _ => Ok(None),
    }
}

pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('g') => Some(Action::Generate),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right | KeyCode::Up => {
            Some(Action::Longer)
        }
        KeyCode::Char('-') | KeyCode::Left | KeyCode::Down => Some(Action::Shorter),
        KeyCode::Char('d') => Some(Action::ToggleDigits),
        KeyCode::Char('s') => Some(Action::ToggleSymbols),
        KeyCode::Char('u') => Some(Action::ToggleUppercase),
        KeyCode::Char('c') => Some(Action::Copy),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}
