use crossterm::event::KeyCode;

use crate::snake::Direction;

/// Keys the game distinguishes. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl Key {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Key::ArrowUp => Some(Direction::Up),
            Key::ArrowDown => Some(Direction::Down),
            Key::ArrowLeft => Some(Direction::Left),
            Key::ArrowRight => Some(Direction::Right),
            Key::Escape | Key::Other => None,
        }
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Key::ArrowUp,
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Key::ArrowDown,
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Key::ArrowLeft,
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Key::ArrowRight,
            KeyCode::Esc => Key::Escape,
            _ => Key::Other,
        }
    }
}
