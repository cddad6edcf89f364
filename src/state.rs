use crate::input::Key;
use crate::snake::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    Playing,
    Paused,
    GameOver,
}

/// What a key press asks the engine to do in the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Fresh game or restart: re-initializes everything and enters `Playing`.
    Start,
    Pause,
    Resume,
    Steer(Direction),
    Ignore,
}

impl GamePhase {
    pub fn on_key(self, key: Key) -> Transition {
        match (self, key) {
            (GamePhase::NotStarted, _) | (GamePhase::GameOver, _) => Transition::Start,
            (GamePhase::Playing, Key::Escape) => Transition::Pause,
            (GamePhase::Playing, key) => key.direction().map_or(Transition::Ignore, Transition::Steer),
            (GamePhase::Paused, Key::Escape) => Transition::Resume,
            (GamePhase::Paused, _) => Transition::Ignore,
        }
    }

    pub fn next(self, transition: Transition) -> GamePhase {
        match transition {
            Transition::Start | Transition::Resume => GamePhase::Playing,
            Transition::Pause => GamePhase::Paused,
            Transition::Steer(_) | Transition::Ignore => self,
        }
    }

    /// Phase after a tick that ended in self-collision.
    pub fn on_collision(self) -> GamePhase {
        match self {
            GamePhase::Playing => GamePhase::GameOver,
            other => other,
        }
    }

    pub fn is_simulating(&self) -> bool {
        *self == GamePhase::Playing
    }
}
