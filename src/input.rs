use crate::game::{Direction, GameState};
use macroquad::prelude::{KeyCode, is_key_pressed};
use rand::Rng;

/// A decoded key press.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Intent {
    Turn(Direction),
    Restart,
}

// Polled in this order so several presses in one frame queue predictably.
const WATCHED_KEYS: [KeyCode; 10] = [
    KeyCode::Up,
    KeyCode::W,
    KeyCode::Down,
    KeyCode::S,
    KeyCode::Left,
    KeyCode::A,
    KeyCode::Right,
    KeyCode::D,
    KeyCode::Space,
    KeyCode::R,
];

impl Intent {
    pub fn from_key(key: KeyCode) -> Option<Intent> {
        match key {
            KeyCode::Up | KeyCode::W => Some(Intent::Turn(Direction::Up)),
            KeyCode::Down | KeyCode::S => Some(Intent::Turn(Direction::Down)),
            KeyCode::Left | KeyCode::A => Some(Intent::Turn(Direction::Left)),
            KeyCode::Right | KeyCode::D => Some(Intent::Turn(Direction::Right)),
            KeyCode::Space | KeyCode::R => Some(Intent::Restart),
            _ => None,
        }
    }
}

/// Intents pressed since the last frame.
pub fn poll_intents() -> Vec<Intent> {
    WATCHED_KEYS
        .iter()
        .filter(|key| is_key_pressed(**key))
        .filter_map(|key| Intent::from_key(*key))
        .collect()
}

/// Feed one intent to the game. Restart only works once the game is over.
/// Returns true if the game was restarted.
pub fn apply<R: Rng>(state: &mut GameState<R>, intent: Intent) -> bool {
    match intent {
        Intent::Turn(direction) => {
            state.set_direction(direction);
            false
        }
        Intent::Restart if !state.is_running() => {
            state.restart();
            true
        }
        Intent::Restart => false,
    }
}
