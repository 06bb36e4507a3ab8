//! Core game logic: snake movement, apple placement, collisions and run state.

pub mod cell;
pub mod config;
pub mod direction;
pub mod state;
pub mod ticker;

pub use cell::Cell;
pub use config::{ConfigError, GameConfig};
pub use direction::Direction;
pub use state::{GameState, RunState, TickOutcome};
pub use ticker::Ticker;
