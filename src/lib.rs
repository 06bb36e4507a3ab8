//! Snake arcade game.
//!
//! The `game` module holds the pure state machine and has no window or I/O
//! dependencies. The remaining modules are the macroquad glue the binary
//! wires together.

pub mod audio;
pub mod game;
pub mod input;
pub mod render;
pub mod save;
