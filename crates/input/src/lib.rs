//! Terminal input module (game-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::GameKey`] and turns the
//! terminal's press/repeat stream into the "is this key held" queries the game
//! loop polls each iteration (including terminals without key-release
//! events).

pub mod map;
pub mod state;
pub mod terminal;

pub use tui_keyfall_core as core;
pub use tui_keyfall_types as types;

pub use map::{map_key, should_quit};
pub use state::KeyState;
pub use terminal::TerminalKeys;
