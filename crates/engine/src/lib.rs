//! Game loop - wires the pacer, the grid and the collaborators together.
//!
//! One iteration of [`Game::step`]:
//!
//! 1. poll the key source and score the first held alphabet key,
//! 2. if the render gate fires: advance the simulation one tick and render,
//! 3. stop when the quit key is held,
//! 4. throttle (the only place the loop sleeps).
//!
//! All grid mutation happens inside `step`, on the caller's thread.

pub mod game;

pub use tui_keyfall_core as core;
pub use tui_keyfall_types as types;

pub use game::{Game, SessionSummary};
