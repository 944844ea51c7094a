//! Terminal output module.
//!
//! Two [`ConsoleOutput`](crate::core::ConsoleOutput) implementations:
//!
//! - [`TerminalRenderer`]: raw-mode crossterm terminal on the alternate screen
//! - [`TextConsole`]: keeps the last frame in memory (tests, headless runs)

pub mod renderer;
pub mod text;

pub use tui_keyfall_core as core;
pub use tui_keyfall_types as types;

pub use renderer::{encode_clear_into, encode_line_into, TerminalRenderer};
pub use text::TextConsole;
