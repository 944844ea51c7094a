//! TUI Keyfall (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_keyfall::{core,engine,input,term,types}`.

pub use tui_keyfall_core as core;
pub use tui_keyfall_engine as engine;
pub use tui_keyfall_input as input;
pub use tui_keyfall_term as term;
pub use tui_keyfall_types as types;
