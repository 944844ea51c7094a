//! Core game logic module - pure, deterministic, and testable
//!
//! Everything the falling-label game needs besides a keyboard and a screen:
//!
//! - **Deterministic**: randomness comes from an injected [`RandomSource`], time
//!   from an injected [`Clock`]; the same seed and the same clock replay the
//!   same game
//! - **I/O free**: input and output are reached only through the
//!   [`KeySource`] and [`ConsoleOutput`] traits
//! - **Bounded**: the token pool is allocated once and recycled
//!
//! # Module Structure
//!
//! - [`config`]: session parameters and their validation
//! - [`grid`]: playfield, token pool, goal line, score and text buffer
//! - [`token`]: a single poolable falling label
//! - [`pacer`]: adaptive loop delay and the render gate
//! - [`rng`]: injectable random sources
//! - [`console`]: collaborator traits for keyboard and screen
//!
//! # Example
//!
//! ```
//! use tui_keyfall_core::{GameConfig, Grid, ScriptedRng};
//!
//! let config = GameConfig::default();
//! // Spawn in column 4 with the first label of the alphabet.
//! let mut grid = Grid::new(&config, ScriptedRng::new(vec![4, 0])).unwrap();
//!
//! grid.spawn_one();
//! for _ in 0..grid.goal_row() {
//!     grid.advance_and_cull();
//! }
//!
//! assert_eq!(grid.check_goal('1'), 1);
//! assert_eq!(grid.score(), 1);
//! ```

pub mod config;
pub mod console;
pub mod grid;
pub mod pacer;
pub mod rng;
pub mod token;

pub use tui_keyfall_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig};
pub use console::{ConsoleOutput, KeySource};
pub use grid::{Grid, GridStats};
pub use pacer::{Clock, ManualClock, Pacer, SystemClock};
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use token::Token;
