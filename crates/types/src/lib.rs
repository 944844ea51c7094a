//! Core types module - shared constants and the logical key set
//!
//! Everything here is plain data with no dependencies, usable from the game
//! logic, the terminal collaborators and the binary alike.
//!
//! # Reference Playfield
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_WIDTH` | 10 | Columns a token can spawn in |
//! | `GRID_HEIGHT` | 20 | Rows in the playfield |
//! | `GOAL_OFFSET` | 3 | Goal row sits this many rows above the bottom edge |
//! | `MAX_ACTIVE_TOKENS` | 20 | Size of the token pool |
//! | `DEFAULT_ALPHABET` | `"123"` | Labels a token can carry |
//!
//! # Pacing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TARGET_UPDATES_PER_SECOND` | 200 | Loop frequency the pacer steers toward |
//! | `RENDER_INTERVAL_MS` | 300 | Minimum gap between rendered frames |
//! | `INITIAL_REFRESH_DELAY_MS` | 10 | Starting per-iteration sleep |
//! | `REFRESH_DELAY_STEP_MS` | 10 | Adjustment applied once per sampled second |
//! | `PACER_WINDOW_MS` | 1000 | Sampling window of the loop controller |
//!
//! # Examples
//!
//! ```
//! use tui_keyfall_types::{GameKey, GRID_HEIGHT, GOAL_OFFSET};
//!
//! assert_eq!(GRID_HEIGHT - GOAL_OFFSET, 17);
//! assert!(GameKey::Quit.is_quit());
//! assert_eq!(GameKey::Label('1').label(), Some('1'));
//! ```

/// Grid width in columns (10)
pub const GRID_WIDTH: usize = 10;

/// Grid height in rows (20)
pub const GRID_HEIGHT: usize = 20;

/// Distance of the goal row from the bottom edge (goal row = height - offset)
pub const GOAL_OFFSET: usize = 3;

/// Token pool size
pub const MAX_ACTIVE_TOKENS: usize = 20;

/// Labels a spawned token can carry, also the scoring keys
pub const DEFAULT_ALPHABET: &str = "123";

/// Target loop iterations per second for the adaptive delay
pub const TARGET_UPDATES_PER_SECOND: u32 = 200;

/// Minimum interval between two rendered (and simulated) frames
pub const RENDER_INTERVAL_MS: u64 = 300;

/// Seed value of the adaptive loop delay
pub const INITIAL_REFRESH_DELAY_MS: u64 = 10;

/// Fixed step of the loop delay controller
pub const REFRESH_DELAY_STEP_MS: u64 = 10;

/// Lower bound of the loop delay
pub const MIN_REFRESH_DELAY_MS: u64 = 0;

/// Sampling window of the loop delay controller
pub const PACER_WINDOW_MS: u64 = 1000;

/// A key without a fresh press/repeat event for this long counts as released.
pub const KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// Rows past the goal row a token may still occupy before it is culled.
pub const MISS_BAND_ROWS: usize = 2;

/// Width of one rendered cell in terminal columns.
pub const CELL_WIDTH: usize = 3;

/// Glyph of an empty cell
pub const BLANK_GLYPH: &str = "   ";

/// Glyph of a goal-row cell
pub const GOAL_GLYPH: &str = "***";

/// Logical keys the game queries from its input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    /// Scoring key for the token label it carries
    Label(char),
    Quit,
}

impl GameKey {
    pub fn label(&self) -> Option<char> {
        match self {
            GameKey::Label(c) => Some(*c),
            GameKey::Quit => None,
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, GameKey::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_playfield_defaults() {
        assert_eq!(GRID_WIDTH, 10);
        assert_eq!(GRID_HEIGHT, 20);
        assert_eq!(GOAL_OFFSET, 3);
        assert_eq!(MAX_ACTIVE_TOKENS, 20);
        assert_eq!(DEFAULT_ALPHABET, "123");
        assert!(MAX_ACTIVE_TOKENS <= GRID_WIDTH * GRID_HEIGHT);
        assert!(GOAL_OFFSET >= 1 && GOAL_OFFSET <= GRID_HEIGHT);
    }

    #[test]
    fn glyphs_share_cell_width() {
        assert_eq!(BLANK_GLYPH.chars().count(), CELL_WIDTH);
        assert_eq!(GOAL_GLYPH.chars().count(), CELL_WIDTH);
    }

    #[test]
    fn game_key_helpers() {
        assert_eq!(GameKey::Label('x').label(), Some('x'));
        assert_eq!(GameKey::Quit.label(), None);
        assert!(!GameKey::Label('q').is_quit());
    }
}
