//! Grid module - the playfield, its token pool and its text buffer
//!
//! The grid is `width` columns by `height` rows with a goal line at
//! `goal_row = height - goal_offset`. Coordinates are `(row, col)`, row 0 at
//! the top; tokens fall toward increasing rows.
//!
//! # Bands
//!
//! - **Goal band**: rows `goal_row` and `goal_row + 1`. A held key matching a
//!   token's label kills the token there and scores +1.
//! - **Miss band**: row `goal_row + 2` is the last row a token survives on. A
//!   token that advances past it is culled and scores -1.
//!
//! # Buffer
//!
//! The text buffer is a flat row-major vector of fixed-width cell glyphs,
//! rebuilt in place on every [`Grid::compose`] without reallocating.

use anyhow::Result;
use tracing::trace;

use crate::config::{ConfigError, GameConfig};
use crate::console::ConsoleOutput;
use crate::rng::{RandomSource, SimpleRng};
use crate::token::Token;
use crate::types::{BLANK_GLYPH, CELL_WIDTH, GOAL_GLYPH, MISS_BAND_ROWS};

/// Running totals for a session. `score == hits - misses` at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridStats {
    pub hits: u64,
    pub misses: u64,
    pub spawned: u64,
}

/// The playfield.
#[derive(Debug, Clone)]
pub struct Grid<R: RandomSource = SimpleRng> {
    width: usize,
    height: usize,
    goal_row: usize,
    score: i64,
    stats: GridStats,
    tokens: Vec<Token>,
    alphabet: Vec<char>,
    /// Row-major cells, `height * width` entries
    buffer: Vec<String>,
    rng: R,
}

impl<R: RandomSource> Grid<R> {
    /// Build a grid and its dead token pool from a validated config.
    pub fn new(config: &GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let cells = config.width * config.height;
        let mut buffer = Vec::with_capacity(cells);
        for _ in 0..cells {
            buffer.push(String::with_capacity(CELL_WIDTH + 2));
        }

        let mut grid = Self {
            width: config.width,
            height: config.height,
            goal_row: config.goal_row(),
            score: 0,
            stats: GridStats::default(),
            tokens: vec![Token::new(); config.max_active_tokens],
            alphabet: config.alphabet.clone(),
            buffer,
            rng,
        };
        grid.compose();
        Ok(grid)
    }

    /// Revive the first dead token in pool order at row 0 with a random
    /// column, then a random label. Returns false when every token is alive.
    pub fn spawn_one(&mut self) -> bool {
        let Some(idx) = self.tokens.iter().position(|t| !t.is_alive()) else {
            return false;
        };

        let col = self.rng.next(self.width);
        let label = self.alphabet[self.rng.next(self.alphabet.len())];
        self.tokens[idx].spawn(col, label);
        self.stats.spawned += 1;
        trace!(slot = idx, col, %label, "token spawned");
        true
    }

    /// Move every alive token down one row and cull those past the miss band.
    /// Returns the number of culled tokens.
    pub fn advance_and_cull(&mut self) -> u32 {
        let last_row = self.goal_row + MISS_BAND_ROWS;
        let mut culled = 0;
        for token in self.tokens.iter_mut().filter(|t| t.is_alive()) {
            token.fall();
            if token.row() > last_row {
                trace!(col = token.col(), label = %token.label(), "token missed");
                token.kill();
                culled += 1;
            }
        }
        self.score -= i64::from(culled);
        self.stats.misses += u64::from(culled);
        culled
    }

    /// One simulation step: spawn then advance, but only while the pool has a
    /// free slot according to a live scan of the alive flags.
    pub fn tick(&mut self) -> bool {
        if self.active_count() >= self.tokens.len() {
            trace!("pool full, tick skipped");
            return false;
        }
        self.spawn_one();
        self.advance_and_cull();
        true
    }

    /// Kill every alive token in the goal band carrying `label`; each one
    /// scores a point. Returns the number of hits.
    pub fn check_goal(&mut self, label: char) -> u32 {
        let goal_row = self.goal_row;
        let mut hits = 0;
        for token in self.tokens.iter_mut() {
            if token.is_alive()
                && (token.row() == goal_row || token.row() == goal_row + 1)
                && token.label() == label
            {
                trace!(col = token.col(), row = token.row(), %label, "token hit");
                token.kill();
                hits += 1;
            }
        }
        self.score += i64::from(hits);
        self.stats.hits += u64::from(hits);
        hits
    }

    /// Rebuild the text buffer from the goal line and the alive tokens.
    /// Later tokens in pool order win when two share a cell.
    pub fn compose(&mut self) {
        let width = self.width;
        for (i, cell) in self.buffer.iter_mut().enumerate() {
            cell.clear();
            if i / width == self.goal_row {
                cell.push_str(GOAL_GLYPH);
            } else {
                cell.push_str(BLANK_GLYPH);
            }
        }

        for token in self.tokens.iter().filter(|t| t.is_alive()) {
            // Tokens in the miss band may sit below the last buffer row.
            if token.row() >= self.height || token.col() >= width {
                continue;
            }
            let cell = &mut self.buffer[token.row() * width + token.col()];
            cell.clear();
            cell.push(' ');
            cell.push(token.label());
            cell.push(' ');
        }
    }

    /// Compose the buffer and present it: clear first, then every row, then
    /// the score line.
    pub fn render<O: ConsoleOutput + ?Sized>(&mut self, out: &mut O) -> Result<()> {
        self.compose();

        out.clear()?;
        for row in self.buffer.chunks(self.width) {
            for cell in row {
                out.write(cell)?;
            }
            out.write_line("")?;
        }
        out.write_line(&format!("Score: {}", self.score))?;
        out.flush()
    }

    /// Number of alive tokens, counted by scanning the pool.
    pub fn active_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_alive()).count()
    }

    pub fn max_active_tokens(&self) -> usize {
        self.tokens.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn goal_row(&self) -> usize {
        self.goal_row
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn stats(&self) -> GridStats {
        self.stats
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Glyph of a buffer cell as of the last compose.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.buffer[row * self.width + col].as_str())
    }

    /// Buffer rows as of the last compose.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> + '_ {
        self.buffer.chunks(self.width)
    }

    /// One buffer row joined into a single line.
    pub fn row_text(&self, row: usize) -> Option<String> {
        self.rows().nth(row).map(|cells| cells.concat())
    }
}
