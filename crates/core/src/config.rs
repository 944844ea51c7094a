//! Session configuration and its validation.

use thiserror::Error;

use crate::types::{
    DEFAULT_ALPHABET, GOAL_OFFSET, GRID_HEIGHT, GRID_WIDTH, INITIAL_REFRESH_DELAY_MS,
    MAX_ACTIVE_TOKENS, RENDER_INTERVAL_MS, TARGET_UPDATES_PER_SECOND,
};

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid width must be at least 1")]
    ZeroWidth,
    #[error("grid height must be at least 1")]
    ZeroHeight,
    #[error("goal offset {offset} must be within 1..={height}")]
    GoalOffsetOutOfRange { offset: usize, height: usize },
    #[error("grid {width}x{height} has more cells than can be addressed")]
    GridTooLarge { width: usize, height: usize },
    #[error("token pool size must be at least 1")]
    ZeroPool,
    #[error("token pool size {pool} exceeds grid capacity {capacity}")]
    PoolTooLarge { pool: usize, capacity: usize },
    #[error("label alphabet is empty")]
    EmptyAlphabet,
    #[error("label {0:?} appears more than once in the alphabet")]
    DuplicateLabel(char),
}

/// Everything a game session is parameterised by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub goal_offset: usize,
    pub max_active_tokens: usize,
    /// Token labels, in scoring-key precedence order.
    pub alphabet: Vec<char>,
    pub target_updates_per_second: u32,
    pub render_interval_ms: u64,
    pub initial_refresh_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            goal_offset: GOAL_OFFSET,
            max_active_tokens: MAX_ACTIVE_TOKENS,
            alphabet: DEFAULT_ALPHABET.chars().collect(),
            target_updates_per_second: TARGET_UPDATES_PER_SECOND,
            render_interval_ms: RENDER_INTERVAL_MS,
            initial_refresh_delay_ms: INITIAL_REFRESH_DELAY_MS,
        }
    }
}

impl GameConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_goal_offset(mut self, goal_offset: usize) -> Self {
        self.goal_offset = goal_offset;
        self
    }

    pub fn with_max_active_tokens(mut self, max_active_tokens: usize) -> Self {
        self.max_active_tokens = max_active_tokens;
        self
    }

    pub fn with_alphabet(mut self, alphabet: &str) -> Self {
        self.alphabet = alphabet.chars().collect();
        self
    }

    pub fn with_pacing(mut self, target_updates_per_second: u32, render_interval_ms: u64) -> Self {
        self.target_updates_per_second = target_updates_per_second;
        self.render_interval_ms = render_interval_ms;
        self
    }

    pub fn with_initial_refresh_delay_ms(mut self, delay_ms: u64) -> Self {
        self.initial_refresh_delay_ms = delay_ms;
        self
    }

    /// Row index of the goal line. Only meaningful on a validated config.
    pub fn goal_row(&self) -> usize {
        self.height.saturating_sub(self.goal_offset)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.goal_offset == 0 || self.goal_offset > self.height {
            return Err(ConfigError::GoalOffsetOutOfRange {
                offset: self.goal_offset,
                height: self.height,
            });
        }
        if self.max_active_tokens == 0 {
            return Err(ConfigError::ZeroPool);
        }
        let capacity = self
            .width
            .checked_mul(self.height)
            .ok_or(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
            })?;
        if self.max_active_tokens > capacity {
            return Err(ConfigError::PoolTooLarge {
                pool: self.max_active_tokens,
                capacity,
            });
        }
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        for (i, c) in self.alphabet.iter().enumerate() {
            if self.alphabet[..i].contains(c) {
                return Err(ConfigError::DuplicateLabel(*c));
            }
        }
        Ok(())
    }
}
