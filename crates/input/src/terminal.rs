//! crossterm-backed [`KeySource`].

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::trace;

use crate::core::{Clock, KeySource, SystemClock};
use crate::map::map_key;
use crate::state::KeyState;
use crate::types::GameKey;

/// Reads pending terminal events without blocking and tracks which game keys
/// are held.
pub struct TerminalKeys<C: Clock = SystemClock> {
    alphabet: Vec<char>,
    state: KeyState,
    clock: C,
}

impl TerminalKeys<SystemClock> {
    pub fn new(alphabet: &[char]) -> Self {
        Self::with_clock(alphabet, SystemClock::new())
    }
}

impl<C: Clock> TerminalKeys<C> {
    pub fn with_clock(alphabet: &[char], clock: C) -> Self {
        Self {
            alphabet: alphabet.to_vec(),
            state: KeyState::new(),
            clock,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.state = KeyState::with_release_timeout_ms(timeout_ms);
        self
    }

    fn handle_event(&mut self, ev: Event) {
        let Event::Key(key) = ev else {
            return;
        };
        let Some(game_key) = map_key(key, &self.alphabet) else {
            return;
        };
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                trace!(?game_key, "key down");
                self.state.press(game_key, self.clock.now_ms());
            }
            KeyEventKind::Release => {
                trace!(?game_key, "key up");
                self.state.release(game_key);
            }
        }
    }
}

impl<C: Clock> KeySource for TerminalKeys<C> {
    fn poll(&mut self) -> Result<()> {
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            self.handle_event(ev);
        }
        self.state.expire(self.clock.now_ms());
        Ok(())
    }

    fn is_down(&self, key: GameKey) -> bool {
        self.state.is_down(key, self.clock.now_ms())
    }
}
