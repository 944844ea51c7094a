//! Held-key tracking for terminals.
//!
//! Terminals report presses (and auto-repeats) but often no releases. A key is
//! therefore held from its last press or repeat until either a release event
//! arrives or `release_timeout_ms` passes without a new event.

use arrayvec::ArrayVec;

use crate::types::{GameKey, KEY_RELEASE_TIMEOUT_MS};

const MAX_HELD_KEYS: usize = 32;

#[derive(Debug, Clone)]
pub struct KeyState {
    /// Held keys with the time of their latest press/repeat event
    held: ArrayVec<(GameKey, u64), MAX_HELD_KEYS>,
    release_timeout_ms: u64,
}

impl KeyState {
    pub fn new() -> Self {
        Self::with_release_timeout_ms(KEY_RELEASE_TIMEOUT_MS)
    }

    pub fn with_release_timeout_ms(release_timeout_ms: u64) -> Self {
        Self {
            held: ArrayVec::new(),
            release_timeout_ms,
        }
    }

    pub fn press(&mut self, key: GameKey, now_ms: u64) {
        if let Some(entry) = self.held.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = now_ms;
            return;
        }
        if self.held.is_full() {
            // Evict the stalest key.
            if let Some(oldest) = self
                .held
                .iter()
                .enumerate()
                .min_by_key(|(_, (_, t))| *t)
                .map(|(i, _)| i)
            {
                self.held.remove(oldest);
            }
        }
        self.held.push((key, now_ms));
    }

    pub fn release(&mut self, key: GameKey) {
        self.held.retain(|(k, _)| *k != key);
    }

    /// Drop keys whose last event is older than the release timeout.
    pub fn expire(&mut self, now_ms: u64) {
        let timeout = self.release_timeout_ms;
        self.held
            .retain(|(_, t)| now_ms.saturating_sub(*t) <= timeout);
    }

    pub fn is_down(&self, key: GameKey, now_ms: u64) -> bool {
        self.held
            .iter()
            .any(|(k, t)| *k == key && now_ms.saturating_sub(*t) <= self.release_timeout_ms)
    }

    pub fn held_count(&self) -> usize {
        self.held.len()
    }
}

impl Default for KeyState {
    fn default() -> Self {
        Self::new()
    }
}
