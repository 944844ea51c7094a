//! Pacer - loop rate and render rate control.
//!
//! Two independent clocks share one time source:
//!
//! - the **loop controller** ([`Pacer::throttle`]) sleeps a fixed delay every
//!   iteration and, once per sampled second, nudges that delay by
//!   [`REFRESH_DELAY_STEP_MS`] toward the target iteration rate;
//! - the **gate** ([`Pacer::try_fire`]) lets an action through at most once
//!   per interval, which keeps the render rate independent of the loop rate.
//!
//! Time comes from a [`Clock`] so tests can drive the pacer with simulated
//! milliseconds instead of wall time.

use std::cell::Cell;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::types::{
    INITIAL_REFRESH_DELAY_MS, MIN_REFRESH_DELAY_MS, PACER_WINDOW_MS, REFRESH_DELAY_STEP_MS,
};

/// Millisecond time source with a blocking sleep.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed epoch. Must not go backwards.
    fn now_ms(&self) -> u64;

    /// Suspend the caller for `ms` milliseconds.
    fn sleep_ms(&self, ms: u64);
}

/// Wall clock backed by [`Instant`] and [`std::thread::sleep`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    fn sleep_ms(&self, ms: u64) {
        if ms > 0 {
            std::thread::sleep(Duration::from_millis(ms));
        }
    }
}

/// Simulated clock. Sleeping advances simulated time instantly.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(ms: u64) -> Self {
        Self { now: Cell::new(ms) }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    fn sleep_ms(&self, ms: u64) {
        self.advance(ms);
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }

    fn sleep_ms(&self, ms: u64) {
        (**self).sleep_ms(ms)
    }
}

/// Adaptive loop delay plus a fixed-interval gate.
#[derive(Debug)]
pub struct Pacer<C: Clock> {
    clock: C,
    refresh_delay_ms: u64,
    updates_since_last_second: u32,
    loop_started_ms: u64,
    last_fire_ms: Option<u64>,
}

impl<C: Clock> Pacer<C> {
    pub fn new(clock: C) -> Self {
        Self::with_initial_delay(clock, INITIAL_REFRESH_DELAY_MS)
    }

    pub fn with_initial_delay(clock: C, refresh_delay_ms: u64) -> Self {
        let loop_started_ms = clock.now_ms();
        Self {
            clock,
            refresh_delay_ms: refresh_delay_ms.max(MIN_REFRESH_DELAY_MS),
            updates_since_last_second: 0,
            loop_started_ms,
            last_fire_ms: None,
        }
    }

    /// Count one loop iteration, sleep the current delay, and once per sampled
    /// second steer the delay toward `target_updates_per_second`.
    pub fn throttle(&mut self, target_updates_per_second: u32) {
        self.updates_since_last_second = self.updates_since_last_second.saturating_add(1);
        self.clock.sleep_ms(self.refresh_delay_ms);

        let now = self.clock.now_ms();
        if now.saturating_sub(self.loop_started_ms) < PACER_WINDOW_MS {
            return;
        }

        let observed = self.updates_since_last_second;
        if observed > target_updates_per_second {
            self.refresh_delay_ms = self.refresh_delay_ms.saturating_add(REFRESH_DELAY_STEP_MS);
        } else {
            self.refresh_delay_ms = self
                .refresh_delay_ms
                .saturating_sub(REFRESH_DELAY_STEP_MS)
                .max(MIN_REFRESH_DELAY_MS);
        }
        debug!(
            observed,
            target_ups = target_updates_per_second,
            refresh_delay_ms = self.refresh_delay_ms,
            "loop delay adjusted"
        );

        self.updates_since_last_second = 0;
        self.loop_started_ms = now;
    }

    /// Return true (and restart the gate) when at least `min_interval_ms` has
    /// passed since the last true return. The first call always fires.
    pub fn try_fire(&mut self, min_interval_ms: u64) -> bool {
        let now = self.clock.now_ms();
        match self.last_fire_ms {
            Some(last) if now.saturating_sub(last) < min_interval_ms => false,
            _ => {
                self.last_fire_ms = Some(now);
                true
            }
        }
    }

    pub fn refresh_delay_ms(&self) -> u64 {
        self.refresh_delay_ms
    }

    pub fn updates_since_last_second(&self) -> u32 {
        self.updates_since_last_second
    }
}
