use anyhow::Result;
use tracing::debug;

use crate::core::{
    Clock, ConfigError, ConsoleOutput, GameConfig, Grid, KeySource, Pacer, RandomSource, SimpleRng,
};
use crate::types::GameKey;

/// Totals reported when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub score: i64,
    pub hits: u64,
    pub misses: u64,
    pub spawned: u64,
    /// Rendered frames (each one also advanced the simulation, unless the pool was full)
    pub frames: u64,
    /// Loop iterations
    pub updates: u64,
}

/// A running session.
pub struct Game<K, O, C, R = SimpleRng>
where
    K: KeySource,
    O: ConsoleOutput,
    C: Clock,
    R: RandomSource,
{
    grid: Grid<R>,
    pacer: Pacer<C>,
    keys: K,
    out: O,
    target_updates_per_second: u32,
    render_interval_ms: u64,
    running: bool,
    frames: u64,
    updates: u64,
}

impl<K, O, C, R> Game<K, O, C, R>
where
    K: KeySource,
    O: ConsoleOutput,
    C: Clock,
    R: RandomSource,
{
    pub fn new(
        config: &GameConfig,
        rng: R,
        clock: C,
        keys: K,
        out: O,
    ) -> Result<Self, ConfigError> {
        let grid = Grid::new(config, rng)?;
        let pacer = Pacer::with_initial_delay(clock, config.initial_refresh_delay_ms);
        Ok(Self {
            grid,
            pacer,
            keys,
            out,
            target_updates_per_second: config.target_updates_per_second,
            render_interval_ms: config.render_interval_ms,
            running: true,
            frames: 0,
            updates: 0,
        })
    }

    /// Run until the quit key is held.
    pub fn run(&mut self) -> Result<SessionSummary> {
        debug!(
            width = self.grid.width(),
            height = self.grid.height(),
            goal_row = self.grid.goal_row(),
            pool = self.grid.max_active_tokens(),
            "session started"
        );
        while self.running {
            self.step()?;
        }
        let summary = self.summary();
        debug!(?summary, "session ended");
        Ok(summary)
    }

    /// Run until the quit key is held or `max_iterations` iterations passed.
    pub fn run_for(&mut self, max_iterations: u64) -> Result<SessionSummary> {
        let mut n = 0;
        while self.running && n < max_iterations {
            self.step()?;
            n += 1;
        }
        Ok(self.summary())
    }

    /// One loop iteration.
    pub fn step(&mut self) -> Result<()> {
        self.keys.poll()?;
        self.handle_input();

        if self.pacer.try_fire(self.render_interval_ms) {
            self.grid.tick();
            self.grid.render(&mut self.out)?;
            self.frames += 1;
        }

        if self.keys.is_down(GameKey::Quit) {
            self.running = false;
        }

        self.pacer.throttle(self.target_updates_per_second);
        self.updates += 1;
        Ok(())
    }

    /// Score the first held label key in alphabet order. Returns that label.
    pub fn handle_input(&mut self) -> Option<char> {
        let label = self
            .grid
            .alphabet()
            .iter()
            .copied()
            .find(|&c| self.keys.is_down(GameKey::Label(c)))?;
        self.grid.check_goal(label);
        Some(label)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn summary(&self) -> SessionSummary {
        let stats = self.grid.stats();
        SessionSummary {
            score: self.grid.score(),
            hits: stats.hits,
            misses: stats.misses,
            spawned: stats.spawned,
            frames: self.frames,
            updates: self.updates,
        }
    }

    pub fn grid(&self) -> &Grid<R> {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid<R> {
        &mut self.grid
    }

    pub fn keys_mut(&mut self) -> &mut K {
        &mut self.keys
    }

    pub fn output(&self) -> &O {
        &self.out
    }
}
