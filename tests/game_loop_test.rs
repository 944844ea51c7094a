//! Integration tests for the game loop with in-memory collaborators

use std::collections::VecDeque;

use anyhow::Result;

use tui_keyfall::core::{Clock, GameConfig, KeySource, ManualClock, ScriptedRng};
use tui_keyfall::engine::Game;
use tui_keyfall::term::TextConsole;
use tui_keyfall::types::GameKey;

/// Holds the given keys for the iterations listed; nothing otherwise.
struct KeyTimeline {
    frames: VecDeque<Vec<GameKey>>,
    held: Vec<GameKey>,
}

impl KeyTimeline {
    fn new(frames: Vec<Vec<GameKey>>) -> Self {
        Self {
            frames: frames.into(),
            held: Vec::new(),
        }
    }
}

impl KeySource for KeyTimeline {
    fn poll(&mut self) -> Result<()> {
        self.held = self.frames.pop_front().unwrap_or_default();
        Ok(())
    }

    fn is_down(&self, key: GameKey) -> bool {
        self.held.contains(&key)
    }
}

#[test]
fn test_session_renders_playfield() {
    let clock = ManualClock::new();
    let mut game = Game::new(
        &GameConfig::default(),
        ScriptedRng::new(vec![5, 2]),
        &clock,
        KeyTimeline::new(vec![]),
        TextConsole::new(),
    )
    .unwrap();

    game.step().unwrap();

    let console = game.output();
    assert_eq!(console.clears(), 1);
    assert_eq!(console.lines().len(), 21);
    assert_eq!(console.lines()[1], format!("{} 3 {}", "   ".repeat(5), "   ".repeat(4)));
    assert_eq!(console.lines()[20], "Score: 0");
}

#[test]
fn test_holding_matching_key_scores_in_goal_band() {
    let clock = ManualClock::new();
    // Every spawn lands in column 0 with label '1'.
    let config = GameConfig::default().with_pacing(200, 100);
    let mut game = Game::new(
        &config,
        ScriptedRng::new(vec![0, 0]),
        &clock,
        KeyTimeline::new(vec![]),
        TextConsole::new(),
    )
    .unwrap();

    // Advance until the first token stands on the goal row.
    while game.grid().tokens()[0].row() < game.grid().goal_row() {
        game.step().unwrap();
        clock.advance(100);
    }
    assert_eq!(game.summary().hits, 0);

    game.keys_mut()
        .frames
        .extend([vec![GameKey::Label('1')], vec![GameKey::Quit]]);
    let summary = game.run().unwrap();

    // Only the token on the goal row was in the band.
    assert_eq!(summary.hits, 1);
    assert_eq!(summary.misses, 0);
    assert_eq!(summary.score, 1);
}

#[test]
fn test_quit_stops_session() {
    let clock = ManualClock::new();
    let mut game = Game::new(
        &GameConfig::default(),
        ScriptedRng::new(vec![1, 1]),
        &clock,
        KeyTimeline::new(vec![vec![], vec![GameKey::Quit]]),
        TextConsole::new(),
    )
    .unwrap();

    let summary = game.run().unwrap();
    assert_eq!(summary.updates, 2);
    assert_eq!(summary.frames, 1);
    assert!(!game.is_running());
    assert_eq!(clock.now_ms(), 20);
}

#[test]
fn test_idle_player_loses_points() {
    let clock = ManualClock::new();
    let mut game = Game::new(
        &GameConfig::default(),
        ScriptedRng::new(vec![3, 0, 8, 1, 4, 2]),
        &clock,
        KeyTimeline::new(vec![]),
        TextConsole::new(),
    )
    .unwrap();

    for _ in 0..25 {
        game.step().unwrap();
        clock.advance(300);
    }

    let summary = game.summary();
    assert_eq!(summary.frames, 25);
    // Ticks 20..=25 each cull the token spawned 19 ticks before.
    assert_eq!(summary.misses, 6);
    assert_eq!(summary.score, -6);
    assert_eq!(game.output().lines().last().unwrap(), "Score: -6");
}
