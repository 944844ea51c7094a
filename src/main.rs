//! Terminal Keyfall runner (default binary).
//!
//! Labels fall toward the goal line; press the matching key while a label is
//! on the goal line (or the row below) to score. Esc or `q` quits.

use std::fs::File;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_keyfall::core::{GameConfig, SimpleRng, SystemClock};
use tui_keyfall::engine::Game;
use tui_keyfall::input::TerminalKeys;
use tui_keyfall::term::TerminalRenderer;
use tui_keyfall::types::{
    DEFAULT_ALPHABET, GOAL_OFFSET, GRID_HEIGHT, GRID_WIDTH, INITIAL_REFRESH_DELAY_MS,
    MAX_ACTIVE_TOKENS, RENDER_INTERVAL_MS, TARGET_UPDATES_PER_SECOND,
};

#[derive(Debug, Parser)]
#[command(name = "tui-keyfall", version, about = "Catch falling labels on the goal line")]
struct Cli {
    /// Grid width in columns
    #[arg(long, default_value_t = GRID_WIDTH)]
    width: usize,

    /// Grid height in rows
    #[arg(long, default_value_t = GRID_HEIGHT)]
    height: usize,

    /// Goal line distance from the bottom edge
    #[arg(long, default_value_t = GOAL_OFFSET)]
    goal_offset: usize,

    /// Token pool size
    #[arg(long, default_value_t = MAX_ACTIVE_TOKENS)]
    pool: usize,

    /// Token labels, also the scoring keys (earlier labels win simultaneous presses)
    #[arg(long, default_value = DEFAULT_ALPHABET)]
    alphabet: String,

    /// Loop iterations per second the pacer steers toward
    #[arg(long, default_value_t = TARGET_UPDATES_PER_SECOND)]
    target_ups: u32,

    /// Minimum milliseconds between frames
    #[arg(long, default_value_t = RENDER_INTERVAL_MS)]
    render_interval_ms: u64,

    /// Starting per-iteration sleep in milliseconds
    #[arg(long, default_value_t = INITIAL_REFRESH_DELAY_MS)]
    initial_delay_ms: u64,

    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u32>,

    /// Write logs to this file (no logging without it)
    #[arg(long)]
    log_file: Option<String>,

    /// tracing filter directive, e.g. `debug` or `tui_keyfall_core=trace`
    #[arg(long, default_value = "info")]
    log_filter: String,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig::default()
            .with_size(self.width, self.height)
            .with_goal_offset(self.goal_offset)
            .with_max_active_tokens(self.pool)
            .with_alphabet(&self.alphabet)
            .with_pacing(self.target_ups, self.render_interval_ms)
            .with_initial_refresh_delay_ms(self.initial_delay_ms)
    }
}

fn init_tracing(cli: &Cli) -> Result<()> {
    // The playfield owns stdout; logs only go to an explicit file.
    let Some(path) = cli.log_file.as_deref() else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {path}"))?;
    let filter = EnvFilter::try_new(&cli.log_filter)
        .with_context(|| format!("invalid log filter {:?}", cli.log_filter))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();
    Ok(())
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let config = cli.game_config();
    config.validate().context("invalid game configuration")?;
    let seed = cli.seed.unwrap_or_else(time_seed);
    info!(?config, seed, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&config, seed, &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    let summary = result?;
    info!(?summary, "finished");
    println!(
        "Score: {}  (hits {}, misses {})",
        summary.score, summary.hits, summary.misses
    );
    Ok(())
}

fn run(
    config: &GameConfig,
    seed: u32,
    term: &mut TerminalRenderer,
) -> Result<tui_keyfall::engine::SessionSummary> {
    let keys = TerminalKeys::new(&config.alphabet);
    let mut game = Game::new(config, SimpleRng::new(seed), SystemClock::new(), keys, term)?;
    game.run()
}
