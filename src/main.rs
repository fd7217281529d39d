//! Terminal runner (default binary).
//!
//! Owns the terminal and the fixed-rate loop: every tick it hands the intents
//! collected since the previous tick to the game, then draws the board.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use log::{info, LevelFilter};

use blockfall::core::GameState;
use blockfall::input::{should_quit, IntentCollector};
use blockfall::logging::init_file_logger;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameConfig, BOARD_HEIGHT, BOARD_WIDTH, TICK_MS};

#[derive(Debug, Parser)]
#[command(name = "blockfall")]
#[command(about = "Falling-block puzzle game for the terminal")]
struct Cli {
    /// Board height in cells.
    #[arg(long, default_value_t = BOARD_HEIGHT as u16)]
    rows: u16,
    /// Board width in cells.
    #[arg(long, default_value_t = BOARD_WIDTH as u16)]
    cols: u16,
    /// Milliseconds between game ticks.
    #[arg(long, default_value_t = TICK_MS)]
    tick_ms: u32,
    /// Piece randomizer seed (defaults to the clock).
    #[arg(long)]
    seed: Option<u32>,
    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            rows: self.rows,
            cols: self.cols,
            tick_ms: self.tick_ms,
            seed: self.seed,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_file_logger(path, cli.log_level)?;
    }

    let mut config = cli.game_config();
    config.seed = Some(config.seed.unwrap_or_else(clock_seed));
    let game = GameState::from_config(&config).context("invalid game configuration")?;

    info!(
        "starting {}x{} board, tick {}ms, seed {:?}",
        config.rows, config.cols, config.tick_ms, config.seed
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

fn run(term: &mut TerminalRenderer, mut game: GameState, config: &GameConfig) -> Result<()> {
    let view = GameView::default();
    let mut intents = IntentCollector::new();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    intents.handle_key_event(key);
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            let report = game.tick(intents.take());
            if report.locked {
                info!(
                    "piece locked, {} lines cleared ({} total)",
                    report.lines_cleared,
                    game.lines_cleared()
                );
            }

            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(game.board(), game.active(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }
    }
}
