//! Terminal runner (default binary).
//!
//! Drives the game core at a fixed tick: read at most one command without
//! blocking, advance the state machine, draw the snapshot, then sleep out the
//! rest of the tick.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};

use tty_tetris::core::GameState;
use tty_tetris::input::{poll_command, TerminalEvents};
use tty_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tty_tetris::types::{Command, GRAVITY_DELAY, TICK_MS};

#[derive(Debug, Parser)]
#[command(name = "tty-tetris", version, about = "Falling-block puzzle game for the terminal")]
struct Cli {
    #[arg(
        long,
        env = "TTY_TETRIS_SEED",
        help = "Seed for the piece randomizer (random when omitted)"
    )]
    seed: Option<u32>,

    #[arg(
        long,
        env = "TTY_TETRIS_TICK_MS",
        default_value_t = u64::from(TICK_MS),
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Tick period in milliseconds"
    )]
    tick_ms: u64,

    #[arg(
        long,
        env = "TTY_TETRIS_GRAVITY_DELAY",
        default_value_t = GRAVITY_DELAY,
        help = "Ticks to wait between automatic one-row descents"
    )]
    gravity_delay: u32,

    #[arg(
        long,
        env = "TTY_TETRIS_LOG_FILE",
        help = "Write logs to this file (stdout is the game screen)"
    )]
    log_file: Option<PathBuf>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)")]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    // Without a log file there is nowhere safe to write: the terminal is in raw mode.
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(cli.log_level())
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(
        seed,
        tick_ms = cli.tick_ms,
        gravity_delay = cli.gravity_delay,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &cli, seed));

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        tracing::error!(error = %err, "failed to restore terminal");
    }
    result
}

fn run(term: &mut TerminalRenderer, cli: &Cli, seed: u32) -> Result<()> {
    let mut game = GameState::new(seed).with_gravity_delay(cli.gravity_delay);
    let view = GameView::default();
    let mut events = TerminalEvents;
    let mut fb = FrameBuffer::new(0, 0);
    let tick = Duration::from_millis(cli.tick_ms);

    loop {
        let started = Instant::now();

        let command = poll_command(&mut events).context("failed to read terminal input")?;
        if command == Some(Command::Quit) {
            info!(score = game.score(), "quit");
            return Ok(());
        }

        let snapshot = game.tick(command);
        if let Some(event) = game.take_last_event() {
            if !event.cleared_rows.is_empty() {
                info!(
                    lines = event.cleared_rows.len(),
                    score = event.score,
                    "lines cleared"
                );
            }
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if let Some(rest) = tick.checked_sub(started.elapsed()) {
            thread::sleep(rest);
        }
    }
}
