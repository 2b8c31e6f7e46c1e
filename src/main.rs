//! Terminal blockfall runner.
//!
//! Reads `BLOCKFALL_*` settings from the environment, then drives the engine
//! from crossterm key events and a monotonic clock, painting through the
//! framebuffer renderer.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use blockfall::engine::{GameLoop, GameState};
use blockfall::input::{accepts_kind, handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, PanelStats, ScoreBoard, TerminalRenderer, Viewport};
use blockfall::types::GameConfig;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    config.validate().context("invalid BLOCKFALL_* configuration")?;

    if let Some(path) = &config.log_path {
        init_logging(path)?;
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        seed,
        width = config.arena_width,
        height = config.arena_height,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Send trace output to `path`; the terminal itself belongs to the game.
fn init_logging(path: &str) -> Result<()> {
    let file = File::create(path).with_context(|| format!("cannot open log file {path}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .try_init()
        .context("failed to install log subscriber")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, seed: u32) -> Result<()> {
    let mut game = GameState::from_config(config, seed);
    let mut frames = GameLoop::new();
    let mut view = GameView::default();
    let mut scores = ScoreBoard::default();
    let mut screen = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(u64::from(config.tick_ms));
    let clock = Instant::now();
    let mut next_frame = clock;

    loop {
        // Input until the next frame is due.
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if accepts_kind(key.kind) => {
                    if should_quit(key) {
                        info!(score = game.score(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
            if Instant::now() < next_frame {
                continue;
            }
        }

        next_frame = Instant::now() + tick;
        let now_ms = u64::try_from(clock.elapsed().as_millis()).unwrap_or(u64::MAX);
        frames.frame(&mut game, now_ms, &mut view, &mut scores);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let stats = PanelStats {
            score: scores.score(),
            lines: game.lines_cleared(),
            pieces: game.pieces_spawned(),
        };
        view.compose_into(Viewport::new(w, h), stats, &mut screen);
        term.present(&screen)?;
    }
}
