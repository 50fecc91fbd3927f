//! Terminal runner (default binary).
//!
//! Start scene until Enter, then the playing scene. Input is read with
//! crossterm and each frame feeds the elapsed wall time to the session's
//! gravity timer.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameConfig, GameSnapshot, UniformSource};
use blockfall::engine::Session;
use blockfall::input::{handle_key_event, should_quit, KeyAction};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{BOARD_HEIGHT, BOARD_WIDTH, DROP_INTERVAL_MS, FRAME_MS};

/// Falling-block puzzle in the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the piece generator (defaults to the clock).
    #[arg(long)]
    seed: Option<u32>,
    /// Board width in cells.
    #[arg(long, default_value_t = BOARD_WIDTH)]
    width: u8,
    /// Board height in cells.
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    height: u8,
    /// Gravity interval in milliseconds.
    #[arg(long, default_value_t = DROP_INTERVAL_MS)]
    drop_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scene {
    Start,
    Playing,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = GameConfig {
        width: args.width,
        height: args.height,
        spawn_x: (args.width as i16 - 1) / 2,
        drop_interval_ms: args.drop_ms,
        ..GameConfig::default()
    };
    let seed = args.seed.unwrap_or_else(clock_seed);
    let session = Session::with_source(config, UniformSource::new(seed))
        .context("invalid game configuration")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, mut session: Session) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut scene = Scene::Start;

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        match scene {
            Scene::Start => {
                let cfg = session.game().config();
                view.render_start_into(cfg.width, cfg.height, viewport, &mut fb);
            }
            Scene::Playing => {
                session.snapshot_into(&mut snap);
                view.render_into(&snap, viewport, &mut fb);
            }
        }
        term.draw(&fb)?;

        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        scene = dispatch(&mut session, scene, action);
                    }
                }
            }
        }

        // Whole milliseconds only; the fraction carries into the next frame.
        let elapsed_ms = last_frame.elapsed().as_millis().min(u32::MAX as u128) as u32;
        if elapsed_ms > 0 {
            last_frame += Duration::from_millis(elapsed_ms as u64);
            if scene == Scene::Playing {
                session.advance_if_due(elapsed_ms);
            }
        }
    }
}

fn dispatch(session: &mut Session, scene: Scene, action: KeyAction) -> Scene {
    match (scene, action) {
        (Scene::Start, KeyAction::Start) => {
            session.start();
            Scene::Playing
        }
        (Scene::Start, _) => Scene::Start,
        (Scene::Playing, KeyAction::Command(command)) => {
            session.apply(command);
            Scene::Playing
        }
        (Scene::Playing, KeyAction::HardDrop) => {
            session.hard_drop();
            Scene::Playing
        }
        (Scene::Playing, KeyAction::Restart) => {
            session.restart();
            Scene::Playing
        }
        (Scene::Playing, KeyAction::Start) => Scene::Playing,
    }
}
