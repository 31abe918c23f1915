//! Terminal blockfall runner (default binary).
//!
//! One thread, one loop: poll input until the next frame tick, then advance
//! the gravity and line-clear timers. Every session mutation happens here, so
//! timer steps and key presses never interleave.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::config::{RunConfig, USAGE};
use blockfall::core::{GameSession, GameSnapshot, Outcome, SessionEvent};
use blockfall::input::{map_key, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

/// Blink period of rows waiting to be cleared.
const FLASH_MS: u128 = 60;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = RunConfig::parse_args(&args)? else {
        println!("{}", USAGE);
        return Ok(());
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: RunConfig) -> Result<()> {
    let mut game = GameSession::seeded(config.seed_or_random());
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(TICK_MS as u64);
    let fall = Duration::from_millis(config.fall_ms as u64);
    let clear_stage = Duration::from_millis(config.clear_ms as u64);

    let mut last_tick = Instant::now();
    let mut last_fall = Instant::now();
    let mut clear_started: Option<Instant> = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let flash = clear_started.is_some_and(|t| (t.elapsed().as_millis() / FLASH_MS) % 2 == 0);
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), flash, &mut fb);
        term.present(&mut fb)?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = map_key(key) {
                        match game.apply(command) {
                            Outcome::Restarted | Outcome::PauseToggled { paused: false } => {
                                last_fall = Instant::now();
                                clear_started = None;
                            }
                            _ => {}
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if let Some(SessionEvent::Landed { cleared_rows }) = game.take_last_event() {
            if !cleared_rows.is_empty() {
                clear_started = Some(Instant::now());
            }
        }

        if last_tick.elapsed() < tick {
            continue;
        }
        last_tick = Instant::now();

        if game.paused() || game.game_over() {
            continue;
        }
        if game.is_clearing() {
            let started = *clear_started.get_or_insert(last_tick);
            if started.elapsed() >= clear_stage {
                game.finish_clear();
                clear_started = None;
                last_fall = Instant::now();
            }
        } else if last_fall.elapsed() >= fall {
            last_fall = Instant::now();
            game.tick();
        }
    }
}
