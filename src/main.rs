//! Grid Snake entry point
//!
//! Owns the one `GameState` instance and runs the polling host loop: drain
//! input, advance the simulation when the tick timer fires, render every
//! frame regardless of whether a tick fired.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use grid_snake::Tuning;
use grid_snake::consts::FRAME_INTERVAL_MS;
use grid_snake::input::{Command, InputLatch, map_key, should_quit};
use grid_snake::platform::{Clock, SystemClock, TickTimer};
use grid_snake::render::render;
use grid_snake::sim::{GameState, TickEvent, tick};
use grid_snake::term::TermSurface;

fn main() -> Result<()> {
    env_logger::init();

    let tuning = Tuning::load()?;
    let seed: u64 = rand::random();
    log::info!("starting run with seed {seed}");

    let mut term = TermSurface::new(tuning.grid_size);
    term.enter()?;

    let result = run(&mut term, tuning, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TermSurface, tuning: Tuning, seed: u64) -> Result<()> {
    let mut game = GameState::new(tuning, seed);
    let mut latch = InputLatch::new();
    let clock = SystemClock::new();
    let mut timer = TickTimer::new();
    let frame = Duration::from_millis(FRAME_INTERVAL_MS);

    loop {
        // Drain whatever arrived since the last frame.
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match map_key(key) {
                        Some(Command::Turn(dir)) => latch.on_key(dir, game.direction),
                        Some(Command::Restart) => {
                            // Restart bypasses the tick gate.
                            game.reset();
                            log::info!("manual restart");
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // At most one simulation step per elapsed move delay.
        if timer.fire(clock.elapsed_seconds(), game.move_delay) {
            match tick(&mut game, latch.take()) {
                TickEvent::Collided(collision) => {
                    log::info!("game over: {collision:?} collision, restarting");
                }
                TickEvent::Ate { leveled_up: true } => {
                    log::info!(
                        "level {} reached, move delay now {:.3}s",
                        game.level,
                        game.move_delay
                    );
                }
                TickEvent::Ate { leveled_up: false } | TickEvent::Moved => {}
            }
        }

        // The render pass runs every iteration, decoupled from the tick rate.
        render(&game, term);
        term.present(&format!("Score: {}   Level: {}", game.score, game.level))?;

        std::thread::sleep(frame);
    }
}
