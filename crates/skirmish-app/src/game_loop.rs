//! Game loop thread: advances the simulation at a fixed frame rate.
//!
//! The engine is built by the caller and moved into the thread. Input
//! arrives via an `mpsc` channel and is applied at the next frame boundary.
//! Frames are drawn into a `CommandRecorder`, which stands in for a window.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::info;

use skirmish_core::commands::InputEvent;
use skirmish_core::constants::FRAME_RATE;
use skirmish_core::draw::CommandRecorder;
use skirmish_sim::engine::SimulationEngine;

use crate::config::AppConfig;
use crate::state::{GameLoopCommand, RunSummary};

/// Nominal duration of one frame at the default rate.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Duration of one frame at `frame_rate` frames per second.
pub fn frame_duration(frame_rate: u32) -> Duration {
    if frame_rate == FRAME_RATE {
        FRAME_DURATION
    } else {
        Duration::from_nanos(1_000_000_000 / u64::from(frame_rate.max(1)))
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle that yields the run summary.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    config: AppConfig,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<RunSummary>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("skirmish-game-loop".into())
        .spawn(move || run_game_loop(engine, &config, cmd_rx))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until quit, Shutdown, disconnect, or `max_frames`.
pub fn run_game_loop(
    mut engine: SimulationEngine,
    config: &AppConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
) -> RunSummary {
    let frame = frame_duration(config.frame_rate);
    let mut surface = CommandRecorder::new();
    let mut summary = RunSummary::default();
    let mut pending: Vec<InputEvent> = Vec::new();
    let mut shutdown = false;
    let mut next_frame_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(event)) => pending.push(event),
                Ok(GameLoopCommand::Shutdown) => {
                    shutdown = true;
                    break;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    shutdown = true;
                    break;
                }
            }
        }
        if shutdown {
            break;
        }

        // 2. Advance one frame
        let snapshot = engine.advance_frame(&pending, &mut surface);
        pending.clear();

        // 3. Present: a windowed host would blit these; we only count them
        let commands = surface.drain();
        summary.record(&snapshot, commands.len());

        if summary.frames % config.summary_interval == 0 {
            info!(
                frame = snapshot.time.tick,
                ships = snapshot.ships.len(),
                projectiles = snapshot.projectile_count,
                effects = snapshot.effect_count,
                deaths = snapshot.death_count,
                stars = snapshot.star_count,
                destroyed = summary.ships_destroyed,
                "frame summary"
            );
        }

        if snapshot.quit_requested {
            info!(frame = snapshot.time.tick, "quit requested");
            break;
        }
        if config.max_frames.is_some_and(|max| summary.frames >= max) {
            break;
        }

        // 4. Sleep until next frame
        next_frame_time += frame;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > frame * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_frame_time = now;
        }
    }

    summary
}
