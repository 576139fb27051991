use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use skirmish_app::config::AppConfig;
use skirmish_app::{console, game_loop};
use skirmish_sim::engine::SimulationEngine;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("skirmish=info".parse()?))
        .init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;
    info!(?config_path, frame_rate = config.frame_rate, "skirmish starting");

    let engine = SimulationEngine::new(config.sim.clone()).context("invalid simulation config")?;
    let (cmd_tx, handle) =
        game_loop::spawn_game_loop(engine, config).context("failed to spawn game loop")?;

    // Console reader runs detached; it blocks on stdin until the process exits.
    std::thread::Builder::new()
        .name("skirmish-console".into())
        .spawn(move || console::forward_input(std::io::stdin().lock(), &cmd_tx))
        .context("failed to spawn console reader")?;

    let summary = handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;
    info!(
        frames = summary.frames,
        weapons_fired = summary.weapons_fired,
        ships_destroyed = summary.ships_destroyed,
        draw_failures = summary.draw_failures,
        "skirmish shut down"
    );
    Ok(())
}
