//! Simulation engine: the core of the arcade.
//!
//! `SimulationEngine` owns the hecs ECS world, applies host input, runs all
//! systems in a fixed order once per frame, and produces `FrameSnapshot`s.
//! Headless: drawing goes through whatever `Surface` the host passes in.

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use skirmish_core::commands::InputEvent;
use skirmish_core::constants::*;
use skirmish_core::draw::Surface;
use skirmish_core::enums::NamedColor;
use skirmish_core::error::ConfigError;
use skirmish_core::events::SimEvent;
use skirmish_core::state::FrameSnapshot;
use skirmish_core::types::{PlayArea, Position, SimTime, Velocity};

use crate::context::TickContext;
use crate::painter::Painter;
use crate::systems::{self, FrameRoster};
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub width: f64,
    pub height: f64,
    pub initial_stars: usize,
    pub initial_ships: usize,
    /// Add a render-only player ship at the centre.
    pub spawn_player: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            initial_stars: DEFAULT_INITIAL_STARS,
            initial_ships: DEFAULT_INITIAL_SHIPS,
            spawn_player: false,
        }
    }
}

impl SimConfig {
    pub fn play_area(&self) -> PlayArea {
        PlayArea::new(self.width, self.height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let usable = |extent: f64| extent.is_finite() && extent > 0.0;
        if usable(self.width) && usable(self.height) {
            Ok(())
        } else {
            Err(ConfigError::EmptyPlayArea {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    area: PlayArea,
    rng: ChaCha8Rng,
    next_ship_id: u64,
    player: Option<Entity>,
    events: Vec<SimEvent>,
    quit_requested: bool,
}

impl SimulationEngine {
    /// Create an engine and populate its initial stars and ships.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            area: config.play_area(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_ship_id: 0,
            player: None,
            events: Vec::new(),
            quit_requested: false,
        };

        for _ in 0..config.initial_stars {
            world_setup::spawn_star(&mut engine.world, &mut engine.rng, &engine.area);
        }
        for _ in 0..config.initial_ships {
            let (_, id) = world_setup::spawn_ship(
                &mut engine.world,
                &mut engine.rng,
                &engine.area,
                &mut engine.next_ship_id,
            );
            engine.events.push(SimEvent::ShipSpawned { ship: id });
        }
        if config.spawn_player {
            let (entity, id) = world_setup::spawn_player(
                &mut engine.world,
                &engine.area,
                &mut engine.next_ship_id,
            );
            engine.player = Some(entity);
            engine.events.push(SimEvent::ShipSpawned { ship: id });
        }

        info!(
            seed = config.seed,
            width = config.width,
            height = config.height,
            ships = config.initial_ships,
            stars = config.initial_stars,
            player = config.spawn_player,
            "simulation engine created"
        );
        Ok(engine)
    }

    /// Advance one frame: apply input, then tick stars, ships, projectiles,
    /// emitters and death bursts, then roll for a new star. Projectiles and
    /// effects created during the frame are first ticked on the next one.
    pub fn advance_frame(
        &mut self,
        input: &[InputEvent],
        surface: &mut dyn Surface,
    ) -> FrameSnapshot {
        let (quit, draw_failures) = {
            let roster = FrameRoster::collect(&self.world);
            let mut ctx = self.context(surface);
            let quit = systems::input::run(&mut ctx, input);
            systems::stars::run(&mut ctx);
            systems::ships::run(&mut ctx);
            systems::projectiles::run(&mut ctx, &roster.projectiles);
            systems::effects::run_emitters(&mut ctx, &roster.emitters);
            systems::effects::run_deaths(&mut ctx, &roster.bursts);
            systems::stars::maybe_spawn(&mut ctx);
            (quit, ctx.painter.failures())
        };
        self.quit_requested |= quit;
        self.time.advance();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.player,
            events,
            draw_failures,
            self.quit_requested,
        )
    }

    /// Borrow the engine state as a per-frame context.
    pub(crate) fn context<'a>(&'a mut self, surface: &'a mut dyn Surface) -> TickContext<'a> {
        TickContext {
            world: &mut self.world,
            rng: &mut self.rng,
            area: self.area,
            painter: Painter::new(surface),
            events: &mut self.events,
            next_ship_id: &mut self.next_ship_id,
            player: &mut self.player,
            tick: self.time.tick,
        }
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn play_area(&self) -> PlayArea {
        self.area
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The render-only player ship, while it is alive.
    pub fn player(&self) -> Option<Entity> {
        self.player
    }

    /// True once the host has sent a quit request or an exit key.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Ship entities in collection order.
    pub fn ships(&self) -> Vec<Entity> {
        systems::ships::ship_roster(&self.world)
    }

    /// Place an autonomous ship at an exact spot (scenario setup).
    pub fn spawn_ship_at(&mut self, position: Position, velocity: Velocity) -> Entity {
        let (entity, id) = world_setup::spawn_ship_at(
            &mut self.world,
            &mut self.next_ship_id,
            position,
            velocity,
            NamedColor::Yellow,
            SHIP_RADIUS,
        );
        self.events.push(SimEvent::ShipSpawned { ship: id });
        entity
    }

    /// Remove every ship (for tests that need an exact fleet).
    #[cfg(test)]
    pub(crate) fn clear_ships(&mut self) {
        for entity in self.ships() {
            let _ = self.world.despawn(entity);
        }
        self.player = None;
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
