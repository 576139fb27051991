//! Entity spawn factories.
//!
//! Every entity in the world is created through one of these functions so
//! component bundles stay consistent.

use hecs::{Entity, World};
use rand::Rng;

use skirmish_core::components::{DeathBurst, Emitter, Projectile, Ship, Star};
use skirmish_core::constants::*;
use skirmish_core::enums::NamedColor;
use skirmish_core::types::{Acceleration, PlayArea, Position, ShipId, Velocity};

use crate::chance::percentage_chance;

/// Component bundle of a projectile, before or after it joins the world.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileBody {
    pub projectile: Projectile,
    pub position: Position,
    pub velocity: Velocity,
    pub acceleration: Acceleration,
}

/// Integral coordinate uniform in `[0, extent)`.
fn interior_coordinate<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> f64 {
    let upper = extent.ceil().max(1.0) as u64;
    rng.gen_range(0..upper) as f64
}

/// Integral coordinate uniform in `[0, extent]`.
fn edge_coordinate<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> f64 {
    rng.gen_range(0..=extent.max(0.0) as u64) as f64
}

/// Random integral step in `[-5, 5]` on each axis.
pub fn random_step<R: Rng + ?Sized>(rng: &mut R) -> Velocity {
    Velocity::new(
        rng.gen_range(-SHIP_MAX_STEP..=SHIP_MAX_STEP) as f64,
        rng.gen_range(-SHIP_MAX_STEP..=SHIP_MAX_STEP) as f64,
    )
}

fn take_ship_id(next_ship_id: &mut u64) -> ShipId {
    let id = ShipId(*next_ship_id);
    *next_ship_id += 1;
    id
}

/// Spawn an autonomous ship at a random interior point.
pub fn spawn_ship<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    area: &PlayArea,
    next_ship_id: &mut u64,
) -> (Entity, ShipId) {
    let palette = NamedColor::SHIP_PALETTE;
    let color = palette[rng.gen_range(0..palette.len())];
    let position = Position::new(
        interior_coordinate(rng, area.width),
        interior_coordinate(rng, area.height),
    );
    let facing = rng.gen_range(0.0..std::f64::consts::TAU);
    let velocity = random_step(rng);

    let id = take_ship_id(next_ship_id);
    let ship = Ship {
        id,
        radius: SHIP_RADIUS,
        color,
        facing,
        freeze_ticks: 0,
    };
    (world.spawn((ship, position, velocity)), id)
}

/// Spawn a ship with fully specified placement. Facing follows the velocity.
pub fn spawn_ship_at(
    world: &mut World,
    next_ship_id: &mut u64,
    position: Position,
    velocity: Velocity,
    color: NamedColor,
    radius: f64,
) -> (Entity, ShipId) {
    let id = take_ship_id(next_ship_id);
    let facing = if velocity.is_zero() {
        0.0
    } else {
        velocity.heading()
    };
    let ship = Ship {
        id,
        radius,
        color,
        facing,
        freeze_ticks: 0,
    };
    (world.spawn((ship, position, velocity)), id)
}

/// The manually controlled ship: small, blue, parked at the centre.
pub fn spawn_player(
    world: &mut World,
    area: &PlayArea,
    next_ship_id: &mut u64,
) -> (Entity, ShipId) {
    spawn_ship_at(
        world,
        next_ship_id,
        area.center(),
        Velocity::default(),
        NamedColor::Blue,
        PLAYER_RADIUS,
    )
}

/// Spawn a star on the top or left edge.
pub fn spawn_star<R: Rng + ?Sized>(world: &mut World, rng: &mut R, area: &PlayArea) -> Entity {
    let radius = rng.gen_range(2..=3) as f64;
    let palette = NamedColor::STAR_PALETTE;
    let color = palette[rng.gen_range(0..palette.len())];
    let position = if percentage_chance(rng, 50) {
        Position::new(edge_coordinate(rng, area.width), 0.0)
    } else {
        Position::new(0.0, edge_coordinate(rng, area.height))
    };
    world.spawn((Star { radius, color }, position))
}

pub fn spawn_projectile(world: &mut World, body: ProjectileBody) -> Entity {
    world.spawn((
        body.projectile,
        body.position,
        body.velocity,
        body.acceleration,
    ))
}

pub fn spawn_emitter(world: &mut World, emitter: Emitter) -> Entity {
    world.spawn((emitter,))
}

pub fn spawn_death_burst(world: &mut World, burst: DeathBurst) -> Entity {
    world.spawn((burst,))
}
