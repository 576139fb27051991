//! Snapshot system: builds the FrameSnapshot handed back to the host.
//!
//! Read-only; never modifies the world.

use hecs::{Entity, World};

use skirmish_core::components::{DeathBurst, Emitter, Projectile, Ship, Star};
use skirmish_core::events::SimEvent;
use skirmish_core::state::{FrameSnapshot, ShipView};
use skirmish_core::types::{Position, SimTime, Velocity};

/// Build a complete FrameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    player: Option<Entity>,
    events: Vec<SimEvent>,
    draw_failures: u32,
    quit_requested: bool,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        ships: build_ships(world, player),
        projectile_count: count::<Projectile>(world),
        effect_count: count::<Emitter>(world),
        death_count: count::<DeathBurst>(world),
        star_count: count::<Star>(world),
        events,
        draw_failures,
        quit_requested,
    }
}

fn count<C: hecs::Component>(world: &World) -> usize {
    world.query::<&C>().iter().count()
}

fn build_ships(world: &World, player: Option<Entity>) -> Vec<ShipView> {
    let mut ships: Vec<ShipView> = world
        .query::<(&Ship, &Position, &Velocity)>()
        .iter()
        .map(|(entity, (ship, pos, vel))| ShipView {
            id: ship.id,
            position: *pos,
            velocity: *vel,
            radius: ship.radius,
            color: ship.color,
            freeze_ticks: ship.freeze_ticks,
            is_player: player == Some(entity),
        })
        .collect();
    ships.sort_unstable_by_key(|view| view.id);
    ships
}
