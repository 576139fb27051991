//! Ship behavior: wander, freeze, fire, and die.

use hecs::{Entity, World};
use tracing::{debug, trace};

use skirmish_ai::fsm::{plan_salvo, select_weapon};
use skirmish_ai::targeting::choose_target;
use skirmish_core::components::{Projectile, Ship};
use skirmish_core::constants::*;
use skirmish_core::draw::Rgb;
use skirmish_core::enums::{DestructionCause, NamedColor, Weapon};
use skirmish_core::events::SimEvent;
use skirmish_core::types::{PlayArea, Position, ShipId, Velocity};

use crate::chance::percentage_chance;
use crate::context::TickContext;
use crate::effects::{death_burst, exhaust, unit_or_left};
use crate::painter::Painter;
use crate::shapes;
use crate::systems::{flame_flicker, projectiles};
use crate::world_setup::{self, ProjectileBody};

const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Ship entities in collection order (ascending id).
pub fn ship_roster(world: &World) -> Vec<Entity> {
    let mut roster: Vec<(ShipId, Entity)> = world
        .query::<&Ship>()
        .iter()
        .map(|(entity, ship)| (ship.id, entity))
        .collect();
    roster.sort_unstable_by_key(|(id, _)| *id);
    roster.into_iter().map(|(_, entity)| entity).collect()
}

fn read_ship(world: &mut World, entity: Entity) -> Option<(Ship, Position, Velocity)> {
    world
        .query_one_mut::<(&Ship, &Position, &Velocity)>(entity)
        .ok()
        .map(|(ship, pos, vel)| (*ship, *pos, *vel))
}

fn write_ship(world: &mut World, entity: Entity, ship: Ship, pos: Position, vel: Velocity) {
    if let Ok((s, p, v)) =
        world.query_one_mut::<(&mut Ship, &mut Position, &mut Velocity)>(entity)
    {
        *s = ship;
        *p = pos;
        *v = vel;
    }
}

/// Tick every ship present at the start of the pass.
pub fn run(ctx: &mut TickContext<'_>) {
    for entity in ship_roster(ctx.world) {
        if ctx.world.contains(entity) {
            tick_ship(ctx, entity);
        }
    }
}

pub fn tick_ship(ctx: &mut TickContext<'_>, entity: Entity) {
    let Some((mut ship, mut pos, mut vel)) = read_ship(ctx.world, entity) else {
        return;
    };

    if *ctx.player == Some(entity) {
        draw_ship(&mut ctx.painter, &ship, &pos, &vel, ctx.tick);
        return;
    }

    if percentage_chance(ctx.rng, DIRECTION_CHANGE_CHANCE) {
        vel = world_setup::random_step(ctx.rng);
    }
    move_ship(&mut ship, &mut pos, &vel, &ctx.area);
    write_ship(ctx.world, entity, ship, pos, vel);
    draw_ship(&mut ctx.painter, &ship, &pos, &vel, ctx.tick);

    if percentage_chance(ctx.rng, FIRE_CHANCE) {
        let roster = ship_roster(ctx.world);
        if let Some(target) = choose_target(ctx.rng, &roster, entity) {
            fire_at(ctx, entity, target);
        }
    }
}

/// One tick of movement. A frozen ship burns a freeze tick instead of
/// moving; otherwise a step that would leave the play area is skipped.
pub fn move_ship(ship: &mut Ship, pos: &mut Position, vel: &Velocity, area: &PlayArea) {
    if !vel.is_zero() {
        ship.facing = vel.heading();
    }
    if ship.freeze_ticks > 0 {
        ship.freeze_ticks -= 1;
        return;
    }
    let next = pos.offset(vel);
    if area.contains(&next) {
        *pos = next;
    }
}

/// Freeze for `ticks`. Never shortens a longer freeze already in place.
pub fn freeze(ship: &mut Ship, ticks: u32) {
    ship.freeze_ticks = ship.freeze_ticks.max(ticks);
}

pub fn draw_ship(
    painter: &mut Painter<'_>,
    ship: &Ship,
    pos: &Position,
    vel: &Velocity,
    tick: u64,
) {
    let hull = shapes::ship_hull(pos, ship.facing, ship.radius);
    painter.polygon(&hull, ship.color.rgb());
    painter.outline(&hull, 2.0, WHITE);

    let (engine, glow) = shapes::ship_engine(pos, ship.facing, ship.radius);
    let flame = if vel.is_zero() {
        NamedColor::Gray.rgb()
    } else {
        flame_flicker(tick, ship.id.0)
    };
    painter.circle(engine, glow, flame);

    if ship.freeze_ticks > 0 {
        painter.ring(*pos, ship.radius + FREEZE_RING_GAP, 2.0, FREEZE_COLOR);
    }
}

/// Fire the range-appropriate weapon from `shooter` at `target`.
pub fn fire_at(ctx: &mut TickContext<'_>, shooter: Entity, target: Entity) -> Option<Weapon> {
    let (shooter_ship, from, _) = read_ship(ctx.world, shooter)?;
    let (target_ship, to, _) = read_ship(ctx.world, target)?;

    let weapon = select_weapon(from.distance_to(&to));
    trace!(
        shooter = shooter_ship.id.0,
        target = target_ship.id.0,
        ?weapon,
        "weapon fired"
    );
    ctx.events.push(SimEvent::WeaponFired {
        shooter: shooter_ship.id,
        target: target_ship.id,
        weapon,
    });

    if !weapon.is_beam() {
        launch_salvo(ctx, shooter, &shooter_ship, from, to, weapon);
        return Some(weapon);
    }

    // Beams are drawn for one frame and never collide.
    if weapon == Weapon::FreezeRay {
        ctx.painter.line(from, to, BEAM_WIDTH, FREEZE_COLOR);
        if let Ok(mut ship) = ctx.world.get::<&mut Ship>(target) {
            freeze(&mut ship, FREEZE_RAY_TICKS);
        }
        ctx.events.push(SimEvent::ShipFrozen {
            ship: target_ship.id,
            ticks: FREEZE_RAY_TICKS,
        });
    } else {
        ctx.painter.line(from, to, BEAM_WIDTH, NamedColor::Red.rgb());
    }
    Some(weapon)
}

fn launch_salvo(
    ctx: &mut TickContext<'_>,
    shooter: Entity,
    shooter_ship: &Ship,
    from: Position,
    to: Position,
    weapon: Weapon,
) {
    let Some(salvo) = plan_salvo(weapon, &from, &to) else {
        return;
    };

    let facing = if salvo.velocity.is_zero() {
        shooter_ship.facing
    } else {
        salvo.velocity.heading()
    };
    for _ in 0..salvo.rounds {
        let body = ProjectileBody {
            projectile: Projectile {
                owner: shooter_ship.id,
                radius: salvo.radius,
                color: shooter_ship.color.rgb(),
                kind: salvo.kind,
                facing,
                ticks: 0,
            },
            position: from,
            velocity: salvo.velocity,
            acceleration: salvo.acceleration,
        };
        projectiles::launch(ctx, body);
    }

    if let Some(recoil) = salvo.recoil {
        if let Ok(mut vel) = ctx.world.get::<&mut Velocity>(shooter) {
            vel.x += recoil.x;
            vel.y += recoil.y;
        }
        let away = unit_or_left(-salvo.velocity.as_dvec2());
        let origin = Position::from(from.as_dvec2() + away * shooter_ship.radius);
        let burst = exhaust::new(ctx.rng, origin, away, EXHAUST_STRENGTH);
        world_setup::spawn_emitter(ctx.world, burst);
    }
}

/// Blow up a ship: leave a death burst, remove it, and append a fresh
/// replacement so the population never shrinks.
pub fn destroy_ship(ctx: &mut TickContext<'_>, entity: Entity, cause: DestructionCause) -> bool {
    let Some((ship, pos, _)) = read_ship(ctx.world, entity) else {
        return false;
    };

    let burst = death_burst::new(ctx.rng, pos, Some(ship.color));
    world_setup::spawn_death_burst(ctx.world, burst);
    let _ = ctx.world.despawn(entity);
    if *ctx.player == Some(entity) {
        *ctx.player = None;
    }
    ctx.events.push(SimEvent::ShipDestroyed {
        ship: ship.id,
        position: pos,
        cause,
    });

    let (_, replacement) =
        world_setup::spawn_ship(ctx.world, ctx.rng, &ctx.area, ctx.next_ship_id);
    ctx.events.push(SimEvent::ShipSpawned { ship: replacement });
    debug!(
        ship = ship.id.0,
        replacement = replacement.0,
        ?cause,
        "ship destroyed"
    );
    true
}
