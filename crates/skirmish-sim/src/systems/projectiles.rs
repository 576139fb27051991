//! Projectile flight: integrate, draw, collide, trail, expire.

use hecs::{Entity, World};

use skirmish_core::components::{Projectile, Ship};
use skirmish_core::constants::*;
use skirmish_core::enums::{DestructionCause, NamedColor, ProjectileKind};
use skirmish_core::types::{Acceleration, Position, ShipId, Velocity};

use crate::context::TickContext;
use crate::effects::{trail_smoke, unit_or_left};
use crate::painter::Painter;
use crate::shapes;
use crate::systems::{flame_flicker, ships};
use crate::world_setup::{self, ProjectileBody};

fn read_body(world: &mut World, entity: Entity) -> Option<ProjectileBody> {
    world
        .query_one_mut::<(&Projectile, &Position, &Velocity, &Acceleration)>(entity)
        .ok()
        .map(|(projectile, position, velocity, acceleration)| ProjectileBody {
            projectile: *projectile,
            position: *position,
            velocity: *velocity,
            acceleration: *acceleration,
        })
}

fn write_body(world: &mut World, entity: Entity, body: &ProjectileBody) {
    if let Ok((projectile, position, velocity)) =
        world.query_one_mut::<(&mut Projectile, &mut Position, &mut Velocity)>(entity)
    {
        *projectile = body.projectile;
        *position = body.position;
        *velocity = body.velocity;
    }
}

/// First ship in collection order, other than `owner`, whose radius
/// strictly contains `point`.
pub fn find_collision(world: &World, point: &Position, owner: ShipId) -> Option<Entity> {
    let mut candidates: Vec<(ShipId, Entity, Position, f64)> = world
        .query::<(&Ship, &Position)>()
        .iter()
        .map(|(entity, (ship, pos))| (ship.id, entity, *pos, ship.radius))
        .collect();
    candidates.sort_unstable_by_key(|(id, ..)| *id);

    candidates
        .into_iter()
        .find(|(id, _, pos, radius)| {
            *id != owner && point.distance_squared_to(pos) < radius * radius
        })
        .map(|(_, entity, ..)| entity)
}

/// One flight step: accelerate, move, draw, then test for a hit.
/// Returns the struck ship, if any.
pub fn advance(ctx: &mut TickContext<'_>, body: &mut ProjectileBody) -> Option<Entity> {
    body.velocity.accelerate(&body.acceleration);
    body.position = body.position.offset(&body.velocity);
    if !body.velocity.is_zero() {
        body.projectile.facing = body.velocity.heading();
    }
    draw_projectile(&mut ctx.painter, body, ctx.tick);
    find_collision(ctx.world, &body.position, body.projectile.owner)
}

fn hit(ctx: &mut TickContext<'_>, body: &ProjectileBody, struck: Entity) {
    let cause = DestructionCause::Projectile {
        kind: body.projectile.kind,
        shooter: body.projectile.owner,
    };
    ships::destroy_ship(ctx, struck, cause);
}

/// Put a freshly fired round into the world. The round takes one full
/// flight step first; if that step already hits, the round is spent and
/// never registered.
pub fn launch(ctx: &mut TickContext<'_>, mut body: ProjectileBody) -> Option<Entity> {
    if let Some(struck) = advance(ctx, &mut body) {
        hit(ctx, &body, struck);
        return None;
    }
    Some(world_setup::spawn_projectile(ctx.world, body))
}

/// Tick the projectiles that were in flight when the frame began. Rounds
/// launched this frame already took their first step.
pub fn run(ctx: &mut TickContext<'_>, in_flight: &[Entity]) {
    for &entity in in_flight {
        if ctx.world.contains(entity) {
            tick_projectile(ctx, entity);
        }
    }
}

pub fn tick_projectile(ctx: &mut TickContext<'_>, entity: Entity) {
    let Some(mut body) = read_body(ctx.world, entity) else {
        return;
    };

    if let Some(struck) = advance(ctx, &mut body) {
        let _ = ctx.world.despawn(entity);
        hit(ctx, &body, struck);
        return;
    }

    body.projectile.ticks += 1;
    if body.projectile.kind == ProjectileKind::GlideBomb
        && body.projectile.ticks % GLIDE_BOMB_SMOKE_INTERVAL == 0
    {
        let behind = unit_or_left(-body.velocity.as_dvec2());
        let offset = body.projectile.radius * GLIDE_BOMB_SMOKE_OFFSET;
        let origin = Position::from(body.position.as_dvec2() + behind * offset);
        let puff = trail_smoke::new(ctx.rng, origin, behind, GLIDE_BOMB_SMOKE_STRENGTH);
        world_setup::spawn_emitter(ctx.world, puff);
    }

    if ctx.area.contains(&body.position) {
        write_body(ctx.world, entity, &body);
    } else {
        let _ = ctx.world.despawn(entity);
    }
}

pub fn draw_projectile(painter: &mut Painter<'_>, body: &ProjectileBody, tick: u64) {
    let projectile = &body.projectile;
    let pos = &body.position;
    match projectile.kind {
        ProjectileKind::Generic => {
            painter.circle(*pos, projectile.radius, projectile.color);
        }
        ProjectileKind::Torpedo => {
            let shape = shapes::torpedo(pos, projectile.facing, projectile.radius);
            painter.polygon(&shape.body, projectile.color);
            painter.outline(&shape.body, 1.0, NamedColor::White.rgb());
            painter.polygon(&shape.fin_top, projectile.color);
            painter.polygon(&shape.fin_bottom, projectile.color);
            let flame = if body.velocity.is_zero() {
                NamedColor::Gray.rgb()
            } else {
                flame_flicker(tick, u64::from(projectile.ticks))
            };
            painter.circle(shape.tail, shape.flame_radius, flame);
        }
        ProjectileKind::GlideBomb => {
            let shape = shapes::glide_bomb(pos, projectile.facing, projectile.radius);
            painter.polygon(&shape.body, BOMB_BODY_COLOR);
            painter.outline(&shape.body, 1.0, BOMB_OUTLINE_COLOR);
            painter.polygon(&shape.fin_top, BOMB_BODY_COLOR);
            painter.polygon(&shape.fin_bottom, BOMB_BODY_COLOR);
            painter.polygon(&shape.stripe, projectile.color);
        }
    }
}
