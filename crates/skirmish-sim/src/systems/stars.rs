//! Background star field.

use hecs::Entity;

use skirmish_core::components::Star;
use skirmish_core::constants::STAR_VELOCITY;
use skirmish_core::types::{Position, Velocity};

use crate::chance::star_spawn_roll;
use crate::context::TickContext;
use crate::world_setup;

/// Drift every star, draw it, and drop the ones that left the play area.
pub fn run(ctx: &mut TickContext<'_>) {
    let drift = Velocity::new(STAR_VELOCITY.0, STAR_VELOCITY.1);
    let mut gone: Vec<Entity> = Vec::new();

    for (entity, (star, pos)) in ctx.world.query_mut::<(&Star, &mut Position)>() {
        *pos = pos.offset(&drift);
        ctx.painter.circle(*pos, star.radius, star.color.rgb());
        if !ctx.area.contains(pos) {
            gone.push(entity);
        }
    }

    for entity in gone {
        let _ = ctx.world.despawn(entity);
    }
}

/// End-of-frame roll for one more star.
pub fn maybe_spawn(ctx: &mut TickContext<'_>) -> Option<Entity> {
    star_spawn_roll(ctx.rng).then(|| world_setup::spawn_star(ctx.world, ctx.rng, &ctx.area))
}
