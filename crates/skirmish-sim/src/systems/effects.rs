//! Ticks particle emitters and death bursts from the frame roster,
//! despawning finished ones.

use hecs::Entity;

use skirmish_core::components::{DeathBurst, Emitter};

use crate::context::TickContext;
use crate::effects::{death_burst, tick_emitter};

pub fn run_emitters(ctx: &mut TickContext<'_>, live: &[Entity]) {
    let mut spent: Vec<Entity> = Vec::new();

    for &entity in live {
        let Ok(emitter) = ctx.world.query_one_mut::<&mut Emitter>(entity) else {
            continue;
        };
        if !tick_emitter(emitter, &mut ctx.painter) {
            spent.push(entity);
        }
    }

    for entity in spent {
        let _ = ctx.world.despawn(entity);
    }
}

pub fn run_deaths(ctx: &mut TickContext<'_>, live: &[Entity]) {
    let mut spent: Vec<Entity> = Vec::new();

    for &entity in live {
        let Ok(burst) = ctx.world.query_one_mut::<&mut DeathBurst>(entity) else {
            continue;
        };
        death_burst::update(burst);
        death_burst::draw(burst, &mut ctx.painter);
        if death_burst::is_finished(burst) {
            spent.push(entity);
        }
    }

    for entity in spent {
        let _ = ctx.world.despawn(entity);
    }
}
