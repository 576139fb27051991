//! Per-frame systems, run by the engine in a fixed order.
//!
//! Projectiles, emitters and death bursts are visited from a `FrameRoster`
//! taken before input runs, so anything launched or spawned during the
//! frame waits for the next one. Ships and stars snapshot at the start of
//! their own pass. Entities despawned mid-pass are skipped.

pub mod effects;
pub mod input;
pub mod projectiles;
pub mod ships;
pub mod snapshot;
pub mod stars;

use hecs::{Entity, World};

use skirmish_core::components::{DeathBurst, Emitter, Projectile};
use skirmish_core::draw::Rgb;
use skirmish_core::enums::NamedColor;

/// Entities alive when the frame began, per late-running pass.
#[derive(Debug, Clone, Default)]
pub struct FrameRoster {
    pub projectiles: Vec<Entity>,
    pub emitters: Vec<Entity>,
    pub bursts: Vec<Entity>,
}

impl FrameRoster {
    pub fn collect(world: &World) -> Self {
        Self {
            projectiles: entities_with::<Projectile>(world),
            emitters: entities_with::<Emitter>(world),
            bursts: entities_with::<DeathBurst>(world),
        }
    }
}

fn entities_with<T: hecs::Component>(world: &World) -> Vec<Entity> {
    world.query::<&T>().iter().map(|(entity, _)| entity).collect()
}

/// Flame shade for a given frame. Depends only on the frame and a salt.
pub fn flame_flicker(tick: u64, salt: u64) -> Rgb {
    let palette = NamedColor::FLAME_PALETTE;
    let index = (tick.wrapping_add(salt) % palette.len() as u64) as usize;
    palette[index].rgb()
}
