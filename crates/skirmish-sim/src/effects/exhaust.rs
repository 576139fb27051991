//! One-shot flame burst left behind by a torpedo launch.

use glam::DVec2;
use rand::Rng;

use skirmish_core::components::{Emitter, Particle};
use skirmish_core::constants::*;
use skirmish_core::enums::{EmitterKind, NamedColor};
use skirmish_core::types::Position;

use super::{fanned, unit_or_left};

/// Burst at `origin` whose particles travel along `direction`.
pub fn new<R: Rng + ?Sized>(
    rng: &mut R,
    origin: Position,
    direction: DVec2,
    strength: f64,
) -> Emitter {
    let base_angle = unit_or_left(direction).to_angle();
    let count = rng.gen_range(EXHAUST_PARTICLES.0..=EXHAUST_PARTICLES.1);

    let particles = (0..count)
        .map(|_| {
            let speed = rng.gen_range(EXHAUST_SPEED.0..EXHAUST_SPEED.1) * (1.0 + 0.5 * strength);
            let velocity = fanned(rng, base_angle, EXHAUST_JITTER, speed);
            let life = rng.gen_range(EXHAUST_LIFE.0..=EXHAUST_LIFE.1);
            let radius = rng.gen_range(EXHAUST_RADIUS.0..=EXHAUST_RADIUS.1) as f64;
            let palette = NamedColor::FLAME_PALETTE;
            let flame = palette[rng.gen_range(0..palette.len())];
            Particle {
                position: origin,
                velocity: velocity.into(),
                life,
                radius,
                color: flame.rgb(),
            }
        })
        .collect();

    Emitter {
        kind: EmitterKind::Exhaust,
        particles,
    }
}

/// Move, age and shrink every particle; drop the expired ones.
pub fn update(particles: &mut Vec<Particle>) {
    for p in particles.iter_mut() {
        p.position = p.position.offset(&p.velocity);
        p.life = p.life.saturating_sub(1);
        p.radius = (p.radius - EXHAUST_SHRINK).max(EXHAUST_MIN_RADIUS);
    }
    particles.retain(|p| p.life > 0);
}
