//! Small gray puffs emitted behind gliding bombs.

use glam::DVec2;
use rand::Rng;

use skirmish_core::components::{Emitter, Particle};
use skirmish_core::constants::*;
use skirmish_core::enums::EmitterKind;
use skirmish_core::types::Position;

use super::{fanned, unit_or_left};

/// Puff at `origin` drifting along `direction`.
pub fn new<R: Rng + ?Sized>(
    rng: &mut R,
    origin: Position,
    direction: DVec2,
    strength: f64,
) -> Emitter {
    let base_angle = unit_or_left(direction).to_angle();
    let count = rng.gen_range(TRAIL_PARTICLES.0..=TRAIL_PARTICLES.1);

    let particles = (0..count)
        .map(|_| {
            let speed = rng.gen_range(TRAIL_SPEED.0..TRAIL_SPEED.1) * (0.8 + 0.6 * strength);
            let velocity = fanned(rng, base_angle, TRAIL_JITTER, speed);
            Particle {
                position: origin,
                velocity: velocity.into(),
                life: rng.gen_range(TRAIL_LIFE.0..=TRAIL_LIFE.1),
                radius: rng.gen_range(TRAIL_RADIUS.0..TRAIL_RADIUS.1),
                color: TRAIL_SMOKE_COLOR,
            }
        })
        .collect();

    Emitter {
        kind: EmitterKind::TrailSmoke,
        particles,
    }
}

pub fn update(particles: &mut Vec<Particle>) {
    for p in particles.iter_mut() {
        p.position = p.position.offset(&p.velocity);
        p.velocity = (p.velocity.as_dvec2() * TRAIL_DRAG).into();
        p.life = p.life.saturating_sub(1);
        p.radius = (p.radius + TRAIL_GROWTH).min(TRAIL_MAX_RADIUS);
    }
    particles.retain(|p| p.life > 0);
}
