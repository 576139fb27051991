//! Procedural particle effects: exhaust bursts, trail smoke, death bursts.
//!
//! Constructors draw from the simulation RNG. Updates are deterministic and
//! never touch the RNG; drawing goes through the painter only.

pub mod death_burst;
pub mod exhaust;
pub mod trail_smoke;

use glam::DVec2;
use rand::Rng;

use skirmish_core::components::{Emitter, Particle};
use skirmish_core::enums::EmitterKind;

use crate::painter::Painter;

/// Unit vector along `direction`, or pointing left when it has no length.
pub fn unit_or_left(direction: DVec2) -> DVec2 {
    if direction == DVec2::ZERO {
        DVec2::NEG_X
    } else {
        direction.normalize()
    }
}

/// Velocity along `base_angle` with a uniform angular jitter of `±jitter`.
fn fanned<R: Rng + ?Sized>(rng: &mut R, base_angle: f64, jitter: f64, speed: f64) -> DVec2 {
    let angle = base_angle + rng.gen_range(-jitter..jitter);
    DVec2::from_angle(angle) * speed
}

/// Velocity in a uniformly random direction.
fn scattered<R: Rng + ?Sized>(rng: &mut R, speed: f64) -> DVec2 {
    let angle = rng.gen_range(0.0..std::f64::consts::TAU);
    DVec2::from_angle(angle) * speed
}

/// Particle radius as drawn.
fn drawn_radius(radius: f64) -> f64 {
    radius.trunc().max(1.0)
}

fn draw_particles(painter: &mut Painter<'_>, particles: &[Particle]) {
    for p in particles {
        painter.circle(p.position, drawn_radius(p.radius), p.color);
    }
}

/// Advance one emitter by a tick and draw the survivors.
/// Returns false once the emitter has no particles left.
pub fn tick_emitter(emitter: &mut Emitter, painter: &mut Painter<'_>) -> bool {
    match emitter.kind {
        EmitterKind::Exhaust => exhaust::update(&mut emitter.particles),
        EmitterKind::TrailSmoke => trail_smoke::update(&mut emitter.particles),
    }
    draw_particles(painter, &emitter.particles);
    !emitter.particles.is_empty()
}
