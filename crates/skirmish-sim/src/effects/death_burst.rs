//! Composite explosion: flash, shockwave ring, sparks and smoke.
//!
//! All four stages run concurrently from the moment of destruction. The
//! burst is finished once every stage has run out.

use glam::DVec2;
use rand::Rng;

use skirmish_core::components::{DeathBurst, Particle};
use skirmish_core::constants::*;
use skirmish_core::draw::Rgb;
use skirmish_core::enums::NamedColor;
use skirmish_core::types::Position;

use super::{draw_particles, scattered};
use crate::painter::Painter;

const WHITE: Rgb = Rgb::new(255, 255, 255);

const YELLOW_SHADES: [Rgb; 3] = [
    Rgb::new(255, 255, 180),
    Rgb::new(255, 220, 100),
    Rgb::new(255, 200, 60),
];
const ORANGE_SHADES: [Rgb; 3] = [
    Rgb::new(255, 200, 120),
    Rgb::new(255, 160, 60),
    Rgb::new(255, 120, 40),
];
const RED_SHADES: [Rgb; 3] = [
    Rgb::new(255, 150, 120),
    Rgb::new(255, 100, 80),
    Rgb::new(255, 60, 60),
];
const BLUE_SHADES: [Rgb; 3] = [
    Rgb::new(180, 220, 255),
    Rgb::new(140, 200, 255),
    Rgb::new(100, 180, 255),
];
const PINK_SHADES: [Rgb; 3] = [
    Rgb::new(255, 180, 220),
    Rgb::new(255, 150, 210),
    Rgb::new(255, 120, 200),
];
const CYAN_SHADES: [Rgb; 3] = [
    Rgb::new(180, 255, 255),
    Rgb::new(140, 240, 255),
    Rgb::new(100, 220, 255),
];

/// Spark shades keyed by the destroyed ship's color. Orange covers the rest.
pub fn palette_for(base: NamedColor) -> [Rgb; 3] {
    match base {
        NamedColor::Yellow => YELLOW_SHADES,
        NamedColor::Red => RED_SHADES,
        NamedColor::Blue => BLUE_SHADES,
        NamedColor::Pink => PINK_SHADES,
        NamedColor::Cyan => CYAN_SHADES,
        _ => ORANGE_SHADES,
    }
}

/// Burst at `center`. Without a base color one of yellow/orange/red is picked.
pub fn new<R: Rng + ?Sized>(rng: &mut R, center: Position, base: Option<NamedColor>) -> DeathBurst {
    let base = base.unwrap_or_else(|| {
        const HOT: [NamedColor; 3] = [NamedColor::Yellow, NamedColor::Orange, NamedColor::Red];
        HOT[rng.gen_range(0..HOT.len())]
    });
    let palette = palette_for(base);
    let ring_max_radius = rng.gen_range(RING_MAX_RADIUS.0..=RING_MAX_RADIUS.1) as f64;

    let spark_count = rng.gen_range(SPARK_COUNT.0..=SPARK_COUNT.1);
    let sparks = (0..spark_count)
        .map(|_| {
            let speed = rng.gen_range(SPARK_SPEED.0..SPARK_SPEED.1);
            let velocity = scattered(rng, speed);
            Particle {
                position: center,
                velocity: velocity.into(),
                life: rng.gen_range(SPARK_LIFE.0..=SPARK_LIFE.1),
                radius: rng.gen_range(SPARK_RADIUS.0..SPARK_RADIUS.1),
                color: palette[rng.gen_range(0..palette.len())],
            }
        })
        .collect();

    let smoke_count = rng.gen_range(SMOKE_COUNT.0..=SMOKE_COUNT.1);
    let smoke = (0..smoke_count)
        .map(|_| {
            let speed = rng.gen_range(SMOKE_SPEED.0..SMOKE_SPEED.1);
            let velocity = scattered(rng, speed);
            Particle {
                position: center,
                velocity: velocity.into(),
                life: rng.gen_range(SMOKE_LIFE.0..=SMOKE_LIFE.1),
                radius: rng.gen_range(SMOKE_RADIUS.0..SMOKE_RADIUS.1),
                color: DEATH_SMOKE_COLOR,
            }
        })
        .collect();

    DeathBurst {
        center,
        palette,
        flash_ticks: FLASH_TICKS,
        flash_radius: FLASH_START_RADIUS,
        ring_radius: RING_START_RADIUS,
        ring_width: RING_START_WIDTH,
        ring_max_radius,
        sparks,
        smoke,
    }
}

/// Advance every stage by one tick.
pub fn update(burst: &mut DeathBurst) {
    if burst.ring_radius < burst.ring_max_radius {
        burst.ring_radius += RING_STEP;
        burst.ring_width = (burst.ring_width - RING_THINNING).max(1.0);
    }

    if burst.flash_ticks > 0 {
        burst.flash_ticks -= 1;
        burst.flash_radius *= FLASH_GROWTH;
    }

    let center = burst.center.as_dvec2();
    for p in burst.sparks.iter_mut() {
        p.position = p.position.offset(&p.velocity);
        let outward = p.position.as_dvec2() - center;
        let push = outward / (outward.length() + 1e-5) * SPARK_OUTWARD_PUSH;
        p.velocity = (p.velocity.as_dvec2() * SPARK_DRAG + push).into();
        p.life = p.life.saturating_sub(1);
        p.radius = (p.radius - SPARK_SHRINK).max(SPARK_MIN_RADIUS);
    }
    burst.sparks.retain(|p| p.life > 0 && p.radius > SPARK_MIN_RADIUS);

    for p in burst.smoke.iter_mut() {
        p.position = p.position.offset(&p.velocity);
        let rising = p.velocity.as_dvec2() - DVec2::new(0.0, SMOKE_RISE);
        p.velocity = (rising * SMOKE_DRAG).into();
        p.life = p.life.saturating_sub(1);
        p.radius = (p.radius + SMOKE_GROWTH).min(SMOKE_MAX_RADIUS);
    }
    burst.smoke.retain(|p| p.life > 0);
}

pub fn is_finished(burst: &DeathBurst) -> bool {
    burst.flash_ticks == 0
        && burst.ring_radius >= burst.ring_max_radius
        && burst.sparks.is_empty()
        && burst.smoke.is_empty()
}

pub fn draw(burst: &DeathBurst, painter: &mut Painter<'_>) {
    if burst.flash_ticks > 0 {
        painter.circle(burst.center, burst.flash_radius.trunc().max(2.0), WHITE);
    }
    if burst.ring_radius < burst.ring_max_radius {
        painter.ring(
            burst.center,
            burst.ring_radius.trunc(),
            burst.ring_width.trunc().max(1.0),
            WHITE,
        );
    }
    draw_particles(painter, &burst.sparks);
    draw_particles(painter, &burst.smoke);
}
