//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::draw::Rgb;
use crate::enums::*;
use crate::types::{Position, ShipId, Velocity};

/// An autonomous ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ship {
    pub id: ShipId,
    pub radius: f64,
    pub color: NamedColor,
    /// Last facing angle (radians). Kept while the ship is stationary.
    pub facing: f64,
    /// Ticks of movement lock remaining; 0 means not frozen.
    pub freeze_ticks: u32,
}

/// A projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Ship that fired it; never a valid collision target.
    pub owner: ShipId,
    pub radius: f64,
    pub color: Rgb,
    pub kind: ProjectileKind,
    /// Last facing angle (radians), refreshed whenever velocity is non-zero.
    pub facing: f64,
    /// Ticks flown since registration (throttles glide-bomb smoke).
    pub ticks: u32,
}

/// Decorative background star.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Star {
    pub radius: f64,
    pub color: NamedColor,
}

/// One particle of an effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Position,
    pub velocity: Velocity,
    /// Ticks left before the particle expires.
    pub life: u32,
    pub radius: f64,
    pub color: Rgb,
}

/// Simple particle emitter (exhaust burst or trail puff).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Emitter {
    pub kind: EmitterKind,
    pub particles: Vec<Particle>,
}

/// Composite explosion left by a destroyed ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeathBurst {
    pub center: Position,
    /// Spark shades derived from the destroyed ship's color.
    pub palette: [Rgb; 3],
    /// Ticks of flash remaining.
    pub flash_ticks: u32,
    pub flash_radius: f64,
    pub ring_radius: f64,
    pub ring_width: f64,
    pub ring_max_radius: f64,
    pub sparks: Vec<Particle>,
    pub smoke: Vec<Particle>,
}
