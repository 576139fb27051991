//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::draw::Rgb;

/// Named colors the simulation paints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedColor {
    White,
    LightGray,
    DarkGray,
    Gray,
    Yellow,
    Blue,
    Orange,
    Pink,
    Cyan,
    Red,
}

impl NamedColor {
    /// Colors autonomous ships are painted with.
    pub const SHIP_PALETTE: [NamedColor; 5] = [
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Orange,
        NamedColor::Pink,
        NamedColor::Cyan,
    ];

    pub const STAR_PALETTE: [NamedColor; 3] =
        [NamedColor::White, NamedColor::LightGray, NamedColor::DarkGray];

    /// Engine glow and exhaust colors.
    pub const FLAME_PALETTE: [NamedColor; 3] =
        [NamedColor::Orange, NamedColor::Yellow, NamedColor::Red];

    pub fn rgb(self) -> Rgb {
        match self {
            NamedColor::White => Rgb::new(255, 255, 255),
            NamedColor::LightGray => Rgb::new(211, 211, 211),
            NamedColor::DarkGray => Rgb::new(169, 169, 169),
            NamedColor::Gray => Rgb::new(190, 190, 190),
            NamedColor::Yellow => Rgb::new(255, 255, 0),
            NamedColor::Blue => Rgb::new(0, 0, 255),
            NamedColor::Orange => Rgb::new(255, 165, 0),
            NamedColor::Pink => Rgb::new(255, 192, 203),
            NamedColor::Cyan => Rgb::new(0, 255, 255),
            NamedColor::Red => Rgb::new(255, 0, 0),
        }
    }
}

/// Projectile kind, governing motion profile and silhouette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Plain round, drawn as a dot (machine-gun fire).
    #[default]
    Generic,
    /// Accelerating rocket with a flickering tail flame.
    Torpedo,
    /// Falls under constant downward acceleration and trails smoke.
    GlideBomb,
}

/// Weapon chosen by the range state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weapon {
    /// Instant beam; purely visual.
    Laser,
    /// Instant beam that freezes the target in place.
    FreezeRay,
    /// Burst of generic rounds.
    MachineGun,
    /// Lobbed bombs aimed above the target.
    GlideBomb,
    /// Accelerating torpedoes with launch recoil.
    Torpedo,
}

impl Weapon {
    /// Beams hit instantly and never create projectile entities.
    pub fn is_beam(self) -> bool {
        matches!(self, Weapon::Laser | Weapon::FreezeRay)
    }
}

/// Kind of a simple particle emitter held in the effects collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmitterKind {
    /// One-shot burst at torpedo launch.
    Exhaust,
    /// Small gray puff left behind gliding bombs.
    TrailSmoke,
}

/// Why a ship was destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DestructionCause {
    /// Struck by a projectile fired by `shooter`.
    Projectile {
        kind: ProjectileKind,
        shooter: crate::types::ShipId,
    },
    /// Removed by a host key press.
    Input,
}
