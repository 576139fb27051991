//! Weapon-range state machine.
//!
//! Pure functions that pick a weapon for a given target distance and work
//! out the launch parameters of the resulting salvo.

use glam::DVec2;

use skirmish_core::constants::*;
use skirmish_core::enums::{ProjectileKind, Weapon};
use skirmish_core::types::{Acceleration, Position, Velocity};

use crate::profiles::get_profile;

/// Launch parameters shared by every round of one salvo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Salvo {
    pub weapon: Weapon,
    pub rounds: usize,
    pub velocity: Velocity,
    pub acceleration: Acceleration,
    pub radius: f64,
    pub kind: ProjectileKind,
    /// Impulse added to the launcher's own velocity, once per salvo.
    pub recoil: Option<Velocity>,
}

/// Select a weapon by distance. Bands are half-open and evaluated low to high.
pub fn select_weapon(distance: f64) -> Weapon {
    if distance < LASER_MAX_RANGE {
        Weapon::Laser
    } else if distance < FREEZE_RAY_MAX_RANGE {
        Weapon::FreezeRay
    } else if distance < MACHINE_GUN_MAX_RANGE {
        Weapon::MachineGun
    } else if distance < GLIDE_BOMB_MAX_RANGE {
        Weapon::GlideBomb
    } else {
        Weapon::Torpedo
    }
}

/// Plan a salvo from `from` at `to`. Returns `None` for beam weapons.
pub fn plan_salvo(weapon: Weapon, from: &Position, to: &Position) -> Option<Salvo> {
    let profile = get_profile(weapon)?;

    let aim = DVec2::new(to.x, to.y - profile.aim_lift);
    let velocity = (aim - from.as_dvec2()) / profile.speed_divisor;

    let boost = match profile.boost_divisor {
        Some(divisor) => velocity / divisor,
        None => DVec2::ZERO,
    };
    let acceleration = Acceleration::new(boost.x, boost.y + profile.gravity);

    Some(Salvo {
        weapon,
        rounds: profile.rounds,
        velocity: velocity.into(),
        acceleration,
        radius: profile.radius,
        kind: profile.kind,
        recoil: profile.recoil.map(|factor| Velocity::from(-velocity * factor)),
    })
}
