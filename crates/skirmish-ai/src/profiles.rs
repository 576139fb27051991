//! Firing profiles for projectile weapons.

use skirmish_core::constants::*;
use skirmish_core::enums::{ProjectileKind, Weapon};

/// How a projectile weapon launches its rounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponProfile {
    /// Rounds per salvo, all launched with the same velocity.
    pub rounds: usize,
    /// Per-axis distance to the aim point is divided by this.
    pub speed_divisor: f64,
    /// The aim point sits this far above the target.
    pub aim_lift: f64,
    /// Constant downward acceleration.
    pub gravity: f64,
    /// When set, rounds accelerate by launch velocity / divisor each tick.
    pub boost_divisor: Option<f64>,
    pub radius: f64,
    pub kind: ProjectileKind,
    /// Recoil impulse on the launcher, as a multiple of launch velocity.
    pub recoil: Option<f64>,
}

/// Profile for a projectile weapon. Beams have none.
pub fn get_profile(weapon: Weapon) -> Option<WeaponProfile> {
    match weapon {
        Weapon::Laser | Weapon::FreezeRay => None,
        Weapon::MachineGun => Some(WeaponProfile {
            rounds: MACHINE_GUN_ROUNDS,
            speed_divisor: MACHINE_GUN_SPEED_DIVISOR,
            aim_lift: 0.0,
            gravity: 0.0,
            boost_divisor: None,
            radius: GENERIC_ROUND_RADIUS,
            kind: ProjectileKind::Generic,
            recoil: None,
        }),
        Weapon::GlideBomb => Some(WeaponProfile {
            rounds: GLIDE_BOMB_COUNT,
            speed_divisor: GLIDE_BOMB_SPEED_DIVISOR,
            aim_lift: GLIDE_BOMB_AIM_HEIGHT,
            gravity: GLIDE_BOMB_GRAVITY,
            boost_divisor: None,
            radius: GLIDE_BOMB_RADIUS,
            kind: ProjectileKind::GlideBomb,
            recoil: None,
        }),
        Weapon::Torpedo => Some(WeaponProfile {
            rounds: TORPEDO_COUNT,
            speed_divisor: TORPEDO_SPEED_DIVISOR,
            aim_lift: 0.0,
            gravity: 0.0,
            boost_divisor: Some(TORPEDO_ACCEL_DIVISOR),
            radius: TORPEDO_RADIUS,
            kind: ProjectileKind::Torpedo,
            recoil: Some(TORPEDO_RECOIL),
        }),
    }
}
