//! Percentage rolls used by the autonomous behaviors.

use rand::Rng;

use skirmish_core::constants::STAR_SPAWN_THRESHOLD;

/// True when a uniform integer in `[0, 100]` is below `percentage`.
pub fn percentage_chance<R: Rng + ?Sized>(rng: &mut R, percentage: u32) -> bool {
    rng.gen_range(0..=100u32) < percentage
}

/// End-of-frame roll for a new background star.
pub fn star_spawn_roll<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_range(0..=100u32) > STAR_SPAWN_THRESHOLD
}
