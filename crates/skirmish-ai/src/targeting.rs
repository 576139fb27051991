//! Random target selection.

use rand::Rng;

use skirmish_core::constants::TARGET_SAMPLE_ATTEMPTS;

/// Sample the roster up to [`TARGET_SAMPLE_ATTEMPTS`] times and return the
/// first entry that is not `shooter`.
///
/// Gives up (returns `None`) when every draw lands on the shooter, which is
/// certain for a roster of one. An empty roster never samples.
pub fn choose_target<R, T>(rng: &mut R, roster: &[T], shooter: T) -> Option<T>
where
    R: Rng + ?Sized,
    T: Copy + PartialEq,
{
    if roster.is_empty() {
        return None;
    }
    for _ in 0..TARGET_SAMPLE_ATTEMPTS {
        let candidate = roster[rng.gen_range(0..roster.len())];
        if candidate != shooter {
            return Some(candidate);
        }
    }
    None
}
