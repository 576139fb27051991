//! Ship decision logic for SKIRMISH.
//!
//! Implements the weapon-range state machine, per-weapon firing profiles,
//! salvo planning, and random target selection. No ECS dependency.

pub mod fsm;
pub mod profiles;
pub mod targeting;

pub use skirmish_core as core;
