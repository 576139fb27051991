//! Simulation engine for SKIRMISH.
//!
//! Owns the hecs ECS world, ticks every entity once per frame in a fixed
//! order, and produces FrameSnapshots for the host.

pub mod chance;
pub mod context;
pub mod effects;
pub mod engine;
pub mod painter;
pub mod shapes;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use skirmish_core as core;

#[cfg(test)]
mod tests;
