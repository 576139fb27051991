//! SKIRMISH headless host.
//!
//! Wires the simulation engine to a paced game loop thread, a console input
//! reader, and a recording draw surface.

pub mod config;
pub mod console;
pub mod game_loop;
pub mod state;

pub use skirmish_core as core;
