//! Core types and definitions for the SKIRMISH simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, components, input events, simulation events, frame snapshots,
//! the drawing-surface boundary, and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod draw;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
