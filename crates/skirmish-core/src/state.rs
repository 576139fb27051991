//! Frame snapshot: the visible state handed back to the host after each frame.

use serde::{Deserialize, Serialize};

use crate::enums::NamedColor;
use crate::events::SimEvent;
use crate::types::{Position, ShipId, SimTime, Velocity};

/// Complete frame summary returned by `advance_frame`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    /// Ships in collection order (ascending id).
    pub ships: Vec<ShipView>,
    pub projectile_count: usize,
    pub effect_count: usize,
    pub death_count: usize,
    pub star_count: usize,
    pub events: Vec<SimEvent>,
    /// Draw calls rejected by the surface this frame (swallowed).
    pub draw_failures: u32,
    /// True once the host has sent a quit or exit key.
    pub quit_requested: bool,
}

/// A ship as seen from outside the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipView {
    pub id: ShipId,
    pub position: Position,
    pub velocity: Velocity,
    pub radius: f64,
    pub color: NamedColor,
    pub freeze_ticks: u32,
    pub is_player: bool,
}
