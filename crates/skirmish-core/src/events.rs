//! Events emitted by the simulation for host and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Position, ShipId};

/// Something notable that happened during a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A ship fired at a target.
    WeaponFired {
        shooter: ShipId,
        target: ShipId,
        weapon: Weapon,
    },
    /// A freezing ray landed.
    ShipFrozen { ship: ShipId, ticks: u32 },
    /// A ship blew up and left a death burst at `position`.
    ShipDestroyed {
        ship: ShipId,
        position: Position,
        cause: DestructionCause,
    },
    /// A ship joined the fleet (initial population or replacement).
    ShipSpawned { ship: ShipId },
    /// The host asked the simulation to stop.
    QuitRequested,
}
