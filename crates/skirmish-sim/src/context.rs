//! Per-frame context handed to every system.
//!
//! Entities hold no reference to global state: everything a tick may read
//! or mutate travels through `TickContext`.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use skirmish_core::events::SimEvent;
use skirmish_core::types::PlayArea;

use crate::painter::Painter;

pub struct TickContext<'a> {
    pub world: &'a mut World,
    pub rng: &'a mut ChaCha8Rng,
    pub area: PlayArea,
    pub painter: Painter<'a>,
    pub events: &'a mut Vec<SimEvent>,
    /// Next ship id to hand out.
    pub next_ship_id: &'a mut u64,
    /// Ship reserved for manual control, rendered but never driven.
    pub player: &'a mut Option<Entity>,
    /// Index of the frame being advanced (used for flame flicker).
    pub tick: u64,
}
