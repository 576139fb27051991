//! Raw input events forwarded by the host once per frame.
//!
//! Events are processed at the start of the next frame, before any ticking.

use serde::{Deserialize, Serialize};

/// A key as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Char(char),
    /// Any other key, by host-specific code.
    Other(u32),
}

impl Key {
    /// Escape and `q` end the run instead of destroying a ship.
    pub fn is_exit(self) -> bool {
        matches!(self, Key::Escape | Key::Char('q') | Key::Char('Q'))
    }
}

/// Discrete input from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    /// Window closed; the host should stop advancing frames.
    Quit,
    /// Any exit key requests quit; every other key destroys a random ship.
    KeyPress { key: Key },
}
