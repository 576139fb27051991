//! Fundamental geometric and simulation types.
//!
//! Screen space: origin at the top-left corner, x grows right, y grows down.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in device coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in units per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Constant per-tick change of velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Acceleration {
    pub x: f64,
    pub y: f64,
}

/// Stable identity of a ship. Assigned in spawn order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShipId(pub u64);

/// The bounded rectangle all in/out-of-bounds tests use, anchored at (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f64,
    pub height: f64,
}

/// Simulation time tracking. One tick is one rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of frames advanced so far.
    pub tick: u64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.distance_squared_to(other).sqrt()
    }

    /// Squared distance; avoids the square root for threshold tests.
    pub fn distance_squared_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// The position one tick of `velocity` later.
    pub fn offset(&self, velocity: &Velocity) -> Position {
        Position::new(self.x + velocity.x, self.y + velocity.y)
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Position::new(v.x, v.y)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Direction of travel in radians, screen convention (atan2(y, x)).
    pub fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Apply one tick of constant acceleration.
    pub fn accelerate(&mut self, acceleration: &Acceleration) {
        self.x += acceleration.x;
        self.y += acceleration.y;
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Velocity {
    fn from(v: DVec2) -> Self {
        Velocity::new(v.x, v.y)
    }
}

impl Acceleration {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl PlayArea {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Half-open containment: `[0, width) x [0, height)`.
    pub fn contains(&self, pos: &Position) -> bool {
        pos.x >= 0.0 && pos.y >= 0.0 && pos.x < self.width && pos.y < self.height
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}
