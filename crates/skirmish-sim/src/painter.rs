//! Error-swallowing wrapper around the host's drawing surface.
//!
//! A rejected primitive never aborts a frame: the failure is counted,
//! logged at trace level, and drawing carries on.

use tracing::trace;

use skirmish_core::draw::{DrawError, Rgb, Surface};
use skirmish_core::types::Position;

pub struct Painter<'a> {
    surface: &'a mut dyn Surface,
    failures: u32,
}

impl<'a> Painter<'a> {
    pub fn new(surface: &'a mut dyn Surface) -> Self {
        Self {
            surface,
            failures: 0,
        }
    }

    /// Draw calls the surface rejected so far.
    pub fn failures(&self) -> u32 {
        self.failures
    }

    pub fn circle(&mut self, center: Position, radius: f64, color: Rgb) {
        let result = self.surface.fill_circle(center, radius, color);
        self.absorb("fill_circle", result);
    }

    pub fn ring(&mut self, center: Position, radius: f64, width: f64, color: Rgb) {
        let result = self.surface.stroke_circle(center, radius, width, color);
        self.absorb("stroke_circle", result);
    }

    pub fn polygon(&mut self, points: &[Position], color: Rgb) {
        let result = self.surface.fill_polygon(points, color);
        self.absorb("fill_polygon", result);
    }

    pub fn outline(&mut self, points: &[Position], width: f64, color: Rgb) {
        let result = self.surface.stroke_polygon(points, width, color);
        self.absorb("stroke_polygon", result);
    }

    pub fn line(&mut self, from: Position, to: Position, width: f64, color: Rgb) {
        let result = self.surface.line(from, to, width, color);
        self.absorb("line", result);
    }

    fn absorb(&mut self, primitive: &'static str, result: Result<(), DrawError>) {
        if let Err(err) = result {
            self.failures += 1;
            trace!(primitive, %err, "draw call rejected");
        }
    }
}
