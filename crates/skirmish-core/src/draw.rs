//! The drawing-surface boundary.
//!
//! The simulation never rasterizes anything itself. Every frame it issues
//! immediate-mode primitives against a [`Surface`] supplied by the host and
//! never reads pixels back.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Position;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Failure reported by a drawing backend. Never fatal to a frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawError {
    #[error("degenerate {shape}: {reason}")]
    Degenerate {
        shape: &'static str,
        reason: &'static str,
    },
    #[error("backend failure: {0}")]
    Backend(String),
}

/// Immediate-mode 2D drawing target.
pub trait Surface {
    fn fill_circle(&mut self, center: Position, radius: f64, color: Rgb) -> Result<(), DrawError>;

    /// Circle outline of the given stroke width.
    fn stroke_circle(
        &mut self,
        center: Position,
        radius: f64,
        width: f64,
        color: Rgb,
    ) -> Result<(), DrawError>;

    fn fill_polygon(&mut self, points: &[Position], color: Rgb) -> Result<(), DrawError>;

    fn stroke_polygon(
        &mut self,
        points: &[Position],
        width: f64,
        color: Rgb,
    ) -> Result<(), DrawError>;

    fn line(
        &mut self,
        from: Position,
        to: Position,
        width: f64,
        color: Rgb,
    ) -> Result<(), DrawError>;
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DrawCommand {
    FillCircle {
        center: Position,
        radius: f64,
        color: Rgb,
    },
    StrokeCircle {
        center: Position,
        radius: f64,
        width: f64,
        color: Rgb,
    },
    FillPolygon {
        points: Vec<Position>,
        color: Rgb,
    },
    StrokePolygon {
        points: Vec<Position>,
        width: f64,
        color: Rgb,
    },
    Line {
        from: Position,
        to: Position,
        width: f64,
        color: Rgb,
    },
}

/// Surface that records every accepted primitive, in order.
///
/// Degenerate shapes are rejected with [`DrawError::Degenerate`] the way a
/// strict rasterizer would, which lets callers exercise their error paths.
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all commands recorded so far, leaving the recorder empty.
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of line segments drawn (beams).
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }
}

fn check_radius(shape: &'static str, radius: f64) -> Result<(), DrawError> {
    if radius > 0.0 && radius.is_finite() {
        Ok(())
    } else {
        Err(DrawError::Degenerate {
            shape,
            reason: "radius must be positive",
        })
    }
}

fn check_width(shape: &'static str, width: f64) -> Result<(), DrawError> {
    if width > 0.0 {
        Ok(())
    } else {
        Err(DrawError::Degenerate {
            shape,
            reason: "stroke width must be positive",
        })
    }
}

fn check_polygon(shape: &'static str, points: &[Position]) -> Result<(), DrawError> {
    if points.len() >= 3 {
        Ok(())
    } else {
        Err(DrawError::Degenerate {
            shape,
            reason: "polygon needs at least three points",
        })
    }
}

impl Surface for CommandRecorder {
    fn fill_circle(&mut self, center: Position, radius: f64, color: Rgb) -> Result<(), DrawError> {
        check_radius("circle", radius)?;
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        center: Position,
        radius: f64,
        width: f64,
        color: Rgb,
    ) -> Result<(), DrawError> {
        check_radius("ring", radius)?;
        check_width("ring", width)?;
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            width,
            color,
        });
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Position], color: Rgb) -> Result<(), DrawError> {
        check_polygon("polygon", points)?;
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
        Ok(())
    }

    fn stroke_polygon(
        &mut self,
        points: &[Position],
        width: f64,
        color: Rgb,
    ) -> Result<(), DrawError> {
        check_polygon("outline", points)?;
        check_width("outline", width)?;
        self.commands.push(DrawCommand::StrokePolygon {
            points: points.to_vec(),
            width,
            color,
        });
        Ok(())
    }

    fn line(
        &mut self,
        from: Position,
        to: Position,
        width: f64,
        color: Rgb,
    ) -> Result<(), DrawError> {
        check_width("line", width)?;
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
        Ok(())
    }
}

/// Surface that accepts and discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn fill_circle(&mut self, _: Position, _: f64, _: Rgb) -> Result<(), DrawError> {
        Ok(())
    }

    fn stroke_circle(&mut self, _: Position, _: f64, _: f64, _: Rgb) -> Result<(), DrawError> {
        Ok(())
    }

    fn fill_polygon(&mut self, _: &[Position], _: Rgb) -> Result<(), DrawError> {
        Ok(())
    }

    fn stroke_polygon(&mut self, _: &[Position], _: f64, _: Rgb) -> Result<(), DrawError> {
        Ok(())
    }

    fn line(&mut self, _: Position, _: Position, _: f64, _: Rgb) -> Result<(), DrawError> {
        Ok(())
    }
}
