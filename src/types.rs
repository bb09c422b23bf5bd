//! Core types for the sketchboard canvas.
//!
//! Defines the fundamental data structures shared across modules: stroke
//! color, path data, and the canvas interaction mode.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

// ============================================================================
// Stroke Style
// ============================================================================

/// RGB stroke color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

// ============================================================================
// Paths
// ============================================================================

/// A single freehand stroke: an ordered polyline in canvas space plus style.
///
/// Points are append-only while the stroke is being drawn; a stroke is only
/// ever removed wholesale by the eraser.
#[derive(Clone, Debug, PartialEq)]
pub struct PathData {
    /// Unique identifier, assigned sequentially by the path store
    pub id: u64,
    /// Canvas-space points, in draw order
    pub points: Vec<Point>,
    pub color: Color,
    pub stroke_width: f64,
}

// ============================================================================
// Canvas Mode
// ============================================================================

/// The active interaction mode of the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanvasMode {
    /// Freehand drawing with the primary button
    Draw,
    /// Remove strokes under the cursor while the primary button is held
    Erase,
    /// Pan the canvas by dragging with the primary button
    Move,
}

/// Cycling order for mode-switch keys.
const MODE_ORDER: [CanvasMode; 3] = [CanvasMode::Draw, CanvasMode::Erase, CanvasMode::Move];

impl CanvasMode {
    /// Human-readable name, for status displays.
    pub fn display_name(self) -> &'static str {
        match self {
            CanvasMode::Draw => "Draw",
            CanvasMode::Erase => "Erase",
            CanvasMode::Move => "Move",
        }
    }

    /// The next mode in cycling order, wrapping around.
    pub fn next(self) -> Self {
        let index = MODE_ORDER.iter().position(|&m| m == self).unwrap_or(0);
        MODE_ORDER[(index + 1) % MODE_ORDER.len()]
    }

    /// The previous mode in cycling order, wrapping around.
    pub fn prev(self) -> Self {
        let index = MODE_ORDER.iter().position(|&m| m == self).unwrap_or(0);
        MODE_ORDER[(index + MODE_ORDER.len() - 1) % MODE_ORDER.len()]
    }
}

impl Default for CanvasMode {
    fn default() -> Self {
        CanvasMode::Draw
    }
}
