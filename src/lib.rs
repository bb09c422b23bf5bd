//! sketchboard - headless core of an interactive vector-drawing surface.
//!
//! Users draw freehand strokes, erase them, and pan/zoom an infinite
//! canvas. This crate holds the input-routing and coordinate-transform
//! core: a declarative binding table keyed by modifier+button combinations,
//! a held-input tracker driving continuous move callbacks, an affine
//! zoom/pan engine keeping screen and canvas coordinates consistent, and
//! the segment-proximity test behind the eraser.
//!
//! Rendering, widgets, and window management are external: the embedding
//! UI layer translates its toolkit's events into [`input::events`] shapes,
//! feeds them to a [`canvas::SketchCanvas`], and renders from the canvas's
//! outbound queries (paths, transform matrix, zoom, cursor, held state).

pub mod canvas;
pub mod constants;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod settings;
pub mod spatial_index;
pub mod types;

pub use canvas::{CanvasStatus, EraseIndicator, SketchCanvas};
pub use geometry::{Affine, Point};
pub use input::{CanonicalInput, InputBindings, InputTracker};
pub use settings::Settings;
pub use types::{CanvasMode, Color, PathData};
