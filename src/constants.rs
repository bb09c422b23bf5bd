//! Crate-wide constants.
//!
//! Centralizes the tunable numbers for the zoom/pan engine, the eraser,
//! and the canonical-input label tables. Runtime overrides live in
//! [`crate::settings::Settings`]; these are the defaults.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f64 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f64 = 5.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Zoom change per unit of raw wheel delta
pub const SCROLL_MULTIPLIER: f64 = 3.0 / 2000.0;

// ============================================================================
// Eraser
// ============================================================================

/// Distance from the cursor (in canvas units) within which a stroke is erased
pub const ERASE_RADIUS: f64 = 20.0;

// ============================================================================
// Stroke Defaults
// ============================================================================

/// Default stroke width for new paths
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

/// Default stroke color for new paths (black)
pub const DEFAULT_STROKE_COLOR: [u8; 3] = [0, 0, 0];

// ============================================================================
// Input Labels
// ============================================================================

/// Number of mouse buttons tracked (indices 0..4, one bit each in the
/// enter-event bitmask)
pub const MOUSE_BUTTON_COUNT: u8 = 5;

/// Display labels for mouse buttons, indexed by button number
pub const MOUSE_BUTTONS: [&str; 5] = ["Mouse1", "Mouse2", "Mouse3", "Mouse4", "Mouse5"];

/// Display labels for wheel directions, indexed by `signum(delta) + 1`
pub const WHEEL_DIRECTIONS: [&str; 3] = ["WheelUp", "WheelInvalid", "WheelDown"];

/// Display label for the sentinel "no input required" binding
pub const NONE_LABEL: &str = "none";
