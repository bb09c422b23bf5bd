//! Canvas orchestration.
//!
//! [`SketchCanvas`] wires the input registry, held-set tracker, transform
//! engine, and path store into the draw/erase/move behaviors. The embedding
//! UI layer feeds it raw events through the `on_*` entry points and reads
//! its outbound queries (zoom, cursor, matrix, held state) for rendering.
//!
//! ## Modules
//!
//! - `viewport` - zoom/pan transform engine
//! - `cursor` - raw and canvas-space cursor state
//! - `paths` - stroke storage and erasing
//!
//! Dispatch is single-threaded and synchronous: for each event, callback
//! invocation and the tracker update both complete before the next event is
//! processed.

pub mod cursor;
pub mod paths;
pub mod viewport;

use crate::geometry::{Affine, Point};
use crate::input::{
    CanonicalInput, InputBindings, InputEvent, InputTracker, KeyEvent, MouseEvent, WheelEvent,
};
use crate::settings::Settings;
use crate::types::{CanvasMode, Color};
use cursor::CursorState;
use paths::PathStore;
use tracing::debug;
use viewport::Viewport;

/// Data for rendering the eraser-radius indicator, present only while the
/// primary button is held in erase mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EraseIndicator {
    /// Raw screen-space position
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Snapshot of the display values a status bar needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasStatus {
    pub zoom: f64,
    pub mode_name: &'static str,
    /// Canvas-space cursor, if the pointer has been seen
    pub cursor: Option<Point>,
}

/// The drawing surface core.
pub struct SketchCanvas {
    settings: Settings,
    mode: CanvasMode,
    paths: PathStore,
    viewport: Viewport,
    cursor: CursorState,
    tracker: InputTracker,
    bindings: InputBindings<SketchCanvas>,
    stroke_color: Color,
    stroke_width: f64,
}

impl SketchCanvas {
    pub fn new(settings: Settings) -> Self {
        let viewport = Viewport::new(&settings);
        let stroke_color = settings.stroke_color;
        let stroke_width = settings.stroke_width;
        Self {
            settings,
            mode: CanvasMode::default(),
            paths: PathStore::new(),
            viewport,
            cursor: CursorState::new(),
            tracker: InputTracker::new(),
            bindings: Self::default_bindings(),
            stroke_color,
            stroke_width,
        }
    }

    /// The stock binding table: wheel zoom in both directions, arrow-key
    /// mode cycling, sentinel cursor tracking, and the primary-button mode
    /// behaviors.
    ///
    /// The mode behaviors match on the *current* mode at dispatch time, so
    /// switching modes never requires rebinding.
    fn default_bindings() -> InputBindings<SketchCanvas> {
        InputBindings::new()
            .bind_move(CanonicalInput::none(), |canvas: &mut SketchCanvas, _| {
                canvas.cursor.refresh_canvas(&canvas.viewport);
            })
            .bind_down(CanonicalInput::from_wheel(-1.0), |canvas, event| {
                if let InputEvent::Wheel(wheel) = event {
                    canvas.scroll_zoom(wheel.delta_y);
                }
            })
            .bind_down(CanonicalInput::from_wheel(1.0), |canvas, event| {
                if let InputEvent::Wheel(wheel) = event {
                    canvas.scroll_zoom(wheel.delta_y);
                }
            })
            .bind_down(CanonicalInput::from_key("ArrowRight"), |canvas, _| {
                canvas.set_mode(canvas.mode.next());
            })
            .bind_down(CanonicalInput::from_key("ArrowLeft"), |canvas, _| {
                canvas.set_mode(canvas.mode.prev());
            })
            .bind_down(CanonicalInput::from_mouse(0), |canvas, _| {
                canvas.mode_mouse_down();
            })
            .bind_move(CanonicalInput::from_mouse(0), |canvas, _| {
                canvas.mode_mouse_move();
            })
    }

    // ------------------------------------------------------------------
    // Event entry points
    // ------------------------------------------------------------------

    pub fn on_mouse_down(&mut self, event: MouseEvent) {
        self.cursor.update_raw(Point::new(event.x, event.y));
        self.cursor.refresh_canvas(&self.viewport);
        let bindings = self.bindings.clone();
        if let Some(input) = bindings.dispatch_down(self, &InputEvent::Mouse(event)) {
            self.tracker = self.tracker.with_input(input);
        }
    }

    pub fn on_mouse_up(&mut self, event: MouseEvent) {
        let bindings = self.bindings.clone();
        if let Some(input) = bindings.dispatch_up(self, &InputEvent::Mouse(event)) {
            self.tracker = self.tracker.without_input(&input);
        }
    }

    pub fn on_mouse_move(&mut self, event: MouseEvent) {
        self.cursor.update_raw(Point::new(event.x, event.y));
        self.cursor.refresh_canvas(&self.viewport);
        // Snapshots: callbacks see a consistent held-set and binding table
        // even if they replace either.
        let bindings = self.bindings.clone();
        let held = self.tracker.clone();
        bindings.dispatch_move(self, &event, &held);
    }

    /// Pointer re-entered the surface: resynchronize held buttons from the
    /// event's bitmask. Buttons released off-canvas are dropped here.
    pub fn on_mouse_enter(&mut self, event: MouseEvent) {
        self.cursor.update_raw(Point::new(event.x, event.y));
        self.cursor.refresh_canvas(&self.viewport);
        self.tracker = self.tracker.update_mouse_enter(&event);
    }

    /// Pointer left the surface: treated as an up for the event's button.
    pub fn on_mouse_leave(&mut self, event: MouseEvent) {
        let bindings = self.bindings.clone();
        if let Some(input) = bindings.dispatch_up(self, &InputEvent::Mouse(event)) {
            self.tracker = self.tracker.without_input(&input);
        }
    }

    pub fn on_key_down(&mut self, event: KeyEvent) {
        let bindings = self.bindings.clone();
        if let Some(input) = bindings.dispatch_down(self, &InputEvent::Key(event)) {
            self.tracker = self.tracker.with_input(input);
        }
    }

    pub fn on_key_up(&mut self, event: KeyEvent) {
        let bindings = self.bindings.clone();
        if let Some(input) = bindings.dispatch_up(self, &InputEvent::Key(event)) {
            self.tracker = self.tracker.without_input(&input);
        }
    }

    /// Wheel events are momentary: dispatched, never tracked.
    pub fn on_wheel(&mut self, event: WheelEvent) {
        let bindings = self.bindings.clone();
        bindings.dispatch_down(self, &InputEvent::Wheel(event));
    }

    // ------------------------------------------------------------------
    // Mode behaviors, resolved fresh on each dispatch
    // ------------------------------------------------------------------

    fn mode_mouse_down(&mut self) {
        match self.mode {
            CanvasMode::Draw => {
                if let Some(start) = self.cursor.canvas() {
                    let id = self.paths.begin(start, self.stroke_color, self.stroke_width);
                    debug!(id, "stroke begun");
                }
            }
            CanvasMode::Erase | CanvasMode::Move => {}
        }
    }

    fn mode_mouse_move(&mut self) {
        match self.mode {
            CanvasMode::Draw => {
                if let Some(point) = self.cursor.canvas() {
                    self.paths.extend(point);
                }
            }
            CanvasMode::Erase => {
                if let Some(point) = self.cursor.canvas() {
                    self.paths.erase_near(point, self.settings.erase_radius);
                }
            }
            CanvasMode::Move => {
                let delta = self.cursor.raw_delta();
                self.viewport.pan(delta.x, delta.y);
                self.cursor.refresh_canvas(&self.viewport);
            }
        }
    }

    fn scroll_zoom(&mut self, raw_delta: f64) {
        let anchor = self.cursor.raw().unwrap_or_default();
        if self.viewport.scroll_wheel_zoom(raw_delta, anchor) {
            // The mapping changed under the cursor.
            self.cursor.refresh_canvas(&self.viewport);
        }
    }

    // ------------------------------------------------------------------
    // Outbound queries and configuration
    // ------------------------------------------------------------------

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    /// The canvas-to-screen matrix, for rendering content under a matching
    /// visual transform.
    pub fn matrix(&self) -> &Affine {
        self.viewport.matrix()
    }

    pub fn mode(&self) -> CanvasMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CanvasMode) {
        if mode != self.mode {
            debug!(from = self.mode.display_name(), to = mode.display_name(), "mode switch");
            self.mode = mode;
        }
    }

    /// Canvas-space cursor position, if the pointer has been seen.
    pub fn cursor(&self) -> Option<Point> {
        self.cursor.canvas()
    }

    /// Raw screen-space cursor position, if the pointer has been seen.
    pub fn raw_cursor(&self) -> Option<Point> {
        self.cursor.raw()
    }

    pub fn is_held(&self, input: &CanonicalInput) -> bool {
        self.tracker.is_held(input)
    }

    pub fn paths(&self) -> &[crate::types::PathData] {
        self.paths.paths()
    }

    pub fn status(&self) -> CanvasStatus {
        CanvasStatus {
            zoom: self.viewport.zoom(),
            mode_name: self.mode.display_name(),
            cursor: self.cursor.canvas(),
        }
    }

    /// The eraser-radius indicator, present only in erase mode while the
    /// primary button is held at a known position.
    pub fn erase_indicator(&self) -> Option<EraseIndicator> {
        if self.mode != CanvasMode::Erase || !self.is_held(&CanonicalInput::from_mouse(0)) {
            return None;
        }
        let raw = self.cursor.raw()?;
        Some(EraseIndicator {
            x: raw.x,
            y: raw.y,
            radius: self.settings.erase_radius,
        })
    }

    /// Restores the identity view transform and unit zoom.
    pub fn reset_view(&mut self) {
        self.viewport.reset();
        self.cursor.refresh_canvas(&self.viewport);
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width;
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn bindings(&self) -> &InputBindings<SketchCanvas> {
        &self.bindings
    }

    /// Replaces the binding table with a derived one, e.g. to add
    /// embedder-specific shortcuts on top of the defaults.
    pub fn update_bindings(
        &mut self,
        rebind: impl FnOnce(InputBindings<SketchCanvas>) -> InputBindings<SketchCanvas>,
    ) {
        self.bindings = rebind(self.bindings.clone());
    }
}

impl Default for SketchCanvas {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
