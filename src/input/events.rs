//! Inbound event model.
//!
//! The crate is headless; the embedding UI layer translates whatever its
//! toolkit delivers (DOM, winit, gpui, ...) into these shapes and feeds them
//! to [`crate::canvas::SketchCanvas`]. Positions are screen-space.

/// Modifier keys held at the time of an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub alt: bool,
    pub meta: bool,
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        alt: false,
        meta: false,
        ctrl: false,
        shift: false,
    };
}

/// A pointer event: down, up, move, enter, or leave.
#[derive(Clone, Debug, PartialEq)]
pub struct MouseEvent {
    /// Screen-space x
    pub x: f64,
    /// Screen-space y
    pub y: f64,
    /// Button index 0..4 that triggered the event (0 for pure moves)
    pub button: u8,
    /// Bitmask of buttons currently held, one bit per button index
    pub buttons: u8,
    pub modifiers: Modifiers,
}

/// A keyboard event, identified by the physical key code string
/// (e.g. `"KeyA"`, `"ArrowLeft"`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: String,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            modifiers: Modifiers::NONE,
        }
    }
}

/// A wheel event; only the sign of `delta_y` selects the binding, the
/// magnitude feeds the zoom engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    pub delta_y: f64,
    pub modifiers: Modifiers,
}

/// Any event that can trigger a down/up binding.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    Mouse(MouseEvent),
    Key(KeyEvent),
    Wheel(WheelEvent),
}

impl From<MouseEvent> for InputEvent {
    fn from(event: MouseEvent) -> Self {
        InputEvent::Mouse(event)
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        InputEvent::Key(event)
    }
}

impl From<WheelEvent> for InputEvent {
    fn from(event: WheelEvent) -> Self {
        InputEvent::Wheel(event)
    }
}
