//! Canonical input identities.
//!
//! A [`CanonicalInput`] is the dispatch key for the binding tables and the
//! element of the held-set: the four modifier flags plus the button/key/
//! wheel-direction identity, compared field-for-field. Equality and hashing
//! are derived; there is no wildcard matching on modifiers.

use crate::constants::{MOUSE_BUTTONS, NONE_LABEL, WHEEL_DIRECTIONS};
use crate::input::events::{KeyEvent, MouseEvent, WheelEvent};
use std::fmt;

/// Direction of a wheel event, from the sign of its delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WheelDirection {
    Up,
    /// A zero-delta wheel event; bindable but never produced by real input
    Invalid,
    Down,
}

impl WheelDirection {
    pub fn from_delta(delta_y: f64) -> Self {
        match delta_y.partial_cmp(&0.0) {
            Some(std::cmp::Ordering::Less) => WheelDirection::Up,
            Some(std::cmp::Ordering::Greater) => WheelDirection::Down,
            _ => WheelDirection::Invalid,
        }
    }

    fn label(self) -> &'static str {
        let index = match self {
            WheelDirection::Up => 0,
            WheelDirection::Invalid => 1,
            WheelDirection::Down => 2,
        };
        WHEEL_DIRECTIONS[index]
    }
}

/// The button/key/wheel identity of a canonical input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// Sentinel: no button or key required. Always present in the held-set,
    /// enabling unconditional move bindings such as cursor tracking.
    None,
    /// Mouse button by index 0..4
    Mouse(u8),
    /// Physical key code string
    Key(String),
    Wheel(WheelDirection),
}

/// The modifier+button identity used as a dispatch key, independent of raw
/// event shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CanonicalInput {
    pub alt: bool,
    pub meta: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub button: ButtonKind,
}

impl CanonicalInput {
    fn bare(button: ButtonKind) -> Self {
        Self {
            alt: false,
            meta: false,
            ctrl: false,
            shift: false,
            button,
        }
    }

    /// The sentinel input: no modifiers, no button.
    pub fn none() -> Self {
        Self::bare(ButtonKind::None)
    }

    /// A modifier-free mouse button input, by index.
    pub fn from_mouse(button: u8) -> Self {
        Self::bare(ButtonKind::Mouse(button))
    }

    /// A modifier-free key input, by physical key code.
    pub fn from_key(code: impl Into<String>) -> Self {
        Self::bare(ButtonKind::Key(code.into()))
    }

    /// A modifier-free wheel input for the direction of `delta_y`.
    pub fn from_wheel(delta_y: f64) -> Self {
        Self::bare(ButtonKind::Wheel(WheelDirection::from_delta(delta_y)))
    }

    pub fn with_alt(mut self, alt: bool) -> Self {
        self.alt = alt;
        self
    }

    pub fn with_meta(mut self, meta: bool) -> Self {
        self.meta = meta;
        self
    }

    pub fn with_ctrl(mut self, ctrl: bool) -> Self {
        self.ctrl = ctrl;
        self
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    /// Canonicalize a mouse event: modifiers copied verbatim, button by
    /// index.
    pub fn from_mouse_event(event: &MouseEvent) -> Self {
        Self {
            alt: event.modifiers.alt,
            meta: event.modifiers.meta,
            ctrl: event.modifiers.ctrl,
            shift: event.modifiers.shift,
            button: ButtonKind::Mouse(event.button),
        }
    }

    /// Canonicalize a keyboard event.
    pub fn from_key_event(event: &KeyEvent) -> Self {
        Self {
            alt: event.modifiers.alt,
            meta: event.modifiers.meta,
            ctrl: event.modifiers.ctrl,
            shift: event.modifiers.shift,
            button: ButtonKind::Key(event.code.clone()),
        }
    }

    /// Canonicalize a wheel event by the sign of its delta.
    pub fn from_wheel_event(event: &WheelEvent) -> Self {
        Self {
            alt: event.modifiers.alt,
            meta: event.modifiers.meta,
            ctrl: event.modifiers.ctrl,
            shift: event.modifiers.shift,
            button: ButtonKind::Wheel(WheelDirection::from_delta(event.delta_y)),
        }
    }
}

impl fmt::Display for CanonicalInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (held, name) in [
            (self.ctrl, "Ctrl"),
            (self.alt, "Alt"),
            (self.shift, "Shift"),
            (self.meta, "Meta"),
        ] {
            if held {
                write!(f, "{name}+")?;
            }
        }
        match &self.button {
            ButtonKind::None => write!(f, "{NONE_LABEL}"),
            ButtonKind::Mouse(index) => {
                let label = MOUSE_BUTTONS
                    .get(*index as usize)
                    .copied()
                    .unwrap_or("Mouse?");
                write!(f, "{label}")
            }
            ButtonKind::Key(code) => write!(f, "{code}"),
            ButtonKind::Wheel(direction) => write!(f, "{}", direction.label()),
        }
    }
}
