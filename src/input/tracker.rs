//! Held-input tracking.
//!
//! [`InputTracker`] maintains the set of canonical inputs currently pressed.
//! It is updated by down/up events and resynchronized wholesale from the
//! button bitmask of a mouse-enter event, which repairs state after buttons
//! changed while the pointer was outside the surface.
//!
//! Updates are persistent: every mutator returns a new tracker and leaves
//! the original untouched, so a dispatch loop can hand callbacks a stale but
//! consistent snapshot while the next tracker is being built.

use crate::constants::MOUSE_BUTTON_COUNT;
use crate::input::canonical::{ButtonKind, CanonicalInput};
use crate::input::events::{InputEvent, MouseEvent};
use std::collections::HashSet;
use tracing::trace;

/// The set of inputs currently held.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputTracker {
    held: HashSet<CanonicalInput>,
}

impl InputTracker {
    /// A fresh tracker holding only the sentinel input, which represents
    /// "no button required" and is never removed by up events.
    pub fn new() -> Self {
        let mut held = HashSet::new();
        held.insert(CanonicalInput::none());
        Self { held }
    }

    /// A copy of this tracker with the event's canonical input added.
    /// Wheel events are momentary and never enter the held-set.
    pub fn with_event(&self, event: &InputEvent) -> Self {
        let input = match event {
            InputEvent::Mouse(e) => CanonicalInput::from_mouse_event(e),
            InputEvent::Key(e) => CanonicalInput::from_key_event(e),
            InputEvent::Wheel(_) => return self.clone(),
        };
        self.with_input(input)
    }

    /// A copy of this tracker with the event's canonical input removed.
    pub fn without_event(&self, event: &InputEvent) -> Self {
        let input = match event {
            InputEvent::Mouse(e) => CanonicalInput::from_mouse_event(e),
            InputEvent::Key(e) => CanonicalInput::from_key_event(e),
            InputEvent::Wheel(_) => return self.clone(),
        };
        self.without_input(&input)
    }

    pub fn with_input(&self, input: CanonicalInput) -> Self {
        trace!(input = %input, "held-set add");
        let mut held = self.held.clone();
        held.insert(input);
        Self { held }
    }

    pub fn without_input(&self, input: &CanonicalInput) -> Self {
        trace!(input = %input, "held-set remove");
        let mut held = self.held.clone();
        held.remove(input);
        Self { held }
    }

    /// Resynchronizes held mouse-button state from the enter event's button
    /// bitmask, one bit per button index.
    ///
    /// A set bit adds that button with the event's modifiers; a clear bit
    /// removes the button no matter which modifier combination it was held
    /// with (the release happened off-surface, so the original modifiers are
    /// unknown). Keyboard entries and the sentinel are untouched.
    pub fn update_mouse_enter(&self, event: &MouseEvent) -> Self {
        let mut held: HashSet<CanonicalInput> = self
            .held
            .iter()
            .filter(|input| match input.button {
                ButtonKind::Mouse(index) => event.buttons & (1 << index) != 0,
                _ => true,
            })
            .cloned()
            .collect();

        for index in 0..MOUSE_BUTTON_COUNT {
            if event.buttons & (1 << index) != 0 {
                let mut input = CanonicalInput::from_mouse(index);
                input.alt = event.modifiers.alt;
                input.meta = event.modifiers.meta;
                input.ctrl = event.modifiers.ctrl;
                input.shift = event.modifiers.shift;
                held.insert(input);
            }
        }

        trace!(buttons = event.buttons, held = held.len(), "held-set resync");
        Self { held }
    }

    /// Membership query.
    pub fn is_held(&self, input: &CanonicalInput) -> bool {
        self.held.contains(input)
    }

    /// Iterator over the held inputs, in unspecified order.
    pub fn held(&self) -> impl Iterator<Item = &CanonicalInput> {
        self.held.iter()
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}
