//! Declarative input bindings.
//!
//! [`InputBindings`] maps canonical inputs to callbacks in three tables:
//! down, mouse-move (fired continuously while the bound input is held), and
//! up. Registration is persistent: `bind_*` returns a new registry and
//! leaves the original unchanged, so a stale reference never sees bindings
//! added after it was taken.
//!
//! The registry does not own the held-set. `dispatch_down`/`dispatch_up`
//! return the canonical input that should be added to or removed from the
//! caller's [`InputTracker`](crate::input::InputTracker); wheel inputs are
//! momentary and yield `None`.

use crate::input::canonical::CanonicalInput;
use crate::input::events::{InputEvent, MouseEvent};
use crate::input::tracker::InputTracker;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::trace;

/// Callback for down/up bindings. The core is single-threaded by contract,
/// hence `Rc` rather than `Arc`.
pub type EventCallback<Ctx> = Rc<dyn Fn(&mut Ctx, &InputEvent)>;

/// Callback for move bindings.
pub type MoveCallback<Ctx> = Rc<dyn Fn(&mut Ctx, &MouseEvent)>;

/// The three binding tables, keyed by exact canonical input.
pub struct InputBindings<Ctx> {
    down: HashMap<CanonicalInput, EventCallback<Ctx>>,
    mouse_move: HashMap<CanonicalInput, MoveCallback<Ctx>>,
    up: HashMap<CanonicalInput, EventCallback<Ctx>>,
}

impl<Ctx> InputBindings<Ctx> {
    pub fn new() -> Self {
        Self {
            down: HashMap::new(),
            mouse_move: HashMap::new(),
            up: HashMap::new(),
        }
    }

    /// A copy of this registry with a down binding added. Re-binding an
    /// input overwrites its callback.
    pub fn bind_down(
        &self,
        input: CanonicalInput,
        callback: impl Fn(&mut Ctx, &InputEvent) + 'static,
    ) -> Self {
        let mut next = self.clone();
        next.down.insert(input, Rc::new(callback));
        next
    }

    /// A copy of this registry with a move binding added. The callback fires
    /// on every move event while `input` is in the held-set; bind the
    /// sentinel [`CanonicalInput::none`] for unconditional move handling.
    pub fn bind_move(
        &self,
        input: CanonicalInput,
        callback: impl Fn(&mut Ctx, &MouseEvent) + 'static,
    ) -> Self {
        let mut next = self.clone();
        next.mouse_move.insert(input, Rc::new(callback));
        next
    }

    /// A copy of this registry with an up binding added.
    pub fn bind_up(
        &self,
        input: CanonicalInput,
        callback: impl Fn(&mut Ctx, &InputEvent) + 'static,
    ) -> Self {
        let mut next = self.clone();
        next.up.insert(input, Rc::new(callback));
        next
    }

    /// Canonicalizes the event, invokes its down callback if one is bound
    /// (an unbound input is a silent no-op), and returns the input the
    /// caller should add to its tracker. Wheel events return `None`.
    pub fn dispatch_down(&self, ctx: &mut Ctx, event: &InputEvent) -> Option<CanonicalInput> {
        let input = canonicalize(event);
        if let Some(callback) = self.down.get(&input).cloned() {
            trace!(input = %input, "dispatch down");
            callback(ctx, event);
        }
        match event {
            InputEvent::Wheel(_) => None,
            _ => Some(input),
        }
    }

    /// Invokes the move callback of every input currently held, including
    /// the sentinel. Order across held inputs is unspecified; each binding
    /// fires at most once per event.
    pub fn dispatch_move(&self, ctx: &mut Ctx, event: &MouseEvent, held: &InputTracker) {
        // Collect first: a callback may replace the canvas's tracker or
        // bindings while we iterate this snapshot.
        let callbacks: Vec<MoveCallback<Ctx>> = held
            .held()
            .filter_map(|input| self.mouse_move.get(input).cloned())
            .collect();
        for callback in callbacks {
            callback(ctx, event);
        }
    }

    /// Canonicalizes the event, invokes its up callback if bound, and
    /// returns the input the caller should remove from its tracker.
    pub fn dispatch_up(&self, ctx: &mut Ctx, event: &InputEvent) -> Option<CanonicalInput> {
        let input = canonicalize(event);
        if let Some(callback) = self.up.get(&input).cloned() {
            trace!(input = %input, "dispatch up");
            callback(ctx, event);
        }
        match event {
            InputEvent::Wheel(_) => None,
            _ => Some(input),
        }
    }

    /// True when a down binding exists for this exact input.
    pub fn has_down(&self, input: &CanonicalInput) -> bool {
        self.down.contains_key(input)
    }

    /// True when a move binding exists for this exact input.
    pub fn has_move(&self, input: &CanonicalInput) -> bool {
        self.mouse_move.contains_key(input)
    }

    /// True when an up binding exists for this exact input.
    pub fn has_up(&self, input: &CanonicalInput) -> bool {
        self.up.contains_key(input)
    }
}

fn canonicalize(event: &InputEvent) -> CanonicalInput {
    match event {
        InputEvent::Mouse(e) => CanonicalInput::from_mouse_event(e),
        InputEvent::Key(e) => CanonicalInput::from_key_event(e),
        InputEvent::Wheel(e) => CanonicalInput::from_wheel_event(e),
    }
}

// Derived Clone would require Ctx: Clone; the tables only hold Rc handles.
impl<Ctx> Clone for InputBindings<Ctx> {
    fn clone(&self) -> Self {
        Self {
            down: self.down.clone(),
            mouse_move: self.mouse_move.clone(),
            up: self.up.clone(),
        }
    }
}

impl<Ctx> Default for InputBindings<Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ctx> std::fmt::Debug for InputBindings<Ctx> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputBindings")
            .field("down", &self.down.keys())
            .field("mouse_move", &self.mouse_move.keys())
            .field("up", &self.up.keys())
            .finish()
    }
}
