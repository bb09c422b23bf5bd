//! Input routing for the canvas.
//!
//! Raw pointer/keyboard/wheel events are canonicalized into modifier+button
//! identities, dispatched through a declarative binding table, and tracked
//! in a held-set that drives continuous move callbacks.
//!
//! ## Modules
//!
//! - `events` - inbound event shapes produced by the embedding UI layer
//! - `canonical` - the `CanonicalInput` dispatch key
//! - `bindings` - persistent down/move/up binding tables and dispatch
//! - `tracker` - the held-set, including mouse-enter resynchronization

pub mod bindings;
pub mod canonical;
pub mod events;
pub mod tracker;

pub use bindings::{EventCallback, InputBindings, MoveCallback};
pub use canonical::{ButtonKind, CanonicalInput, WheelDirection};
pub use events::{InputEvent, KeyEvent, Modifiers, MouseEvent, WheelEvent};
pub use tracker::InputTracker;
