//! Event stream published by core operations.
//!
//! The rendering collaborator either drains events from the session after
//! each command or subscribes an `EventListener`.

pub mod event;

pub use event::{EventListener, GameEvent};
