//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Platform code is responsible for translating native events into `PointerEvent`s
//! (see [`crate::platform`]).
//!
//! Flow per event: `InputState::apply_event` updates the tracked contacts, then the
//! driver takes a [`State`] snapshot over the active ones and hands it to a gesture hook.

mod pointer;
mod snapshot;
mod state;
mod types;

pub use pointer::{Input, Progress};
pub use snapshot::State;
pub use state::InputState;
pub use types::{PointerEvent, PointerId, PointerPhase};
