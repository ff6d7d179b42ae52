//! Tactus gesture core.
//!
//! This crate turns a stream of pointer events into multi-finger gesture data.
//! It owns the input bookkeeping, the recognizers, and a small binding engine
//! that dispatches recognized gestures to handlers.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `Vec2`, `Rect` |
//! | [`input`] | `PointerEvent`, `Input`, `InputState`, `State` snapshot |
//! | [`gesture`] | `Gesture` contract, `Pinch`, `Rotate`, payloads, config |
//! | [`engine`] | `Engine` bindings and dispatch |
//! | [`logging`] | `init_logging` |
//! | [`platform`] | winit touch translation |
//!
//! # Quick start
//!
//! ```rust
//! use tactus_core::coords::Vec2;
//! use tactus_core::engine::Engine;
//! use tactus_core::gesture::{GestureData, Pinch};
//! use tactus_core::input::{PointerEvent, PointerId, PointerPhase};
//!
//! let mut engine = Engine::new();
//! engine.bind(None, Pinch::default(), |event| {
//!     if let GestureData::Pinch(pinch) = event.data {
//!         assert_eq!(pinch.change, 2.0);
//!     }
//! });
//!
//! let ev = |id, phase, x| PointerEvent::new(PointerId(id), phase, Vec2::new(x, 0.0));
//! engine.handle(ev(1, PointerPhase::Start, 0.0));
//! engine.handle(ev(2, PointerPhase::Start, 10.0));
//! assert_eq!(engine.handle(ev(2, PointerPhase::Move, 20.0)), 1);
//! ```

pub mod coords;
pub mod engine;
pub mod gesture;
pub mod input;
pub mod logging;
pub mod platform;
