//! Platform event translation.
//!
//! Each adapter maps native events onto [`PointerEvent`](crate::input::PointerEvent)s.

pub mod winit;
