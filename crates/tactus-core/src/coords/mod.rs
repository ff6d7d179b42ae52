//! Coordinate types shared by the input state and the recognizers.
//!
//! Canonical space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles follow `atan2` over that space, so positive deltas are clockwise on screen.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
