//! Gesture recognizers.
//!
//! Every recognizer implements [`Gesture`]: the driver calls `start`/`end`/`cancel`
//! on contact lifecycle transitions and `on_move` once per evaluation step. Only
//! `on_move` produces data; `None` means "no event this step".

use std::sync::atomic::{AtomicU64, Ordering};

use crate::coords::Vec2;
use crate::input::State;

mod angle;
mod config;
mod pinch;
mod rotate;

pub use angle::angular_difference;
pub use config::{ConfigError, PinchConfig, RotateConfig};
pub use pinch::Pinch;
pub use rotate::Rotate;

static NEXT_GESTURE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one recognizer instance; keys its progress slot on each input.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GestureId(u64);

impl GestureId {
    /// Allocates a process-unique id.
    pub fn next() -> Self {
        Self(NEXT_GESTURE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Lifecycle contract shared by all recognizers.
pub trait Gesture {
    /// Key of this recognizer's progress slot on each input.
    fn id(&self) -> GestureId;

    /// Event name used when dispatching, e.g. `"pinch"`.
    fn name(&self) -> &'static str;

    /// A contact started.
    fn start(&mut self, state: &mut State<'_>);

    /// Contacts moved. Returns the data to dispatch, if any.
    fn on_move(&mut self, state: &mut State<'_>) -> Option<GestureData>;

    /// A contact ended; `state` holds the contacts that remain.
    fn end(&mut self, state: &mut State<'_>);

    /// A contact was cancelled. Defaults to [`end`](Self::end).
    fn cancel(&mut self, state: &mut State<'_>) {
        self.end(state);
    }
}

/// Data emitted by [`Pinch`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PinchData {
    /// Average distance from the midpoint to each active input.
    pub distance: f32,
    /// Centroid of the active inputs.
    pub midpoint: Vec2,
    /// Scale ratio against the previous step: `1.0` unchanged, `> 1` spreading, `< 1` pinching.
    pub change: f32,
}

/// Data emitted by [`Rotate`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RotateData {
    /// Centroid of the active inputs.
    pub pivot: Vec2,
    /// Change in angle since the last emit, in radians.
    pub delta: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum GestureData {
    Pinch(PinchData),
    Rotate(RotateData),
}
