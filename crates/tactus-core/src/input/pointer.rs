use std::collections::HashMap;

use crate::coords::Vec2;
use crate::gesture::GestureId;

use super::types::{PointerId, PointerPhase};

/// Per-gesture scratch record stored on an input.
///
/// Each recognizer only touches the slot keyed by its own [`GestureId`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Progress {
    /// Average centroid distance at the last pinch evaluation.
    pub previous_distance: Option<f32>,
    /// Angle from the centroid to this input at the last rotate evaluation.
    pub previous_angle: Option<f32>,
}

/// One tracked contact.
#[derive(Debug, Clone)]
pub struct Input {
    id: PointerId,
    phase: PointerPhase,
    initial: Vec2,
    current: Vec2,
    progress: HashMap<GestureId, Progress>,
}

impl Input {
    pub(crate) fn new(id: PointerId, pos: Vec2) -> Self {
        Self {
            id,
            phase: PointerPhase::Start,
            initial: pos,
            current: pos,
            progress: HashMap::new(),
        }
    }

    pub(crate) fn update(&mut self, phase: PointerPhase, pos: Vec2) {
        self.phase = phase;
        self.current = pos;
    }

    #[inline]
    pub fn id(&self) -> PointerId {
        self.id
    }

    #[inline]
    pub fn phase(&self) -> PointerPhase {
        self.phase
    }

    /// Position where the contact started.
    #[inline]
    pub fn initial(&self) -> Vec2 {
        self.initial
    }

    /// Current position.
    #[inline]
    pub fn point(&self) -> Vec2 {
        self.current
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        !self.phase.is_terminal()
    }

    /// Returns the gesture's slot, creating an empty one on first access.
    pub fn progress_mut(&mut self, gesture: GestureId) -> &mut Progress {
        self.progress.entry(gesture).or_default()
    }

    pub fn clear_progress(&mut self, gesture: GestureId) {
        self.progress.remove(&gesture);
    }
}
