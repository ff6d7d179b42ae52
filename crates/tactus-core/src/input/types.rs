use std::fmt;

use crate::coords::Vec2;

/// Stable identity of one touch/pointer contact.
///
/// Platforms reuse ids once a contact is lifted; the input state treats a `Start`
/// for a known id as a brand new contact.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PointerId(pub u64);

impl fmt::Display for PointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle phase of a contact.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

impl PointerPhase {
    /// `End` and `Cancel` are terminal; the contact no longer takes part in gestures.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, PointerPhase::End | PointerPhase::Cancel)
    }
}

/// Pointer event in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub phase: PointerPhase,
    pub pos: Vec2,
}

impl PointerEvent {
    #[inline]
    pub const fn new(id: PointerId, phase: PointerPhase, pos: Vec2) -> Self {
        Self { id, phase, pos }
    }
}
