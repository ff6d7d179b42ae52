use std::fmt;

use crate::coords::Rect;
use crate::gesture::{Gesture, GestureData};
use crate::input::Input;

/// Handle returned by [`Engine::bind`](super::Engine::bind).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BindingId(pub(crate) u64);

impl fmt::Display for BindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "binding-{}", self.0)
    }
}

/// A recognized gesture, as delivered to a binding's handler.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureEvent {
    pub binding: BindingId,
    /// Gesture name, e.g. `"pinch"` or `"rotate"`.
    pub gesture: &'static str,
    pub data: GestureData,
}

pub(crate) type Handler = Box<dyn FnMut(&GestureEvent)>;

/// Association between a target region, a recognizer, and a handler.
pub(crate) struct Binding {
    pub id: BindingId,
    /// `None` targets the whole surface.
    pub region: Option<Rect>,
    pub gesture: Box<dyn Gesture>,
    pub handler: Handler,
    /// Remove after the first dispatch.
    pub once: bool,
}

impl Binding {
    pub fn dispatch(&mut self, data: GestureData) {
        let event = GestureEvent {
            binding: self.id,
            gesture: self.gesture.name(),
            data,
        };
        (self.handler)(&event);
    }
}

/// A contact belongs to a binding when it started inside the binding's region.
#[inline]
pub(crate) fn owns(region: Option<Rect>, input: &Input) -> bool {
    region.is_none_or(|r| r.contains(input.initial()))
}
