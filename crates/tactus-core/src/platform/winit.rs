use ::winit::event::{Touch, TouchPhase, WindowEvent};

use crate::coords::Vec2;
use crate::input::{PointerEvent, PointerId, PointerPhase};

/// Translates a winit `WindowEvent` into a pointer event.
///
/// Only touch events are represented; everything else returns `None`.
/// `scale_factor` is the window's current scale factor, used to convert the
/// physical touch location into logical pixels.
pub fn translate_window_event(scale_factor: f64, event: &WindowEvent) -> Option<PointerEvent> {
    match event {
        WindowEvent::Touch(touch) => Some(translate_touch(scale_factor, touch)),
        _ => None,
    }
}

/// Translates a single winit touch.
pub fn translate_touch(scale_factor: f64, touch: &Touch) -> PointerEvent {
    let logical = touch.location.to_logical::<f64>(scale_factor);
    PointerEvent::new(
        PointerId(touch.id),
        map_phase(touch.phase),
        Vec2::new(logical.x as f32, logical.y as f32),
    )
}

fn map_phase(phase: TouchPhase) -> PointerPhase {
    match phase {
        TouchPhase::Started => PointerPhase::Start,
        TouchPhase::Moved => PointerPhase::Move,
        TouchPhase::Ended => PointerPhase::End,
        TouchPhase::Cancelled => PointerPhase::Cancel,
    }
}
