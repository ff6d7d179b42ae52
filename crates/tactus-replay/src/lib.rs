//! Replays recorded pointer traces through the tactus engine.
//!
//! A trace lists the gestures to bind and the pointer events of each frame:
//!
//! ```json
//! {
//!   "gestures": [
//!     { "kind": "pinch", "region": [0, 0, 200, 200] },
//!     { "kind": "rotate", "options": { "smoothing": false } }
//!   ],
//!   "frames": [
//!     [ { "id": 1, "phase": "start", "x": 0, "y": 0 },
//!       { "id": 2, "phase": "start", "x": 10, "y": 0 } ],
//!     [ { "id": 2, "phase": "move", "x": 20, "y": 0 } ]
//!   ]
//! }
//! ```

mod trace;

pub use trace::{GestureSpec, Sample, Trace};

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use serde_json::{Value, json};
use tactus_core::engine::{Engine, GestureEvent};
use tactus_core::input::PointerEvent;

/// One dispatched gesture event and the frame that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Emitted {
    pub frame: usize,
    pub event: GestureEvent,
}

impl Emitted {
    /// Flat JSON object: `{ "frame", "binding", "gesture", ...payload }`.
    pub fn to_json(&self) -> Value {
        let mut line = json!({
            "frame": self.frame,
            "binding": self.event.binding.to_string(),
            "gesture": self.event.gesture,
        });
        if let (Value::Object(out), Ok(Value::Object(data))) =
            (&mut line, serde_json::to_value(self.event.data))
        {
            out.extend(data);
        }
        line
    }
}

/// Binds every gesture of `trace`, feeds its frames, and collects what was dispatched.
pub fn run(trace: &Trace) -> Result<Vec<Emitted>> {
    let mut engine = Engine::new();
    let sink: Rc<RefCell<Vec<GestureEvent>>> = Rc::default();

    for (idx, spec) in trace.gestures.iter().enumerate() {
        let out = Rc::clone(&sink);
        let handler = move |ev: &GestureEvent| out.borrow_mut().push(ev.clone());
        spec.bind(&mut engine, handler)
            .with_context(|| format!("gesture #{idx} ({}) has invalid options", spec.kind()))?;
    }
    log::info!("replaying {} frame(s) over {} binding(s)", trace.frames.len(), trace.gestures.len());

    let mut emitted = Vec::new();
    for (frame, samples) in trace.frames.iter().enumerate() {
        let events: Vec<PointerEvent> = samples.iter().map(Sample::to_event).collect();
        let n = engine.handle_frame(&events);
        log::debug!("frame {frame}: {} event(s), {n} dispatched", events.len());

        emitted.extend(sink.borrow_mut().drain(..).map(|event| Emitted { frame, event }));
    }

    Ok(emitted)
}
