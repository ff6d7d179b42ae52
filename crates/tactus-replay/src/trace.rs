use anyhow::{Context, Result};
use serde::Deserialize;
use tactus_core::coords::{Rect, Vec2};
use tactus_core::engine::{BindingId, Engine, GestureEvent};
use tactus_core::gesture::{Pinch, PinchConfig, Rotate, RotateConfig};
use tactus_core::input::{PointerEvent, PointerId, PointerPhase};

/// Parsed trace file.
#[derive(Debug, Clone, Deserialize)]
pub struct Trace {
    #[serde(default)]
    pub gestures: Vec<GestureSpec>,
    #[serde(default)]
    pub frames: Vec<Vec<Sample>>,
}

impl Trace {
    pub fn from_json(src: &str) -> Result<Self> {
        serde_json::from_str(src).context("trace is not valid JSON for the expected layout")
    }
}

/// A gesture to bind. `region` is `[x, y, w, h]`; omitted means the whole surface.
/// Unknown option keys are ignored and omitted ones take their defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GestureSpec {
    Pinch {
        #[serde(default)]
        region: Option<[f32; 4]>,
        #[serde(default)]
        options: PinchConfig,
    },
    Rotate {
        #[serde(default)]
        region: Option<[f32; 4]>,
        #[serde(default)]
        options: RotateConfig,
    },
}

impl GestureSpec {
    pub fn kind(&self) -> &'static str {
        match self {
            GestureSpec::Pinch { .. } => "pinch",
            GestureSpec::Rotate { .. } => "rotate",
        }
    }

    pub fn region(&self) -> Option<Rect> {
        let (GestureSpec::Pinch { region, .. } | GestureSpec::Rotate { region, .. }) = self;
        region.map(|[x, y, w, h]| Rect::new(x, y, w, h))
    }

    /// Validates the options and binds the recognizer.
    pub fn bind<F>(&self, engine: &mut Engine, handler: F) -> Result<BindingId>
    where
        F: FnMut(&GestureEvent) + 'static,
    {
        let region = self.region();
        let id = match self {
            GestureSpec::Pinch { options, .. } => engine.bind(region, Pinch::new(*options)?, handler),
            GestureSpec::Rotate { options, .. } => engine.bind(region, Rotate::new(*options)?, handler),
        };
        Ok(id)
    }
}

/// One recorded pointer event.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Sample {
    pub id: u64,
    pub phase: PointerPhase,
    pub x: f32,
    pub y: f32,
}

impl Sample {
    pub fn to_event(&self) -> PointerEvent {
        PointerEvent::new(PointerId(self.id), self.phase, Vec2::new(self.x, self.y))
    }
}
