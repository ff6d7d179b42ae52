use crate::input::State;

use super::config::{ConfigError, PinchConfig};
use super::{Gesture, GestureData, GestureId, PinchData};

/// Two or more inputs moving together or apart.
///
/// The baseline (average distance from the centroid) lives in the progress slot of
/// the lead input, i.e. the active input with the lowest id. `start`, `end` and
/// `cancel` all re-baseline against whatever inputs remain, so lifting one finger
/// out of three continues the pinch without a jump.
#[derive(Debug)]
pub struct Pinch {
    id: GestureId,
    config: PinchConfig,
}

impl Pinch {
    pub fn new(config: PinchConfig) -> Result<Self, ConfigError> {
        config.validate().inspect_err(|e| log::warn!("pinch rejected: {e}"))?;
        Ok(Self { id: GestureId::next(), config })
    }

    pub fn config(&self) -> &PinchConfig {
        &self.config
    }

    fn rebaseline(&self, state: &mut State<'_>) {
        let distance = average_distance(state);
        let Some(lead) = state.lead_mut() else {
            return;
        };
        lead.progress_mut(self.id).previous_distance = Some(distance);
        log::trace!("pinch {:?} baseline {distance}", self.id);
    }
}

impl Default for Pinch {
    fn default() -> Self {
        Self { id: GestureId::next(), config: PinchConfig::default() }
    }
}

impl Gesture for Pinch {
    fn id(&self) -> GestureId {
        self.id
    }

    fn name(&self) -> &'static str {
        "pinch"
    }

    fn start(&mut self, state: &mut State<'_>) {
        self.rebaseline(state);
    }

    fn on_move(&mut self, state: &mut State<'_>) -> Option<GestureData> {
        if state.len() < self.config.min_inputs {
            return None;
        }

        let midpoint = state.centroid();
        let distance = average_distance(state);

        let lead = state.lead_mut()?;
        let previous = lead.progress_mut(self.id).previous_distance.replace(distance);

        // Coincident inputs give a zero baseline; skip the step instead of emitting inf/NaN.
        let previous = match previous {
            Some(p) if p > f32::EPSILON => p,
            Some(_) => {
                log::trace!("pinch {:?} degenerate baseline; re-baselined", self.id);
                return None;
            }
            None => {
                log::trace!("pinch {:?} lead {} had no baseline", self.id, lead.id());
                return None;
            }
        };

        Some(GestureData::Pinch(PinchData {
            distance,
            midpoint,
            change: distance / previous,
        }))
    }

    fn end(&mut self, state: &mut State<'_>) {
        self.rebaseline(state);
    }
}

fn average_distance(state: &State<'_>) -> f32 {
    state.centroid().average_distance_to(&state.points())
}
