use crate::input::State;

use super::angle::angular_difference;
use super::config::{ConfigError, RotateConfig};
use super::{Gesture, GestureData, GestureId, RotateData};

/// Two or more inputs turning around their centroid.
///
/// Each input remembers its own last angle from the centroid (progress slot keyed
/// by this gesture), so contacts joining or leaving never get compared against
/// another contact's history. The emitted `delta` is the mean wrap-safe change
/// over the inputs that have history.
///
/// With smoothing enabled every emit is held for one step: if the next delta has
/// the same sign the held one is released, otherwise the two are merged and held
/// again. Single-step sign flips from jittery hardware never reach the handler.
#[derive(Debug)]
pub struct Rotate {
    id: GestureId,
    config: RotateConfig,
    staged: Option<RotateData>,
}

impl Rotate {
    pub fn new(config: RotateConfig) -> Result<Self, ConfigError> {
        config.validate().inspect_err(|e| log::warn!("rotate rejected: {e}"))?;
        Ok(Self { id: GestureId::next(), config, staged: None })
    }

    pub fn config(&self) -> &RotateConfig {
        &self.config
    }

    fn restart(&mut self, state: &mut State<'_>) {
        self.staged = None;
        for input in state.inputs_mut() {
            input.clear_progress(self.id);
        }
        if state.len() < self.config.min_inputs {
            return;
        }

        let centroid = state.centroid();
        for input in state.inputs_mut() {
            let angle = centroid.angle_to(input.point());
            input.progress_mut(self.id).previous_angle = Some(angle);
        }
        log::trace!("rotate {:?} restarted with {} inputs", self.id, state.len());
    }

    /// Mean angular change since the last step; records the current angles.
    fn angle_delta(&mut self, state: &mut State<'_>) -> Option<f32> {
        if state.len() < self.config.min_inputs {
            return None;
        }

        let centroid = state.centroid();
        let mut total = 0.0;
        let mut tracked = 0usize;

        for input in state.inputs_mut() {
            let angle = centroid.angle_to(input.point());
            if let Some(previous) = input.progress_mut(self.id).previous_angle.replace(angle) {
                total += angular_difference(angle, previous);
                tracked += 1;
            }
        }

        (tracked > 0).then(|| total / tracked as f32)
    }

    fn smooth(&mut self, next: RotateData) -> Option<RotateData> {
        match self.staged.take() {
            None => {
                self.staged = Some(next);
                None
            }
            Some(staged) if same_sign(staged.delta, next.delta) => {
                self.staged = Some(next);
                Some(staged)
            }
            Some(staged) => {
                self.staged = Some(RotateData { delta: next.delta + staged.delta, ..next });
                None
            }
        }
    }
}

impl Default for Rotate {
    fn default() -> Self {
        Self { id: GestureId::next(), config: RotateConfig::default(), staged: None }
    }
}

impl Gesture for Rotate {
    fn id(&self) -> GestureId {
        self.id
    }

    fn name(&self) -> &'static str {
        "rotate"
    }

    fn start(&mut self, state: &mut State<'_>) {
        self.restart(state);
    }

    fn on_move(&mut self, state: &mut State<'_>) -> Option<GestureData> {
        let delta = self.angle_delta(state)?;
        if delta == 0.0 || !delta.is_finite() {
            return None;
        }

        let data = RotateData { pivot: state.centroid(), delta };
        let data = if self.config.smoothing { self.smooth(data)? } else { data };
        Some(GestureData::Rotate(data))
    }

    fn end(&mut self, state: &mut State<'_>) {
        self.restart(state);
    }

    fn cancel(&mut self, state: &mut State<'_>) {
        self.restart(state);
    }
}

#[inline]
fn same_sign(a: f32, b: f32) -> bool {
    (a > 0.0 && b > 0.0) || (a < 0.0 && b < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    use crate::coords::Vec2;
    use crate::gesture::test_support::{move_to, pair_at, touch_down};
    use crate::input::{InputState, PointerEvent, PointerId, PointerPhase};

    const EPS: f32 = 1e-4;
    const C: Vec2 = Vec2::new(100.0, 100.0);

    fn unsmoothed() -> Rotate {
        Rotate::new(RotateConfig { smoothing: false, ..Default::default() }).unwrap()
    }

    fn delta_of(data: Option<GestureData>) -> Option<f32> {
        match data {
            Some(GestureData::Rotate(r)) => Some(r.delta),
            None => None,
            Some(other) => panic!("expected rotate data, got {other:?}"),
        }
    }

    /// Starts a pair at `angle` and returns the state.
    fn started(rotate: &mut Rotate, angle: f32) -> InputState {
        let mut st = touch_down(&pair_at(C, 40.0, angle));
        rotate.start(&mut st.snapshot(|_| true));
        st
    }

    fn step(rotate: &mut Rotate, st: &mut InputState, angle: f32) -> Option<f32> {
        move_to(st, &pair_at(C, 40.0, angle));
        delta_of(rotate.on_move(&mut st.snapshot(|_| true)))
    }

    // ── unsmoothed ────────────────────────────────────────────────────────

    #[test]
    fn rigid_rotation_reports_angle() {
        let mut rotate = unsmoothed();
        let mut st = started(&mut rotate, 0.0);
        let d = step(&mut rotate, &mut st, 0.1).unwrap();
        assert!((d - 0.1).abs() < EPS, "delta = {d}");
    }

    #[test]
    fn pivot_is_centroid() {
        let mut rotate = unsmoothed();
        let mut st = started(&mut rotate, 0.0);
        move_to(&mut st, &pair_at(C, 40.0, 0.3));
        match rotate.on_move(&mut st.snapshot(|_| true)) {
            Some(GestureData::Rotate(r)) => {
                assert!((r.pivot.x - C.x).abs() < EPS && (r.pivot.y - C.y).abs() < EPS);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rotation_across_pi_has_no_jump() {
        let mut rotate = unsmoothed();
        let mut st = started(&mut rotate, PI - 0.05);
        let d = step(&mut rotate, &mut st, PI + 0.05).unwrap();
        assert!((d - 0.1).abs() < EPS, "delta = {d}");

        let d = step(&mut rotate, &mut st, PI - 0.05).unwrap();
        assert!((d + 0.1).abs() < EPS, "delta = {d}");
    }

    #[test]
    fn deltas_are_relative_between_moves() {
        let mut rotate = unsmoothed();
        let mut st = started(&mut rotate, 0.0);
        step(&mut rotate, &mut st, 0.2);
        let d = step(&mut rotate, &mut st, 0.25).unwrap();
        assert!((d - 0.05).abs() < EPS);
    }

    #[test]
    fn no_rotation_is_silent() {
        let mut rotate = unsmoothed();
        let mut st = started(&mut rotate, 0.4);
        assert!(step(&mut rotate, &mut st, 0.4).is_none());
    }

    #[test]
    fn below_min_inputs_is_silent() {
        let mut rotate = unsmoothed();
        let mut st = touch_down(&[Vec2::new(0.0, 0.0)]);
        rotate.start(&mut st.snapshot(|_| true));
        move_to(&mut st, &[Vec2::new(5.0, 5.0)]);
        assert!(rotate.on_move(&mut st.snapshot(|_| true)).is_none());
    }

    #[test]
    fn history_follows_input_identity() {
        // Three contacts; the middle one lifts without an end hook. The remaining
        // two must still be compared against their own angles.
        let mut rotate = unsmoothed();
        let pts = [
            C + Vec2::new(40.0, 0.0),
            C + Vec2::new(0.0, 40.0),
            C + Vec2::new(-40.0, 0.0),
        ];
        let mut st = touch_down(&pts);
        rotate.start(&mut st.snapshot(|_| true));

        st.apply_event(PointerEvent::new(PointerId(2), PointerPhase::End, pts[1]));
        st.prune();

        // Centroid moves to C, so contacts 1 and 3 sit at angles 0 and π relative to it.
        let [a, b] = pair_at(C, 40.0, 0.1);
        st.apply_event(PointerEvent::new(PointerId(1), PointerPhase::Move, a));
        st.apply_event(PointerEvent::new(PointerId(3), PointerPhase::Move, b));
        let d = delta_of(rotate.on_move(&mut st.snapshot(|_| true))).unwrap();

        // Relative to the old centroid contact 1 sat at -α and contact 3 at α - π.
        // Their changes are 0.1 + α and 0.1 - α, which average to 0.1.
        assert!((d - 0.1).abs() < 1e-3, "delta = {d}");
    }

    #[test]
    fn joining_input_without_history_is_not_counted() {
        let mut rotate = unsmoothed();
        let mut st = started(&mut rotate, 0.0);

        // Third contact joins with no start hook; it has no recorded angle.
        st.apply_event(PointerEvent::new(PointerId(3), PointerPhase::Start, C));
        let d = delta_of(rotate.on_move(&mut st.snapshot(|_| true)));

        // Joining at the pivot keeps the centroid, so the tracked pair did not turn.
        assert!(d.is_none());
    }

    // ── smoothing ─────────────────────────────────────────────────────────

    #[test]
    fn smoothing_holds_first_emit() {
        let mut rotate = Rotate::default();
        let mut st = started(&mut rotate, 0.0);
        assert!(step(&mut rotate, &mut st, 0.1).is_none());
        let d = step(&mut rotate, &mut st, 0.2).unwrap();
        assert!((d - 0.1).abs() < EPS);
    }

    #[test]
    fn smoothing_absorbs_single_sign_flip() {
        let mut rotate = Rotate::default();
        let mut st = started(&mut rotate, 0.0);

        // +0.1, +0.1, -0.05 (jitter), +0.1, +0.1
        let angles = [0.1, 0.2, 0.15, 0.25, 0.35];
        let emitted: Vec<f32> = angles
            .iter()
            .filter_map(|a| step(&mut rotate, &mut st, *a))
            .collect();

        assert_eq!(emitted.len(), 3, "emitted = {emitted:?}");
        assert!(emitted.iter().all(|d| *d > 0.0), "emitted = {emitted:?}");
        assert!((emitted[1] - 0.05).abs() < EPS, "merged = {}", emitted[1]);
    }

    #[test]
    fn smooth_policy_directly() {
        let mut rotate = Rotate::default();
        let at = |delta| RotateData { pivot: Vec2::zero(), delta };

        assert_eq!(rotate.smooth(at(0.2)), None);
        assert_eq!(rotate.smooth(at(0.3)), Some(at(0.2)));
        assert_eq!(rotate.smooth(at(-0.1)), None);
        assert_eq!(rotate.staged.map(|s| s.delta), Some(0.3 + -0.1));
        assert_eq!(rotate.smooth(at(-0.4)), None);
    }

    #[test]
    fn zero_merged_delta_has_no_sign() {
        let mut rotate = Rotate::default();
        let at = |delta| RotateData { pivot: Vec2::zero(), delta };

        assert_eq!(rotate.smooth(at(0.2)), None);
        assert_eq!(rotate.smooth(at(-0.2)), None);
        assert_eq!(rotate.staged.map(|s| s.delta), Some(0.0));

        // A held 0.0 matches neither sign, so it is merged rather than released.
        assert_eq!(rotate.smooth(at(0.3)), None);
        assert_eq!(rotate.staged.map(|s| s.delta), Some(0.3));
    }

    #[test]
    fn restart_drops_staged_emit() {
        let mut rotate = Rotate::default();
        let mut st = started(&mut rotate, 0.0);
        assert!(step(&mut rotate, &mut st, 0.1).is_none());

        rotate.end(&mut st.snapshot(|_| true));
        assert!(rotate.staged.is_none());

        // Fresh hold after restart.
        assert!(step(&mut rotate, &mut st, 0.2).is_none());
    }

    #[test]
    fn cancel_restarts_like_end() {
        let mut rotate = unsmoothed();
        let mut st = started(&mut rotate, 0.0);
        move_to(&mut st, &pair_at(C, 40.0, 0.5));
        rotate.cancel(&mut st.snapshot(|_| true));
        let d = step(&mut rotate, &mut st, 0.6).unwrap();
        assert!((d - 0.1).abs() < EPS);
    }

    #[test]
    fn end_then_start_matches_fresh_start() {
        let mut used = unsmoothed();
        let mut st = started(&mut used, 0.0);
        step(&mut used, &mut st, 1.0);
        move_to(&mut st, &pair_at(C, 40.0, 0.0));
        used.end(&mut st.snapshot(|_| true));
        used.start(&mut st.snapshot(|_| true));
        let a = step(&mut used, &mut st, 0.3);

        let mut fresh = unsmoothed();
        let mut st = started(&mut fresh, 0.0);
        let b = step(&mut fresh, &mut st, 0.3);

        assert_eq!(a, b);
    }
}
