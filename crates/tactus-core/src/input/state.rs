use std::collections::BTreeMap;

use super::pointer::Input;
use super::snapshot::State;
use super::types::{PointerEvent, PointerId, PointerPhase};

/// Tracked contacts for a single surface.
///
/// Terminal contacts stay in the map until [`prune`](Self::prune) so hooks for the
/// `End`/`Cancel` transition can still see them.
#[derive(Debug, Default)]
pub struct InputState {
    inputs: BTreeMap<PointerId, Input>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a pointer event. Returns `false` when the event was ignored.
    ///
    /// Ignored: updates for unknown ids, and updates for contacts that already
    /// reached a terminal phase.
    pub fn apply_event(&mut self, ev: PointerEvent) -> bool {
        match ev.phase {
            PointerPhase::Start => {
                if self.inputs.insert(ev.id, Input::new(ev.id, ev.pos)).is_some() {
                    log::debug!("pointer {} restarted before it ended", ev.id);
                }
                true
            }
            phase => match self.inputs.get_mut(&ev.id) {
                Some(input) if input.is_active() => {
                    input.update(phase, ev.pos);
                    true
                }
                Some(_) => {
                    log::trace!("pointer {} already ended; ignoring {:?}", ev.id, phase);
                    false
                }
                None => {
                    log::trace!("untracked pointer {}; ignoring {:?}", ev.id, phase);
                    false
                }
            },
        }
    }

    /// Drops contacts in a terminal phase. Returns how many were removed.
    pub fn prune(&mut self) -> usize {
        let before = self.inputs.len();
        self.inputs.retain(|_, input| input.is_active());
        before - self.inputs.len()
    }

    pub fn get(&self, id: PointerId) -> Option<&Input> {
        self.inputs.get(&id)
    }

    /// All tracked contacts in id order, terminal ones included.
    pub fn inputs(&self) -> impl Iterator<Item = &Input> + '_ {
        self.inputs.values()
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Snapshot over the active contacts accepted by `filter`.
    pub fn snapshot<F>(&mut self, filter: F) -> State<'_>
    where
        F: Fn(&Input) -> bool,
    {
        State::new(self.inputs.values_mut().filter(|i| filter(i)))
    }
}
