//! Gesture engine.
//!
//! The engine is the driver the recognizers expect: it owns the [`InputState`],
//! builds a [`State`](crate::input::State) snapshot per binding, calls the hook
//! matching each pointer transition, and hands `on_move` results to the binding's
//! handler.
//!
//! Every call is synchronous; handlers run inside [`Engine::handle`] /
//! [`Engine::handle_frame`].

mod binding;

pub use binding::{BindingId, GestureEvent};

use crate::coords::Rect;
use crate::gesture::Gesture;
use crate::input::{InputState, PointerEvent, PointerId, PointerPhase};

use binding::{Binding, owns};

/// Binds recognizers to regions and drives them from pointer events.
#[derive(Default)]
pub struct Engine {
    input: InputState,
    bindings: Vec<Binding>,
    next_binding: u64,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `gesture` to contacts starting inside `region` (`None` = anywhere).
    pub fn bind<G, F>(&mut self, region: Option<Rect>, gesture: G, handler: F) -> BindingId
    where
        G: Gesture + 'static,
        F: FnMut(&GestureEvent) + 'static,
    {
        self.insert(region, Box::new(gesture), Box::new(handler), false)
    }

    /// Like [`bind`](Self::bind), but the binding is removed after its first dispatch.
    pub fn bind_once<G, F>(&mut self, region: Option<Rect>, gesture: G, handler: F) -> BindingId
    where
        G: Gesture + 'static,
        F: FnMut(&GestureEvent) + 'static,
    {
        self.insert(region, Box::new(gesture), Box::new(handler), true)
    }

    /// Removes a binding. Returns `false` if it was already gone.
    pub fn unbind(&mut self, id: BindingId) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|b| b.id != id);
        before != self.bindings.len()
    }

    pub fn is_bound(&self, id: BindingId) -> bool {
        self.bindings.iter().any(|b| b.id == id)
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Processes one pointer event. Returns the number of dispatched gesture events.
    pub fn handle(&mut self, event: PointerEvent) -> usize {
        let dispatched = self.process(event);
        self.input.prune();
        dispatched
    }

    /// Processes the events of one frame.
    ///
    /// Runs of `Move` events are applied first and evaluated once, so each affected
    /// binding sees a single `on_move` with every contact at its latest position.
    /// `Start`/`End`/`Cancel` flush pending moves before they are applied.
    pub fn handle_frame(&mut self, events: &[PointerEvent]) -> usize {
        let mut dispatched = 0;
        let mut moved: Vec<PointerId> = Vec::new();

        for &event in events {
            if event.phase == PointerPhase::Move {
                if self.input.apply_event(event) && !moved.contains(&event.id) {
                    moved.push(event.id);
                }
                continue;
            }
            dispatched += self.flush_moves(&mut moved);
            dispatched += self.process(event);
        }

        dispatched += self.flush_moves(&mut moved);
        self.input.prune();
        dispatched
    }

    fn insert(
        &mut self,
        region: Option<Rect>,
        gesture: Box<dyn Gesture>,
        handler: binding::Handler,
        once: bool,
    ) -> BindingId {
        if let Some(r) = region {
            if r.is_empty() || !r.is_finite() {
                log::warn!("binding {} region {:?} can never receive contacts", self.next_binding, r);
            }
        }

        let id = BindingId(self.next_binding);
        self.next_binding += 1;
        log::debug!("bound {} to {id}", gesture.name());

        self.bindings.push(Binding { id, region, gesture, handler, once });
        id
    }

    fn process(&mut self, event: PointerEvent) -> usize {
        if !self.input.apply_event(event) {
            return 0;
        }
        self.run_hooks(&[event.id], event.phase)
    }

    fn flush_moves(&mut self, moved: &mut Vec<PointerId>) -> usize {
        if moved.is_empty() {
            return 0;
        }
        let dispatched = self.run_hooks(moved, PointerPhase::Move);
        moved.clear();
        dispatched
    }

    /// Runs the `phase` hook on every binding that owns one of `ids`.
    fn run_hooks(&mut self, ids: &[PointerId], phase: PointerPhase) -> usize {
        let targets: Vec<usize> = self
            .bindings
            .iter()
            .enumerate()
            .filter(|(_, b)| {
                ids.iter()
                    .filter_map(|id| self.input.get(*id))
                    .any(|input| owns(b.region, input))
            })
            .map(|(idx, _)| idx)
            .collect();

        let mut dispatched = 0;
        let mut spent = Vec::new();

        for idx in targets {
            let binding = &mut self.bindings[idx];
            let region = binding.region;
            let mut state = self.input.snapshot(|input| owns(region, input));

            let data = match phase {
                PointerPhase::Start => {
                    binding.gesture.start(&mut state);
                    None
                }
                PointerPhase::Move => binding.gesture.on_move(&mut state),
                PointerPhase::End => {
                    binding.gesture.end(&mut state);
                    None
                }
                PointerPhase::Cancel => {
                    binding.gesture.cancel(&mut state);
                    None
                }
            };

            let Some(data) = data else {
                continue;
            };

            log::trace!("{} dispatching {}", binding.id, binding.gesture.name());
            binding.dispatch(data);
            dispatched += 1;

            if binding.once {
                spent.push(binding.id);
            }
        }

        if !spent.is_empty() {
            self.bindings.retain(|b| !spent.contains(&b.id));
            log::debug!("removed {} one-shot binding(s)", spent.len());
        }

        dispatched
    }
}
