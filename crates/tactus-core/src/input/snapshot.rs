use crate::coords::Vec2;

use super::pointer::Input;

/// Read view over the active inputs for one hook invocation.
///
/// Inputs are always ordered by ascending [`PointerId`](super::PointerId), so
/// consecutive snapshots visit the same contacts in the same order. The only
/// writable part of an input is its per-gesture progress slot.
pub struct State<'a> {
    active: Vec<&'a mut Input>,
    centroid: Vec2,
}

impl<'a> State<'a> {
    /// Builds a snapshot; terminal inputs are dropped and the rest sorted by id.
    pub fn new(inputs: impl IntoIterator<Item = &'a mut Input>) -> Self {
        let mut active: Vec<&'a mut Input> = inputs.into_iter().filter(|i| i.is_active()).collect();
        active.sort_by_key(|i| i.id());

        let points: Vec<Vec2> = active.iter().map(|i| i.point()).collect();
        let centroid = Vec2::centroid(&points).unwrap_or_default();

        Self { active, centroid }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Mean position of the active inputs (origin when there are none).
    #[inline]
    pub fn centroid(&self) -> Vec2 {
        self.centroid
    }

    pub fn points(&self) -> Vec<Vec2> {
        self.active.iter().map(|i| i.point()).collect()
    }

    pub fn inputs(&self) -> impl Iterator<Item = &Input> + '_ {
        self.active.iter().map(|i| &**i)
    }

    pub fn inputs_mut(&mut self) -> impl Iterator<Item = &mut Input> + '_ {
        self.active.iter_mut().map(|i| &mut **i)
    }

    /// The active input with the lowest id.
    pub fn lead_mut(&mut self) -> Option<&mut Input> {
        self.active.first_mut().map(|i| &mut **i)
    }
}
