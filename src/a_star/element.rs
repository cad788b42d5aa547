use crate::NodeID;
use std::cmp::Ordering;

/// An entry of the frontier: `(id, f_cost, insertion order)`.
///
/// Ordered so that a [`BinaryHeap`](std::collections::BinaryHeap) pops the lowest `f_cost` first,
/// and among equal `f_cost`s the one pushed first.
#[derive(Clone, Copy, Debug)]
pub(crate) struct HeuristicElement(pub NodeID, pub f64, pub usize);

impl PartialEq for HeuristicElement {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for HeuristicElement {}

impl PartialOrd for HeuristicElement {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for HeuristicElement {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.1.total_cmp(&self.1).then_with(|| rhs.2.cmp(&self.2))
    }
}
