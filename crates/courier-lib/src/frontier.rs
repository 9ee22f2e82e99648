//! Ordered working set of live candidates with threshold pruning.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::candidate::Candidate;
use crate::geometry::{CostModel, Waypoint};

/// Live candidates ordered by [`Candidate::cost_min`].
///
/// Backed by a max-heap so pruning pops the most expensive candidates first.
/// Cost lookups scan every live entry; under typical penalty distributions
/// pruning keeps the set to a handful of candidates, so the scan stays
/// cheap. No fixed capacity is assumed.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn insert(&mut self, candidate: Candidate) {
        self.heap.push(Entry(candidate));
    }

    /// Cheapest banked cost of hopping from any live candidate to `visited`.
    ///
    /// The frontier must not be empty: the solver seeds it with the
    /// departure corner, and pruning always retains the cheapest candidate.
    pub fn min_cost_via(&self, model: &CostModel, visited: Waypoint) -> f64 {
        assert!(!self.heap.is_empty(), "cost lookup on an empty frontier");
        self.heap
            .iter()
            .map(|entry| entry.0.cost_via(model, visited))
            .fold(f64::INFINITY, f64::min)
    }

    /// Remove every candidate whose `cost_min` exceeds `threshold`; returns
    /// how many were dropped.
    ///
    /// The threshold is the `cost_max` of the cheapest live candidate:
    /// anything whose best case cannot beat that candidate's worst case can
    /// never become optimal. At least the cheapest candidate survives, since
    /// a candidate's `cost_min` never exceeds its own `cost_max`.
    pub fn prune(&mut self, threshold: f64) -> usize {
        let mut removed = 0;
        while let Some(entry) = self.heap.peek() {
            if entry.0.cost_min() <= threshold {
                break;
            }
            self.heap.pop();
            removed += 1;
        }
        debug_assert!(!self.heap.is_empty(), "pruned every live candidate");
        removed
    }
}

#[derive(Debug)]
struct Entry(Candidate);

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cost_min().total_cmp(&other.0.cost_min())
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(model: &CostModel, x: u32, y: u32, cost_so_far: f64) -> Candidate {
        Candidate::new(model, Waypoint::new(x, y, 0), cost_so_far)
    }

    #[test]
    fn scan_finds_the_cheapest_predecessor() {
        let model = CostModel::default();
        let mut frontier = Frontier::new();
        frontier.insert(Candidate::seed(&model, model.origin()));
        frontier.insert(candidate(&model, 50, 50, 100.0));

        let visited = Waypoint::new(10, 10, 0);
        let via_origin = model.travel_time(model.origin(), visited);
        assert!((frontier.min_cost_via(&model, visited) - via_origin).abs() < 1e-12);
    }

    #[test]
    fn prune_drops_expensive_candidates_first() {
        let model = CostModel::default();
        let mut frontier = Frontier::new();
        let cheap = candidate(&model, 5, 5, 1.0);
        frontier.insert(cheap);
        frontier.insert(candidate(&model, 50, 50, 500.0));
        frontier.insert(candidate(&model, 60, 40, 900.0));

        let removed = frontier.prune(cheap.cost_max());
        assert_eq!(removed, 2);
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn prune_retains_the_cheapest_candidate() {
        let model = CostModel::default();
        let mut frontier = Frontier::new();
        let only = candidate(&model, 50, 50, 10.0);
        frontier.insert(only);
        assert_eq!(frontier.prune(only.cost_max()), 0);
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    #[should_panic(expected = "empty frontier")]
    fn lookup_on_empty_frontier_panics() {
        let model = CostModel::default();
        Frontier::new().min_cost_via(&model, model.terminus());
    }
}
