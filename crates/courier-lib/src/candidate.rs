//! Immutable candidate records pairing a waypoint with its accumulated
//! optimal cost and the bounds the frontier orders and prunes by.

use crate::geometry::{CostModel, Waypoint};

/// A stop the courier may still hop onward from, annotated with cost bounds.
///
/// `invariant_cost` is `cost_so_far - penalty + delay`: the part of this
/// candidate's contribution to the final cost that does not depend on where
/// the courier hops next. Banking the penalty *negatively* here is
/// deliberate. The solver accumulates every processed waypoint's penalty
/// once into a running total and adds that total back when the case
/// finishes; routes that stop at this waypoint cancel the global charge
/// through the `- penalty` term, so the net result charges each skipped
/// waypoint's penalty exactly once without ever revisiting the live
/// candidates. The `+ delay` pays for the stop here and is charged when the
/// courier departs, which is why the corner sentinel is seeded without it.
///
/// A candidate is created once, after its `cost_so_far` has been computed
/// against the frontier, and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    waypoint: Waypoint,
    invariant_cost: f64,
    cost_min: f64,
    cost_max: f64,
}

impl Candidate {
    /// Record a processed waypoint whose optimal accumulated cost is known.
    pub fn new(model: &CostModel, waypoint: Waypoint, cost_so_far: f64) -> Self {
        let invariant_cost = cost_so_far - f64::from(waypoint.penalty) + model.delay;
        Self::with_invariant(model, waypoint, invariant_cost)
    }

    /// Seed candidate for the departure corner: zero accumulated cost and no
    /// stop delay, since the courier never stops there.
    pub fn seed(model: &CostModel, waypoint: Waypoint) -> Self {
        Self::with_invariant(model, waypoint, 0.0)
    }

    fn with_invariant(model: &CostModel, waypoint: Waypoint, invariant_cost: f64) -> Self {
        Self {
            waypoint,
            invariant_cost,
            cost_min: invariant_cost + model.best_hop_time(waypoint),
            cost_max: invariant_cost + model.worst_hop_time(waypoint),
        }
    }

    pub fn waypoint(&self) -> Waypoint {
        self.waypoint
    }

    /// Lower bound on the banked cost of any route that still runs through
    /// this candidate.
    pub fn cost_min(&self) -> f64 {
        self.cost_min
    }

    /// Banked cost of stopping here and riding straight to the far corner;
    /// the pruning threshold when this candidate is the cheapest one.
    pub fn cost_max(&self) -> f64 {
        self.cost_max
    }

    /// Banked cost of treating this candidate as the last stop before
    /// `visited`.
    pub fn cost_via(&self, model: &CostModel, visited: Waypoint) -> f64 {
        model.travel_time(self.waypoint, visited) + self.invariant_cost
    }
}
