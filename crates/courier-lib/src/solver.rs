//! Single-pass solver maintaining the pruned candidate frontier.
//!
//! The streaming engine processes each waypoint once: an O(m) scan of the
//! frontier for its optimal accumulated cost, then an O(log m) insertion and
//! occasional prune, with the live set m staying a small constant under
//! typical penalty distributions. [`solve_quadratic`] is the exhaustive
//! O(n²) reference the engine is checked against.

use tracing::{debug, trace};

use crate::candidate::Candidate;
use crate::frontier::Frontier;
use crate::geometry::{CostModel, Waypoint};

/// Streaming solver state for one courier case.
///
/// Feed waypoints in itinerary order with [`observe`](Solver::observe), then
/// call [`finish`](Solver::finish) to close the route at the arrival corner.
/// The frontier is owned exclusively by one solver for the lifetime of one
/// case; independent cases use independent solvers.
#[derive(Debug)]
pub struct Solver {
    model: CostModel,
    frontier: Frontier,
    /// Penalties of every processed waypoint, banked positively here and
    /// negatively inside each candidate; see [`Candidate`].
    total_penalty: u64,
    /// Lowest `cost_min` accepted so far.
    best_cost_min: f64,
    /// `cost_max` of the cheapest candidate seen so far. Anything whose
    /// `cost_min` exceeds this can never affect the optimum.
    acceptable: f64,
}

impl Solver {
    pub fn new(model: CostModel) -> Self {
        let seed = Candidate::seed(&model, model.origin());
        let best_cost_min = seed.cost_min();
        let mut frontier = Frontier::new();
        frontier.insert(seed);
        Self {
            model,
            frontier,
            total_penalty: 0,
            best_cost_min,
            acceptable: f64::INFINITY,
        }
    }

    /// Number of live candidates.
    pub fn live_candidates(&self) -> usize {
        self.frontier.len()
    }

    /// Process the next waypoint on the itinerary.
    pub fn observe(&mut self, visited: Waypoint) {
        assert!(
            self.model.contains(visited),
            "waypoint {visited} outside the {}-unit field",
            self.model.edge
        );
        self.total_penalty += u64::from(visited.penalty);

        let cost_so_far = self.frontier.min_cost_via(&self.model, visited);
        let candidate = Candidate::new(&self.model, visited, cost_so_far);

        if candidate.cost_min() > self.acceptable {
            // Its best case already loses to the cheapest candidate's worst
            // case; no future hop can make it optimal.
            trace!(waypoint = %visited, cost_min = candidate.cost_min(), "discarded on arrival");
            return;
        }

        let improves = candidate.cost_min() <= self.best_cost_min;
        if improves {
            self.best_cost_min = candidate.cost_min();
            self.acceptable = candidate.cost_max();
        }
        self.frontier.insert(candidate);
        // Only prune when the global lower bound improved; the threshold is
        // unchanged otherwise.
        if improves {
            let removed = self.frontier.prune(self.acceptable);
            if removed > 0 {
                debug!(removed, live = self.frontier.len(), "pruned frontier");
            }
        }
    }

    /// Close the route at the arrival corner and return the total cost in
    /// seconds.
    ///
    /// Candidates bank penalties negatively, so adding the running penalty
    /// total restores the true cost: each skipped waypoint ends up charged
    /// exactly once, each visited waypoint not at all.
    pub fn finish(self) -> f64 {
        let best = self.frontier.min_cost_via(&self.model, self.model.terminus());
        best + self.total_penalty as f64
    }
}

/// Solve one case in a single pass over `waypoints`.
pub fn solve_case<I>(model: &CostModel, waypoints: I) -> f64
where
    I: IntoIterator<Item = Waypoint>,
{
    let mut solver = Solver::new(*model);
    for waypoint in waypoints {
        solver.observe(waypoint);
    }
    solver.finish()
}

/// Exhaustive O(n²) reference: every pair of stops is considered, penalties
/// accrue positively for each skipped waypoint, and the stop delay is
/// charged at every intermediate stop.
///
/// The pruned engine assumes a stop never makes the remaining route cheaper
/// than its bounds predict, which holds whenever no penalty exceeds the stop
/// delay; differential checks against this reference should draw penalties
/// from that range.
pub fn solve_quadratic(model: &CostModel, waypoints: &[Waypoint]) -> f64 {
    let mut stops = Vec::with_capacity(waypoints.len() + 2);
    stops.push(model.origin());
    stops.extend_from_slice(waypoints);
    stops.push(model.terminus());
    let count = stops.len();

    // prefix[i] holds the total penalty of stops[..i].
    let mut prefix = vec![0.0; count + 1];
    for (i, stop) in stops.iter().enumerate() {
        prefix[i + 1] = prefix[i] + f64::from(stop.penalty);
    }

    let mut best = vec![f64::INFINITY; count];
    best[0] = 0.0;
    for i in 1..count {
        let stop_cost = if i + 1 == count { 0.0 } else { model.delay };
        for j in 0..i {
            let skipped = prefix[i] - prefix[j + 1];
            let cost = best[j] + model.travel_time(stops[j], stops[i]) + skipped + stop_cost;
            if cost < best[i] {
                best[i] = cost;
            }
        }
    }
    best[count - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solver_starts_with_the_seed_only() {
        let solver = Solver::new(CostModel::default());
        assert_eq!(solver.live_candidates(), 1);
    }

    #[test]
    fn quadratic_reference_on_the_free_centre_stop() {
        let model = CostModel::default();
        let cost = solve_quadratic(&model, &[Waypoint::new(50, 50, 0)]);
        let direct = 100.0 * std::f64::consts::SQRT_2 / 2.0;
        assert!((cost - direct).abs() < 1e-9);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_bounds_waypoint_aborts() {
        let mut solver = Solver::new(CostModel::default());
        solver.observe(Waypoint::new(101, 0, 0));
    }
}
