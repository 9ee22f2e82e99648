//! Differential checks of the pruned engine against the exhaustive O(n²)
//! reference.

use courier_lib::{solve_case, solve_quadratic, CostModel, Solver, Waypoint};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TOLERANCE: f64 = 1e-9;

fn random_case(rng: &mut StdRng, len: usize, max_penalty: u32) -> Vec<Waypoint> {
    (0..len)
        .map(|_| {
            Waypoint::new(
                rng.random_range(0..=100),
                rng.random_range(0..=100),
                rng.random_range(0..=max_penalty),
            )
        })
        .collect()
}

#[test]
fn pruned_engine_matches_reference_on_random_cases() {
    // Penalties stay at or below the stop delay: in that regime a stop never
    // makes the remaining route cheaper than the frontier bounds predict, so
    // pruning is exact and both engines must agree for every input.
    let model = CostModel::default();
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for len in [1, 2, 3, 8, 25, 80, 200] {
        for _ in 0..20 {
            let case = random_case(&mut rng, len, 10);
            let pruned = solve_case(&model, case.iter().copied());
            let exact = solve_quadratic(&model, &case);
            assert!(
                (pruned - exact).abs() < TOLERANCE,
                "len={len} pruned={pruned} exact={exact} case={case:?}"
            );
        }
    }
}

#[test]
fn zero_penalties_always_ride_straight_through() {
    let model = CostModel::default();
    let mut rng = StdRng::seed_from_u64(42);
    let case = random_case(&mut rng, 300, 0);
    let pruned = solve_case(&model, case.iter().copied());
    let exact = solve_quadratic(&model, &case);
    assert!((pruned - exact).abs() < TOLERANCE);
    // With nothing charged for riding past, the diagonal is optimal.
    let direct = 100.0 * std::f64::consts::SQRT_2 / 2.0;
    assert!((pruned - direct).abs() < TOLERANCE);
}

#[test]
fn penalties_equal_to_the_delay_stay_exact() {
    let model = CostModel::default();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10 {
        let case: Vec<Waypoint> = (0..150)
            .map(|_| {
                Waypoint::new(
                    rng.random_range(0..=100),
                    rng.random_range(0..=100),
                    if rng.random_bool(0.5) { 10 } else { 0 },
                )
            })
            .collect();
        let pruned = solve_case(&model, case.iter().copied());
        let exact = solve_quadratic(&model, &case);
        assert!((pruned - exact).abs() < TOLERANCE);
    }
}

#[test]
fn heavy_penalties_keep_the_frontier_small() {
    // Penalties above the delay drive the acceptance threshold down fast;
    // the live set stays a handful of entries deep across thousands of
    // waypoints. No fixed capacity is assumed, only observed.
    let model = CostModel::default();
    let mut rng = StdRng::seed_from_u64(0xBEEF);
    let mut solver = Solver::new(model);
    let mut peak = 0;
    for _ in 0..5_000 {
        solver.observe(Waypoint::new(
            rng.random_range(1..100),
            rng.random_range(1..100),
            rng.random_range(1..100),
        ));
        peak = peak.max(solver.live_candidates());
    }
    assert!(peak <= 32, "frontier grew to {peak} entries");
    assert!(solver.finish().is_finite());
}
