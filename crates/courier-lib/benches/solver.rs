use std::hint::black_box;

use courier_lib::{solve_case, solve_quadratic, CostModel, Waypoint};
use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

static CASE: Lazy<Vec<Waypoint>> = Lazy::new(|| {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    (0..2_000)
        .map(|_| {
            Waypoint::new(
                rng.random_range(1..100),
                rng.random_range(1..100),
                rng.random_range(1..100),
            )
        })
        .collect()
});

fn benchmark_solver(c: &mut Criterion) {
    let model = CostModel::default();
    let case = &*CASE;

    c.bench_function("pruned_2000_waypoints", |b| {
        b.iter(|| black_box(solve_case(&model, case.iter().copied())));
    });

    c.bench_function("quadratic_2000_waypoints", |b| {
        b.iter(|| black_box(solve_quadratic(&model, case)));
    });
}

criterion_group!(benches, benchmark_solver);
criterion_main!(benches);
