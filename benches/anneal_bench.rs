//! Criterion benchmarks for the annealing engine.
//!
//! Uses tours over points scattered on a fixed grid so the numbers measure
//! engine and neighborhood overhead rather than input generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_anneal::sa::{AnnealConfig, AnnealProblem, AnnealRunner, ExponentialSchedule};
use u_anneal::tsp::{LocatedCity, TravelingSalesmanProblem};

fn random_tour(n: usize, seed: u64) -> TravelingSalesmanProblem {
    let mut rng = StdRng::seed_from_u64(seed);
    let cities: Vec<LocatedCity> = (0..n)
        .map(|i| {
            let x = rng.random_range(0.0..1000.0);
            let y = rng.random_range(0.0..1000.0);
            LocatedCity::new(format!("city{i}"), (x, y))
        })
        .collect();
    TravelingSalesmanProblem::new(&cities).expect("at least two cities")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_tsp_successors(c: &mut Criterion) {
    let mut group = c.benchmark_group("tsp_successors");

    for &n in &[10usize, 30, 100] {
        let tour = random_tour(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &tour, |b, t| {
            b.iter(|| black_box(t.successors()))
        });
    }
    group.finish();
}

fn bench_anneal_tsp(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal_tsp");
    group.sample_size(10);

    let schedule = ExponentialSchedule::default();
    for &n in &[10usize, 20, 30] {
        let tour = random_tour(n, 42);
        let config = AnnealConfig::default().with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(tour, config),
            |b, (t, cfg)| {
                b.iter(|| {
                    let result = AnnealRunner::run(t.clone(), black_box(&schedule), black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_tsp_successors, bench_anneal_tsp);
criterion_main!(benches);
