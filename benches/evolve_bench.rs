//! Criterion benchmarks for the GA engine.
//!
//! Uses the reference problems (Mastermind, TSP on a ring of cities) to
//! measure generation throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_evolve::ga::{GaConfig, GaSolver, GenerationReport};
use u_evolve::problems::{City, Mastermind, Tsp, TspCrossover};

// ===========================================================================
// Helpers
// ===========================================================================

fn ring(n: usize) -> Tsp {
    let cities = (0..n)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / n as f64;
            City::new(format!("c{i}"), angle.cos() * 100.0, angle.sin() * 100.0)
        })
        .collect();
    Tsp::new(cities).expect("ring has at least 2 cities")
}

fn quiet(_: &GenerationReport) {}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_mastermind(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_mastermind");
    group.sample_size(10);

    for &pegs in &[4usize, 8, 16] {
        let secret: Vec<u8> = (0..pegs).map(|i| (i * 5 % 6) as u8).collect();
        let problem = Mastermind::with_secret(secret, 6).expect("valid secret");
        group.bench_with_input(BenchmarkId::from_parameter(pegs), &problem, |b, p| {
            b.iter(|| {
                let mut solver = GaSolver::new(p.clone(), GaConfig::default().with_seed(42))
                    .expect("valid config");
                solver.reset_population(100).expect("valid population");
                let summary = solver
                    .evolve_until_with(100, Some(p.max_score()), &mut quiet)
                    .expect("problem never fails");
                black_box(summary)
            })
        });
    }
    group.finish();
}

fn bench_tsp(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_tsp");
    group.sample_size(10);

    for &n in &[10usize, 30, 60] {
        for policy in [TspCrossover::PrefixOrder, TspCrossover::Ordered] {
            let problem = ring(n).with_crossover(policy);
            group.bench_with_input(
                BenchmarkId::new(format!("{policy:?}"), n),
                &problem,
                |b, p| {
                    b.iter(|| {
                        let mut solver =
                            GaSolver::new(p.clone(), GaConfig::default().with_seed(42))
                                .expect("valid config");
                        solver.reset_population(100).expect("valid population");
                        let summary = solver
                            .evolve_until_with(50, None, &mut quiet)
                            .expect("problem never fails");
                        black_box(summary)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_mastermind, bench_tsp);
criterion_main!(benches);
