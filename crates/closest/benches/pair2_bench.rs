//! Criterion benchmarks for the closest-pair solvers.
//! Focus sizes: n in {64, 256, 1024, 4096}; the quadratic oracle is capped
//! at 1024 to keep runs short.

use closest::pair2::rand::{draw_points, ReplayToken, ScatterCfg, Shape};
use closest::pair2::{brute_force_min_distance, closest_pair_distance};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn scatter(n: usize, seed: u64) -> Vec<closest::Point> {
    let cfg = ScatterCfg {
        n,
        bound: 1_000_000,
        shape: Shape::Uniform,
    };
    draw_points(
        cfg,
        ReplayToken {
            seed,
            index: n as u64,
        },
    )
}

fn bench_pair2(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair2");
    for &n in &[64usize, 256, 1024, 4096] {
        group.bench_with_input(BenchmarkId::new("divide_and_conquer", n), &n, |b, &n| {
            b.iter_batched(
                || scatter(n, 43),
                |pts| {
                    let _d = closest_pair_distance(&pts);
                },
                BatchSize::SmallInput,
            )
        });

        if n <= 1024 {
            group.bench_with_input(BenchmarkId::new("brute_force", n), &n, |b, &n| {
                b.iter_batched(
                    || scatter(n, 44),
                    |pts| {
                        let _d = brute_force_min_distance(&pts);
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_pair2);
criterion_main!(benches);
