//! Criterion benchmarks for the pre-overlay decisions.
//! Focus: emptiness oracle and clipping selector on random box pairs,
//! floating vs fixed precision.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use overlay_kit::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_pairs(n: usize, seed: u64) -> Vec<(Geometry, Geometry)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let rect = |rng: &mut StdRng| {
        let x: f64 = rng.gen_range(-100.0..100.0);
        let y: f64 = rng.gen_range(-100.0..100.0);
        let w: f64 = rng.gen_range(0.0..20.0);
        let h: f64 = rng.gen_range(0.0..20.0);
        Geometry::Polygon(Polygon::from_envelope(&Envelope::new(x, x + w, y, y + h)))
    };
    (0..n).map(|_| (rect(&mut rng), rect(&mut rng))).collect()
}

fn bench_oracle(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay_decisions");
    let models = [
        ("floating", PrecisionModel::Floating),
        ("fixed", PrecisionModel::Fixed { scale: 1000.0 }),
    ];
    for (name, pm) in models {
        group.bench_with_input(BenchmarkId::new("is_empty_result", name), &pm, |b, pm| {
            b.iter_batched(
                || random_pairs(256, 7),
                |pairs| {
                    let op = OpCode::Intersection;
                    pairs
                        .iter()
                        .filter(|(a, bb)| is_empty_result(op, Some(a), Some(bb), pm))
                        .count()
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("plan", name), &pm, |b, pm| {
            b.iter_batched(
                || random_pairs(256, 11),
                |pairs| {
                    for (a, bb) in pairs {
                        let input = InputGeometry::binary(a, bb);
                        let _p = plan(OpCode::Intersection, &input, pm);
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_oracle);
criterion_main!(benches);
