//! Criterion benchmarks for ring queries.
//! Focus sizes: n in {8, 32, 128} vertices per ring.
//! Results live under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use polyring::ring2::rand::{draw_ring_radial, RadialCfg, ReplayToken, VertexCount};
use polyring::ring2::Ring2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn ring(n: usize, center: Vector2<f64>, seed: u64) -> Ring2 {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        center,
        ..RadialCfg::default()
    };
    draw_ring_radial(cfg, ReplayToken { seed, index: n as u64 })
}

fn bench_ring2(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring2");
    for &n in &[8usize, 32, 128] {
        group.bench_with_input(BenchmarkId::new("contains_point", n), &n, |b, &n| {
            let r = ring(n, Vector2::zeros(), 41);
            let mut rng = StdRng::seed_from_u64(7);
            b.iter_batched(
                || Vector2::new(rng.gen_range(-1.5..1.5), rng.gen_range(-1.5..1.5)),
                |p| r.contains_point(p),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("crossing_overlap", n), &n, |b, &n| {
            let a = ring(n, Vector2::zeros(), 42);
            let other = ring(n, Vector2::new(0.8, 0.3), 43);
            b.iter(|| a.crossing(&other))
        });

        group.bench_with_input(BenchmarkId::new("crossing_disjoint", n), &n, |b, &n| {
            // worst case: the full n·m scan runs
            let a = ring(n, Vector2::zeros(), 44);
            let other = ring(n, Vector2::new(10.0, 0.0), 45);
            b.iter(|| a.crossing(&other))
        });

        group.bench_with_input(BenchmarkId::new("union_shared_corner", n), &n, |b, &n| {
            let a = ring(n, Vector2::zeros(), 46);
            let mut other = ring(n, Vector2::zeros(), 47);
            // pin other's first vertex onto a's first vertex so the rings touch
            other
                .set_position(a.points()[0], 0)
                .expect("ring has vertices");
            b.iter_batched(
                || other.clone(),
                |o| a.union(&o),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("rotate", n), &n, |b, &n| {
            b.iter_batched(
                || ring(n, Vector2::zeros(), 48),
                |mut r| {
                    r.rotate(17.0);
                    r
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ring2);
criterion_main!(benches);
