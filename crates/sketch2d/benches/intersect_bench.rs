//! Criterion benchmarks for ingestion and intersection.
//! Focus sizes: n in {10, 100, 1000} records / segment pairs.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sketch2d::prelude::*;

fn random_records(n: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = String::new();
    for _ in 0..n {
        // Small integer grid so duplicates occur and dedup does real work.
        let c = |rng: &mut StdRng| rng.gen_range(-8i32..=8);
        match rng.gen_range(0..3) {
            0 => out.push_str(&format!("P {} {}\n", c(&mut rng), c(&mut rng))),
            1 => out.push_str(&format!(
                "L {} {} {} {}\n",
                c(&mut rng),
                c(&mut rng),
                c(&mut rng),
                c(&mut rng)
            )),
            _ => out.push_str(&format!(
                "A {} {} {} {} {} {}\n",
                c(&mut rng),
                c(&mut rng),
                c(&mut rng),
                c(&mut rng),
                c(&mut rng),
                c(&mut rng)
            )),
        }
    }
    out
}

fn random_segment(rng: &mut StdRng) -> LineSegment {
    let mut p = || Point::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
    LineSegment::new(p(), p())
}

fn bench_ingest(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest");
    for &n in &[10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("read_shapes", n), &n, |b, &n| {
            let text = random_records(n, 7);
            b.iter(|| read_shapes(&DefaultFactory, text.as_bytes()).unwrap());
        });
    }
    group.finish();
}

fn bench_intersect(c: &mut Criterion) {
    let cfg = GeomCfg::default();
    let arc = Arc::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0));
    let mut group = c.benchmark_group("intersect");
    for &n in &[10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("segment_segment", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(43);
                    (0..n)
                        .map(|_| (random_segment(&mut rng), random_segment(&mut rng)))
                        .collect::<Vec<_>>()
                },
                |pairs| {
                    for (s1, s2) in &pairs {
                        let _ = segment_segment(s1, s2, cfg);
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("segment_arc", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(44);
                    (0..n).map(|_| random_segment(&mut rng)).collect::<Vec<_>>()
                },
                |segs| {
                    for s in &segs {
                        let _ = segment_arc(s, &arc, cfg);
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ingest, bench_intersect);
criterion_main!(benches);
