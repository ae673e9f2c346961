//! Criterion benches for the enumeration pipeline (group "pipeline") and the
//! simple-polygon test on random quadrilaterals (group "validity").
//!
//! Configs stay small so a full run finishes in seconds; (3,0,4) is the
//! heaviest at 8·7·6·5 candidates.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use gridpoly::prelude::*;
use gridpoly::search::permutation_count;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    for (size, depth, vertices) in [(2, 0, 3), (3, 1, 3), (4, 0, 3), (3, 0, 4)] {
        let cfg = EnumerationCfg::new(size, depth, vertices);
        let n = cfg.grid().points().len();
        if let Some(candidates) = permutation_count(n, vertices) {
            group.throughput(Throughput::Elements(candidates));
        }
        let label = format!("S{size}-D{depth}-k{vertices}");
        group.bench_function(BenchmarkId::new("enumerate_polygons", label), |b| {
            b.iter(|| enumerate_polygons(cfg))
        });
    }
    group.finish();
}

fn bench_validity(c: &mut Criterion) {
    let mut group = c.benchmark_group("validity");
    let points = Grid::new(6, 0).points();
    group.bench_function("is_valid/quad", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter_batched(
            || {
                let picked: Vec<Point> = points.choose_multiple(&mut rng, 4).copied().collect();
                Polygon::new(picked).unwrap()
            },
            |p| p.is_valid(),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_validity);
criterion_main!(benches);
