use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use dately::Normalizer;

fn bench_cached_normalize(c: &mut Criterion) {
    let normalizer = Normalizer::new();
    normalizer.index("en").unwrap(); // warm the cache

    c.bench_function("normalize/abbreviated", |b| {
        b.iter(|| normalizer.normalize(black_box("nxt wk"), "en").unwrap())
    });

    c.bench_function("normalize/typo_fallback", |b| {
        b.iter(|| normalizer.normalize(black_box("tomorow"), "en").unwrap())
    });

    c.bench_function("normalize/numeric_month", |b| {
        b.iter(|| normalizer.normalize(black_box("25 december"), "en").unwrap())
    });
}

fn bench_cold_index_build(c: &mut Criterion) {
    c.bench_function("index/cold_build_en", |b| {
        b.iter(|| {
            let normalizer = Normalizer::new();
            black_box(normalizer.index("en").unwrap());
        })
    });
}

criterion_group!(benches, bench_cached_normalize, bench_cold_index_build);
criterion_main!(benches);
