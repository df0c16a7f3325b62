//! Micro-benchmarks for the formatter and listing parser.
//!
//! Run with: `cargo bench --package dryscan-bench`

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use dryscan_bench::{synthetic_listing, synthetic_sizes};
use dryscan_report::format_bytes;
use dryscan_resolve::parse_model_listing;
use std::hint::black_box;

fn format_benchmark(c: &mut Criterion) {
    let sizes = synthetic_sizes(1024);

    c.bench_function("format_bytes", |b| {
        b.iter(|| {
            for &size in &sizes {
                black_box(format_bytes(black_box(size)));
            }
        });
    });
}

fn listing_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_model_listing");

    for models in [10_usize, 100, 1000] {
        let listing = synthetic_listing(models);
        group.bench_function(models.to_string(), |b| {
            b.iter_batched(
                || listing.clone(),
                |listing| black_box(parse_model_listing(&listing)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, format_benchmark, listing_benchmark);
criterion_main!(benches);
