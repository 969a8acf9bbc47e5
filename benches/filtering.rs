//! Performance benchmarks for Lantern.
//!
//! Run with: cargo bench
//!
//! The filter recomputes every visibility flag on each keystroke, so the
//! numbers here bound the per-keystroke cost for realistic entry counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lantern::core::{Entry, OptionCollection, Payload};

fn synthetic_collection(entries_per_provider: usize) -> OptionCollection {
    let providers = [
        "Clock",
        "System Monitor",
        "Open Windows",
        "Applications",
        "Git Repositories",
    ];

    let mut collection = OptionCollection::new();
    for (provider_index, provider) in providers.iter().enumerate() {
        for i in 0..entries_per_provider {
            collection.push_entry(
                provider_index,
                Entry::new(*provider, format!("{} entry {}", provider, i), "", Payload::None),
            );
        }
    }
    collection
}

/// Benchmark a full filter pass at several collection sizes.
fn bench_apply_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_query");

    for entries_per_provider in [10, 50, 200] {
        let mut collection = synthetic_collection(entries_per_provider);

        group.bench_with_input(
            BenchmarkId::from_parameter(entries_per_provider * 5),
            &entries_per_provider,
            |b, _| {
                b.iter(|| {
                    collection.apply_query(black_box("windows entry 5"));
                    black_box(collection.visible_len())
                })
            },
        );
    }

    group.finish();
}

/// Benchmark header derivation over the visible subsequence.
fn bench_needs_header(c: &mut Criterion) {
    let mut collection = synthetic_collection(50);
    collection.apply_query("entry");

    c.bench_function("needs_header_full_pass", |b| {
        b.iter(|| {
            let headers: usize = (0..collection.visible_len())
                .filter(|&i| collection.needs_header(i))
                .count();
            black_box(headers)
        })
    });
}

criterion_group!(benches, bench_apply_query, bench_needs_header);
criterion_main!(benches);
