//! Benchmark for the `RemoteData` combinators.
//!
//! Every combinator is written in terms of `fold`. These benchmarks compare
//! them with the equivalent hand-written `match` to check that the closures
//! are inlined away.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use remote_data::remote::{self, Handlers, RemoteData};
use std::hint::black_box;

fn sample_values() -> Vec<(&'static str, RemoteData<String, i32>)> {
    vec![
        ("not_asked", RemoteData::NotAsked),
        ("loading", RemoteData::Loading),
        ("failure", RemoteData::Failure("error".to_string())),
        ("success", RemoteData::Success(42)),
    ]
}

// =============================================================================
// map
// =============================================================================

fn benchmark_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remote_data_map");

    for (name, value) in sample_values() {
        group.bench_with_input(BenchmarkId::new("fold_derived", name), &value, |bencher, value| {
            bencher.iter(|| black_box(value.clone().map(|x| x * 2)));
        });

        group.bench_with_input(BenchmarkId::new("manual_match", name), &value, |bencher, value| {
            bencher.iter(|| {
                let mapped: RemoteData<String, i32> = match value.clone() {
                    RemoteData::NotAsked => RemoteData::NotAsked,
                    RemoteData::Loading => RemoteData::Loading,
                    RemoteData::Failure(error) => RemoteData::Failure(error),
                    RemoteData::Success(x) => RemoteData::Success(x * 2),
                };
                black_box(mapped)
            });
        });
    }

    group.finish();
}

// =============================================================================
// bimap
// =============================================================================

fn benchmark_bimap(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remote_data_bimap");

    for (name, value) in sample_values() {
        group.bench_with_input(BenchmarkId::new("method", name), &value, |bencher, value| {
            bencher.iter(|| black_box(value.clone().bimap(|e| e.len(), |x| x * 2)));
        });

        let curried = remote::bimap(|e: String| e.len(), |x: i32| x * 2);
        group.bench_with_input(BenchmarkId::new("curried", name), &value, |bencher, value| {
            bencher.iter(|| black_box(curried(value.clone())));
        });
    }

    group.finish();
}

// =============================================================================
// bind chains
// =============================================================================

fn benchmark_bind_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remote_data_bind_chain");

    group.bench_function("bind_10_steps", |bencher| {
        bencher.iter(|| {
            let mut value: RemoteData<String, i32> = RemoteData::Success(black_box(0));
            for _ in 0..10 {
                value = value.bind(|x| RemoteData::Success(x + 1));
            }
            black_box(value)
        });
    });

    group.bench_function("fold_handlers", |bencher| {
        let render = remote::fold(Handlers {
            on_not_asked: || 0_usize,
            on_loading: || 1,
            on_failure: |error: String| error.len(),
            on_success: |value: i32| value.unsigned_abs() as usize,
        });
        let values = sample_values();
        bencher.iter(|| {
            let total: usize = values
                .iter()
                .map(|(_, value)| render(value.clone()))
                .sum();
            black_box(total)
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_map, benchmark_bimap, benchmark_bind_chain);
criterion_main!(benches);
