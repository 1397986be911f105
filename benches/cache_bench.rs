//! Benchmarks for the TTL cache.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;
use ttl_cache::{Cache, CacheConfig};

/// Construction spawns the collector task, so every benchmark runs inside a
/// tokio runtime context.
fn bench_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Runtime::new().expect("runtime")
}

fn bench_point_operations(c: &mut Criterion) {
    let rt = bench_runtime();
    let _guard = rt.enter();

    let mut group = c.benchmark_group("point_operations");

    // Long TTL and a slow collector keep sweeps out of the measurement.
    let config = CacheConfig::new()
        .ttl(Duration::from_secs(600))
        .gc_interval(Duration::from_secs(600));
    let cache: Cache<String, String> = Cache::new("bench", config.clone()).unwrap();

    for i in 0..10_000 {
        cache.set(format!("key_{i}"), format!("value_{i}"));
    }

    group.bench_function("get_existing", |b| {
        let mut i = 0;
        b.iter(|| {
            let key = format!("key_{}", i % 10_000);
            black_box(cache.get(&key));
            i += 1;
        });
    });

    group.bench_function("get_missing", |b| {
        let mut i = 0;
        b.iter(|| {
            let key = format!("missing_{i}");
            black_box(cache.get(&key));
            i += 1;
        });
    });

    group.bench_function("set_new", |b| {
        let cache: Cache<String, String> = Cache::new("bench_set", config.clone()).unwrap();
        let mut i = 0;
        b.iter(|| {
            cache.set(format!("new_key_{i}"), "value".to_string());
            i += 1;
        });
    });

    group.bench_function("set_existing", |b| {
        let mut i = 0;
        b.iter(|| {
            cache.set(format!("key_{}", i % 10_000), "updated".to_string());
            i += 1;
        });
    });

    group.bench_function("delete_missing", |b| {
        let mut i = 0;
        b.iter(|| {
            black_box(cache.delete(&format!("gone_{i}")));
            i += 1;
        });
    });

    group.finish();
}

fn bench_bounded_inserts(c: &mut Criterion) {
    let rt = bench_runtime();
    let _guard = rt.enter();

    // Every insert past the bound pays for one eviction.
    let config = CacheConfig::new()
        .ttl(Duration::from_secs(600))
        .gc_interval(Duration::from_secs(600))
        .max_size(1_000);
    let cache: Cache<String, String> = Cache::new("bench_bounded", config).unwrap();

    c.bench_function("set_at_size_bound", |b| {
        let mut i = 0;
        b.iter(|| {
            cache.set(format!("key_{i}"), "value".to_string());
            i += 1;
        });
    });
}

criterion_group!(benches, bench_point_operations, bench_bounded_inserts);
criterion_main!(benches);
