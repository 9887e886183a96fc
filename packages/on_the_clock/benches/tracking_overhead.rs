//! Benchmarks to measure the compute overhead of `on_the_clock` logic itself.
//!
//! These benchmarks measure the overhead of the tracking infrastructure by
//! timing empty regions - regions that do not do any actual work but still
//! incur the bookkeeping of starting, stopping, and recording a measurement.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use on_the_clock::Session;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("on_the_clock_overhead");

    // Baseline measurement - no tracking at all.
    group.bench_function("baseline_empty", |b| {
        b.iter(|| {
            // Completely empty - just the black_box call.
            black_box(());
        });
    });

    {
        let session = Session::new();

        group.bench_function("named_span_empty", |b| {
            b.iter(|| {
                let _span = session.open("empty_named_span");
                // Empty region - measures only the span creation/destruction.
                black_box(());
            });
        });

        group.bench_function("default_scope_empty", |b| {
            b.iter(|| {
                let _span = session.scope();
                black_box(());
            });
        });

        group.bench_function("manual_start_stop_empty", |b| {
            b.iter(|| {
                session.start("empty_manual");
                black_box(());
                session
                    .stop()
                    .expect("start was called immediately before stop");
            });
        });

        let mut wrapped = session.wrap(|| black_box(()));
        group.bench_function("wrapped_call_empty", |b| {
            b.iter(|| {
                wrapped();
            });
        });
    }

    {
        // Lookup cost against a registry with a few busy targets.
        let session = Session::new();
        for name in ["alpha", "beta", "gamma"] {
            for _ in 0..100 {
                session.record_duration(name, Duration::from_nanos(1));
            }
        }

        group.bench_function("record_lookup", |b| {
            b.iter(|| {
                let record = session
                    .record(black_box("beta"))
                    .expect("target was recorded during setup");
                black_box(record.mean());
            });
        });
    }

    group.finish();
}
