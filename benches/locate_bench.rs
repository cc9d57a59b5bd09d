//! Locator benchmarks.
//!
//! Every lookup costs `O(log index)` source reads, so the interesting axis is
//! how far into the sequence the target sits rather than how long the
//! sequence is.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `fibonacci` | Exact, approximate and missing lookups over the generated Fibonacci source |
//! | `scaling/arithmetic` | Exact lookup as the target index grows from 10 to 10^15 |
//! | `scaling/file` | Exact lookup over in-memory sequences of 1k to 10M values |
//! | `parse` | Request validation alone |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench locate_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use numfind_core::{LocateRequest, Locator, VecSequence};
use numfind_sources::{Arithmetic, Fibonacci};
use std::hint::black_box;

// ---------------------------------------------------------------------------
// Fibonacci
// ---------------------------------------------------------------------------

fn fibonacci_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("fibonacci");
    let locator = Locator::new(Fibonacci::new());

    group.bench_function("exact_f80", |b| {
        b.iter(|| locator.locate(black_box(23_416_728_348_467_685), None))
    });

    group.bench_function("approximate_within_threshold", |b| {
        b.iter(|| locator.locate(black_box(23_416_728_348_000_000), Some(0.01)))
    });

    group.bench_function("miss_without_threshold", |b| {
        b.iter(|| locator.locate(black_box(23_416_728_348_000_000), None))
    });

    group.bench_function("above_last_term", |b| {
        b.iter(|| locator.locate(black_box(i64::MAX), Some(0.5)))
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Scaling
// ---------------------------------------------------------------------------

fn arithmetic_scaling_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling/arithmetic");
    let locator = Locator::new(Arithmetic::new(0, 3).expect("non-negative step"));

    for exp in [1u32, 3, 6, 9, 12, 15] {
        let target = 3 * 10i64.pow(exp);
        group.bench_with_input(BenchmarkId::new("exact", exp), &target, |b, &t| {
            b.iter(|| locator.locate(black_box(t), None))
        });
    }

    group.finish();
}

fn file_scaling_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling/file");

    for size in [1_000usize, 100_000, 10_000_000] {
        // Pairs of duplicates so every hit also walks back to a run start.
        let values: Vec<i64> = (0..size as i64).map(|i| i / 2 * 7).collect();
        let target = values[size * 3 / 4];
        let locator = Locator::new(VecSequence::new(values));

        group.bench_with_input(BenchmarkId::new("exact", size), &target, |b, &t| {
            b.iter(|| locator.locate(black_box(t), None))
        });
        group.bench_with_input(BenchmarkId::new("approximate", size), &target, |b, &t| {
            b.iter(|| locator.locate(black_box(t + 3), Some(0.1)))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Request parsing
// ---------------------------------------------------------------------------

fn parse_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("number_and_threshold", |b| {
        b.iter(|| LocateRequest::parse(black_box("1234567890"), black_box(Some("0.05"))))
    });

    group.bench_function("malformed_number", |b| {
        b.iter(|| LocateRequest::parse(black_box("12x"), None))
    });

    group.finish();
}

criterion_group!(
    benches,
    fibonacci_bench,
    arithmetic_scaling_bench,
    file_scaling_bench,
    parse_bench,
);
criterion_main!(benches);
