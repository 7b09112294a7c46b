// Baseline benchmarks for AppError construction and encoding
// Run with: cargo bench

use apperror::{AppError, Cause, ErrorOptions, create, serialize, wrap};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Benchmark creating an error from a code alone
fn bench_create_simple(c: &mut Criterion) {
    c.bench_function("create_simple", |b| {
        b.iter(|| {
            let error = create(black_box("not_found"), ErrorOptions::new());
            black_box(error);
        });
    });
}

/// Benchmark creating an error with every option set
fn bench_create_full(c: &mut Criterion) {
    c.bench_function("create_full", |b| {
        b.iter(|| {
            let error = create(
                black_box("validation_failed"),
                ErrorOptions::new()
                    .with_status(black_box(422))
                    .with_message(black_box("Email format is invalid"))
                    .with_public(true)
                    .with_data(black_box(vec!["email"])),
            );
            black_box(error);
        });
    });
}

/// Benchmark wrapping a structured cause that carries its own causes
fn bench_wrap_nested(c: &mut Criterion) {
    let inner = create(
        "db_query_failed",
        ErrorOptions::new().with_causes(["connection reset", "retry exhausted"]),
    );

    c.bench_function("wrap_nested", |b| {
        b.iter(|| {
            let error = wrap(
                Cause::from(black_box(inner.clone())),
                "user_lookup_failed",
                ErrorOptions::new().with_message("loading profile"),
            );
            black_box(error);
        });
    });
}

/// Benchmark serializing public and private errors
fn bench_serialize(c: &mut Criterion) {
    let public = AppError::new("not_found")
        .with_status(404)
        .with_message("User not found")
        .with_public(true)
        .with_data(serde_json::json!({"id": "user-123"}));
    let private = public.clone().with_public(false);

    c.bench_function("serialize_public", |b| {
        b.iter(|| black_box(serialize(black_box(&public))));
    });

    c.bench_function("serialize_private", |b| {
        b.iter(|| black_box(serialize(black_box(&private))));
    });
}

criterion_group!(
    benches,
    bench_create_simple,
    bench_create_full,
    bench_wrap_nested,
    bench_serialize
);
criterion_main!(benches);
