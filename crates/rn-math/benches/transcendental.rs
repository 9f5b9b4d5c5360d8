//! Benchmarks for the series-based transcendental functions.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rn_math::{cos, erf, exp, log, sin};

fn bench_exp(c: &mut Criterion) {
    c.bench_function("exp mid-range", |b| b.iter(|| exp(black_box(7.25))));
    c.bench_function("exp unit interval", |b| b.iter(|| exp(black_box(0.62))));
}

fn bench_log(c: &mut Criterion) {
    c.bench_function("log mid-range", |b| b.iter(|| log(black_box(42.5))));
    c.bench_function("log near one", |b| b.iter(|| log(black_box(1.23))));
}

fn bench_trig(c: &mut Criterion) {
    c.bench_function("sin reduced", |b| b.iter(|| sin(black_box(0.45))));
    c.bench_function("sin wrapped", |b| b.iter(|| sin(black_box(123.456))));
    c.bench_function("cos reduced", |b| b.iter(|| cos(black_box(0.45))));
}

fn bench_erf(c: &mut Criterion) {
    c.bench_function("erf unit", |b| b.iter(|| erf(black_box(0.8))));
    c.bench_function("erf tail", |b| b.iter(|| erf(black_box(2.5))));
}

criterion_group!(benches, bench_exp, bench_log, bench_trig, bench_erf);
criterion_main!(benches);
