//! Evaluation benchmarks for Lispy.
//!
//! Measures the whole read-eval pipeline on representative lines.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lispy::eval_source;
use lispy_parse::parse;

/// Single operator call
const SIMPLE: &str = "(+ 1 2)";

/// Mixed operators, a few levels deep
const NESTED_ARITHMETIC: &str = "(- (* (+ 1 2) (+ 3 4)) (/ (* 10 10) (- 9 4)))";

/// Quoted data is returned untouched
const QUOTED: &str = "{+ 1 (* 2 3) {4 5 6}}";

/// One flat call with `n` operands
fn generate_flat_sum(n: usize) -> String {
    let operands: Vec<String> = (0..n).map(|i| i.to_string()).collect();
    format!("(+ {})", operands.join(" "))
}

/// `depth` nested additions
fn generate_nested_sum(depth: usize) -> String {
    let mut expr = "1".to_string();
    for i in 0..depth {
        expr = format!("(+ {i} {expr})");
    }
    expr
}

fn bench_eval_simple(c: &mut Criterion) {
    c.bench_function("eval/simple", |b| b.iter(|| eval_source(black_box(SIMPLE))));
    c.bench_function("eval/nested_arithmetic", |b| {
        b.iter(|| eval_source(black_box(NESTED_ARITHMETIC)));
    });
    c.bench_function("eval/quoted", |b| b.iter(|| eval_source(black_box(QUOTED))));
}

fn bench_eval_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval/flat_sum");
    for n in [10, 100, 1_000] {
        let source = generate_flat_sum(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &source, |b, source| {
            b.iter(|| eval_source(black_box(source)));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("eval/nested_sum");
    for depth in [10, 100, 500] {
        let source = generate_nested_sum(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &source, |b, source| {
            b.iter(|| eval_source(black_box(source)));
        });
    }
    group.finish();
}

fn bench_parse_only(c: &mut Criterion) {
    let source = generate_nested_sum(100);
    c.bench_function("parse/nested_sum_100", |b| b.iter(|| parse(black_box(&source))));
}

criterion_group!(benches, bench_eval_simple, bench_eval_scaling, bench_parse_only);
criterion_main!(benches);
