//! Set algebra benchmark.
//!
//! Measures union, intersection, disjunction, and subtract over operands that
//! share roughly half of their values, plus the sub-collection predicate.
//! Values repeat so that every operation has non-trivial cardinalities.

use bagwise::algebra::{disjunction, intersection, is_sub_collection, subtract, union};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [usize; 4] = [100, 1000, 10000, 100000];

/// Generates a pair of operands over overlapping value ranges.
fn generate_operands(size: usize) -> (Vec<u64>, Vec<u64>) {
    let distinct = (size / 4).max(1) as u64;
    let left = (0..size as u64).map(|index| index % distinct).collect();
    let right = (0..size as u64)
        .map(|index| index % distinct + distinct / 2)
        .collect();
    (left, right)
}

fn benchmark_binary_operations(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_algebra_binary");

    for size in SIZES {
        let (left, right) = generate_operands(size);

        group.bench_with_input(BenchmarkId::new("union", size), &size, |bencher, _| {
            bencher.iter(|| black_box(union(black_box(&left), black_box(&right))));
        });

        group.bench_with_input(
            BenchmarkId::new("intersection", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(intersection(black_box(&left), black_box(&right))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("disjunction", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(disjunction(black_box(&left), black_box(&right))));
            },
        );

        group.bench_with_input(BenchmarkId::new("subtract", size), &size, |bencher, _| {
            bencher.iter(|| black_box(subtract(black_box(&left), black_box(&right))));
        });
    }

    group.finish();
}

fn benchmark_sub_collection(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_algebra_sub_collection");

    for size in SIZES {
        let (left, _) = generate_operands(size);
        let prefix = left[..size / 2].to_vec();

        group.bench_with_input(
            BenchmarkId::new("is_sub_collection", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(is_sub_collection(black_box(&prefix), black_box(&left))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_binary_operations, benchmark_sub_collection);

criterion_main!(benches);
