//! Permutation generator benchmark.
//!
//! Drains the generator for small lengths. Each step is one adjacent swap
//! plus building the returned ordering, so cost should track `n * n!`.

use bagwise::permutation::permutations;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const LENGTHS: [usize; 4] = [4, 6, 8, 9];

fn benchmark_drain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("permutation_drain");
    group.sample_size(20);

    for length in LENGTHS {
        let input: Vec<usize> = (0..length).collect();
        group.bench_with_input(BenchmarkId::new("count", length), &length, |bencher, _| {
            bencher.iter(|| {
                permutations(black_box(&input))
                    .map(|generator| generator.map(|ordering| black_box(ordering).len()).sum::<usize>())
            });
        });
    }

    group.finish();
}

fn benchmark_first_ordering(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("permutation_first");

    for length in [10, 100, 1000] {
        let input: Vec<u32> = (0..length).collect();
        group.bench_with_input(BenchmarkId::new("next", length), &length, |bencher, _| {
            bencher.iter(|| {
                permutations(black_box(&input))
                    .map(|mut generator| generator.next())
                    .map(black_box)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_drain, benchmark_first_ordering);

criterion_main!(benches);
