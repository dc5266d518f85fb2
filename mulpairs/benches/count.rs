//! Benchmarks for the boundary counter against the quadratic oracle.
//!
//! The boundary counter is measured up to 100,000 elements; the oracle only
//! up to sizes where a single iteration stays well under a second.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mulpairs::{bruteforce_count, count_pairs, count_pairs_sorted};
use mulpairs_test_helpers::{random_sorted_parts, InputShape, Parts};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn input(len: usize, max_whole: u32) -> Parts {
    let mut rng = StdRng::seed_from_u64(len as u64);
    random_sorted_parts(
        &mut rng,
        InputShape::default().lengths(len, len).wholes(0, max_whole),
    )
}

// ============================================================================
// Benchmark: boundary counter
// ============================================================================

fn bench_boundary(c: &mut Criterion) {
    let mut group = c.benchmark_group("boundary");

    for &len in &[1_000usize, 10_000, 100_000] {
        // Wholes in 0..=3 keep most values in the intermediate regime.
        let dense = input(len, 3);
        let spread = input(len, 1000);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("sorted_dense", len), &dense, |b, p| {
            b.iter(|| black_box(count_pairs_sorted(&p.wholes, &p.fractions)));
        });

        group.bench_with_input(BenchmarkId::new("sorted_spread", len), &spread, |b, p| {
            b.iter(|| black_box(count_pairs_sorted(&p.wholes, &p.fractions)));
        });

        group.bench_with_input(BenchmarkId::new("unsorted_spread", len), &spread, |b, p| {
            let mut rng = StdRng::seed_from_u64(1);
            let shuffled = p.shuffled(&mut rng);
            b.iter(|| black_box(count_pairs(&shuffled.wholes, &shuffled.fractions)));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: oracle
// ============================================================================

fn bench_oracle(c: &mut Criterion) {
    let mut group = c.benchmark_group("oracle");

    for &len in &[100usize, 1_000, 4_000] {
        let parts = input(len, 3);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &parts, |b, p| {
            b.iter(|| black_box(bruteforce_count(&p.wholes, &p.fractions)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_boundary, bench_oracle);
criterion_main!(benches);
