//! Benchmarks for bond pricing, yield solving and risk.
//!
//! Run with: cargo bench -p yieldline-bonds

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use yieldline_bonds::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_test_bond(id: usize) -> Bond {
    let coupons = [0.0, 0.02, 0.035, 0.05, 0.065, 0.08];
    let maturities = [1, 2, 5, 7, 10, 20, 30];
    let frequencies = [ANNUAL, SEMI_ANNUAL, QUARTERLY, MONTHLY];

    Bond::from_terms(
        BondTerms::new(
            1000.0,
            coupons[id % coupons.len()],
            maturities[id % maturities.len()],
            frequencies[id % frequencies.len()],
        )
        .unwrap(),
    )
}

// =============================================================================
// SINGLE BOND BENCHMARKS
// =============================================================================

fn bench_price(c: &mut Criterion) {
    let bond = Bond::new(1000.0, 0.05, 10)
        .unwrap()
        .with_frequency(SEMI_ANNUAL)
        .unwrap();

    c.bench_function("price_10y_semi_annual", |b| {
        b.iter(|| bond.price(black_box(0.045)))
    });
}

fn bench_yield_to_maturity(c: &mut Criterion) {
    let mut group = c.benchmark_group("yield_to_maturity");

    for maturity in [2_u32, 10, 30] {
        let bond = Bond::new(1000.0, 0.05, maturity)
            .unwrap()
            .with_frequency(SEMI_ANNUAL)
            .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(maturity), &bond, |b, bond| {
            b.iter(|| bond.yield_to_maturity(black_box(950.0)))
        });
    }
    group.finish();
}

fn bench_sensitivity(c: &mut Criterion) {
    let bond = Bond::new(1000.0, 0.05, 30)
        .unwrap()
        .with_frequency(MONTHLY)
        .unwrap();

    c.bench_function("sensitivity_30y_monthly", |b| {
        b.iter(|| bond.sensitivity(black_box(0.06)))
    });
}

// =============================================================================
// BATCH BENCHMARKS
// =============================================================================

fn bench_batch_yield(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_yield");
    group.sample_size(50);

    for size in [10, 100, 1000] {
        let bonds: Vec<Bond> = (0..size).map(create_test_bond).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &bonds, |b, bonds| {
            b.iter(|| {
                bonds
                    .iter()
                    .map(|bond| bond.yield_to_maturity(black_box(900.0)))
                    .filter(Result::is_ok)
                    .count()
            })
        });
    }
    group.finish();
}

criterion_group!(single_bond, bench_price, bench_yield_to_maturity, bench_sensitivity);
criterion_group!(batch, bench_batch_yield);
criterion_main!(single_bond, batch);
