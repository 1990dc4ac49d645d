//! Benchmarks for the ABC classifier.
//!
//! Run with: cargo bench --bench abc_bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use minierp_core::ProductId;
use minierp_reporting::{ValuationRow, classify};

fn rows(n: u64) -> Vec<ValuationRow> {
    (1..=n)
        .map(|i| {
            // Spread values so sorting does real work and ties occur.
            let cents = ((i * 7_919) % 100_000) as i64 + 1;
            ValuationRow::new(ProductId::new(i), format!("product-{i}"), (i % 50) as u32, Decimal::new(cents, 2))
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("abc_classify");

    for size in [100u64, 1_000, 10_000] {
        let input = rows(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| classify(black_box(input.clone())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
