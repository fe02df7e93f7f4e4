//! End-to-end export benchmarks.
//!
//! Run with: cargo bench --bench export_performance

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ledger_pdf::{build_pdf_export, Category, ExportRequest, Receipt, Transaction, TransactionType};

fn request_with(count: usize) -> ExportRequest {
    ExportRequest {
        transactions: (0..count)
            .map(|i| Transaction {
                id: format!("t{}", i),
                date: format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1),
                description: format!("Transaction number {} with a longer description", i),
                amount: (i as f64) * 1.37,
                category_id: format!("c{}", i % 40),
                kind: Some(if i % 5 == 0 { TransactionType::Income } else { TransactionType::Expense }),
                receipt_id: (i % 3 == 0).then(|| format!("r{}", i)),
                ..Transaction::default()
            })
            .collect(),
        categories: (0..40)
            .map(|i| Category {
                id: format!("c{}", i),
                name: format!("Category {}", i),
                kind: Some(TransactionType::Expense),
                tax_label: Some(format!("Line {}", i)),
            })
            .collect(),
        receipts: (0..count / 3)
            .map(|i| Receipt {
                id: Some(format!("r{}", i * 3)),
                transaction_id: Some(format!("t{}", i * 3)),
                filename: Some(format!("receipt-{}.jpg", i)),
                ..Receipt::default()
            })
            .collect(),
        ..ExportRequest::default()
    }
}

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_pdf_export");
    for count in [0usize, 100, 1_000, 10_000] {
        let request = request_with(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &request, |b, request| {
            b.iter(|| build_pdf_export(black_box(request)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_export);
criterion_main!(benches);
