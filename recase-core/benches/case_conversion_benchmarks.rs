//! Performance benchmarks for CaseConverter
//!
//! Run with: cargo bench --bench case_conversion_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use recase_core::{CaseConverter, CaseKind};
use std::hint::black_box;

/// Generate identifier-heavy text of specified size
fn generate_text(size: usize) -> String {
    let base = "parseHttpResponse my_variable_name some-kebab-id. Another sentence here! ";
    let repeat_count = size / base.len() + 1;

    let mut text = base.repeat(repeat_count);
    text.truncate(size);
    text
}

/// Benchmark every case style on the same input
fn bench_case_kinds(c: &mut Criterion) {
    let mut group = c.benchmark_group("case_kinds");
    let converter = CaseConverter::new();
    let text = generate_text(10_240);

    for kind in CaseKind::ALL {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("change_case", kind.code()), &text, |b, text| {
            b.iter(|| converter.change_case(black_box(text), kind).unwrap());
        });
    }

    group.finish();
}

/// Benchmark different text sizes
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let converter = CaseConverter::new();

    for size in [64, 1024, 102_400] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("snake", size), &text, |b, text| {
            b.iter(|| converter.change_case(black_box(text), CaseKind::SnakeCase).unwrap());
        });
    }

    group.finish();
}

/// Benchmark batches of short selections around the parallel threshold
fn bench_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("batches");
    let converter = CaseConverter::new();

    for count in [16, 255, 256, 4096] {
        let selections: Vec<String> = (0..count).map(|i| format!("field_name_{i}")).collect();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("convert_all", count), &selections, |b, s| {
            b.iter(|| converter.convert_all(black_box(s), CaseKind::CamelCase));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_case_kinds, bench_text_sizes, bench_batches);
criterion_main!(benches);
