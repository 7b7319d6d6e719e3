//! Benchmark for numeric extraction and rule application on long input lines
//!
//! Run with: cargo bench --bench conversion_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use unicon::convert::{extract_numbers, LinearUnit, TempFormat, TemperatureConverter};

/// Build a dimension string like "1.5x2.5x3.5..." with `n` numbers
fn dimension_line(n: usize) -> String {
    (0..n)
        .map(|i| format!("{}.5", i))
        .collect::<Vec<_>>()
        .join("x")
}

fn bench_extract_and_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_and_convert");
    let rule = LinearUnit::Centimeters.rule();

    for n in [3usize, 100, 10_000] {
        let line = dimension_line(n);
        group.throughput(Throughput::Bytes(line.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &line, |b, line| {
            b.iter(|| {
                let numbers = extract_numbers(black_box(line)).unwrap();
                rule.convert_and_format(&numbers).unwrap()
            })
        });
    }
    group.finish();
}

fn bench_temperature(c: &mut Criterion) {
    let conv = TemperatureConverter::new(TempFormat::Rounded);
    c.bench_function("temperature_range", |b| {
        b.iter(|| conv.convert(black_box("-12.5 ~ 37.75°C")).unwrap())
    });
}

criterion_group!(benches, bench_extract_and_convert, bench_temperature);
criterion_main!(benches);
