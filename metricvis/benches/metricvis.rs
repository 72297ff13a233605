use criterion::Throughput;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use metricvis::{
    render, Column, ColorMode, Dimension, Dimensions, FormatSpec, Range, Ranges, Services,
    Table, Value, VisParams,
};

fn ranges(count: usize) -> Ranges {
    Ranges::new(
        (0..count)
            .map(|i| Range::new(i as f64 * 100.0, (i + 1) as f64 * 100.0))
            .collect(),
    )
    .unwrap()
}

fn bucket_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("bucket index");

    group.throughput(Throughput::Elements(1));

    let ranges = ranges(10);

    group.bench_function("first", |b| b.iter(|| ranges.bucket_index(black_box(50.0))));
    group.bench_function("last", |b| b.iter(|| ranges.bucket_index(black_box(950.0))));
    group.bench_function("clamped", |b| {
        b.iter(|| ranges.bucket_index(black_box(1e9)))
    });
}

fn render_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let mut table = Table::new(vec![Column::new("col-0", "host"), Column::new("col-1", "Count")]);
    for i in 0..100 {
        table.push_row(vec![
            Value::from(format!("host-{i}")),
            Value::from(i as f64 * 10.0),
        ]);
    }

    let dimensions = Dimensions::MetricsAndBucket {
        metrics: vec![Dimension::new(1, FormatSpec::number())],
        bucket: Dimension::new(0, FormatSpec::String),
    };

    let params = VisParams::builder(ranges(10).into())
        .unwrap()
        .color_mode(ColorMode::Background)
        .build();

    let services = Services::default();

    group.throughput(Throughput::Elements(table.rows.len() as u64));

    group.bench_function("background", |b| {
        b.iter(|| render(&params, &dimensions, &table, &services))
    });

    let params = VisParams {
        percentage_mode: true,
        ..params
    };

    group.bench_function("percentage", |b| {
        b.iter(|| render(&params, &dimensions, &table, &services))
    });
}

criterion_group!(benches, bucket_index, render_table);
criterion_main!(benches);
