// File: crates/chart-url/benches/encoding_bench.rs
// Summary: Throughput of the three series encoders and of a full chart URL build.

use chart_url::params::ChartType;
use chart_url::{encode_data, AxisInfo, BoundedSeries, Chart, EncodingScheme, Plot, UrlOptions};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gen_series(n: usize) -> BoundedSeries {
    let values = (0..n)
        .map(|i| {
            // waveform in [0, 100] with a few out-of-range spikes
            let v = 50.0 + (i as f64 * 0.01).sin() * 45.0;
            if i % 997 == 0 { -1.0 } else { v }
        })
        .collect::<Vec<_>>();
    BoundedSeries::new(&values).expect("generated values are finite")
}

fn bench_encoders(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_data");
    for &n in &[1_000usize, 10_000usize, 100_000usize] {
        let data = vec![gen_series(n)];
        for scheme in [EncodingScheme::Text, EncodingScheme::Simple, EncodingScheme::Extended] {
            group.bench_with_input(BenchmarkId::new(scheme.to_string(), n), &data, |b, d| {
                b.iter(|| black_box(encode_data(d, scheme)));
            });
        }
    }
    group.finish();
}

fn bench_chart_url(c: &mut Criterion) {
    let mut chart = Chart::new(ChartType::Line, 600, 400).expect("valid size");
    for _ in 0..4 {
        chart.add_plot(Plot::new(gen_series(500)).with_legend("series"));
    }
    chart.add_axis(AxisInfo::x().with_range(0.0, 500.0).expect("finite range"));
    let opts = UrlOptions::default();
    c.bench_function("chart_to_url_4x500", |b| b.iter(|| black_box(chart.to_url(&opts))));
}

criterion_group!(benches, bench_encoders, bench_chart_url);
criterion_main!(benches);
