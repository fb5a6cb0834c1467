//! Benchmarks for chart layout computation

use chartkit_geometry::chart::*;
use chartkit_geometry::{Color, SvgSurface};
use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn wave(len: usize, phase: f64) -> Dataset {
    let values: Vec<f64> = (0..len)
        .map(|i| ((i as f64 * 0.3 + phase).sin() + 1.5) * 40.0)
        .collect();
    Dataset::from_values(&values)
}

fn chart_data(len: usize) -> LineChartData {
    let labels = (0..len).map(|i| i.to_string()).collect();
    LineChartData::new(labels)
        .with_dataset(wave(len, 0.0))
        .with_dataset(wave(len, 1.7))
        .with_legend(vec!["Requests".into(), "Errors".into()])
}

fn bench_line_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_layout");
    let frame = PixelFrame::with_default_padding(800.0, 400.0).unwrap();

    for len in [8, 64, 512, 4096] {
        let data = chart_data(len);
        group.throughput(Throughput::Elements(len as u64 * 2));

        group.bench_with_input(BenchmarkId::new("linear", len), &data, |b, data| {
            let config = LineChartConfig::default();
            b.iter(|| black_box(LineChartLayout::compute(data, frame, &config)));
        });
        group.bench_with_input(BenchmarkId::new("bezier", len), &data, |b, data| {
            let config = LineChartConfig::bezier();
            b.iter(|| black_box(LineChartLayout::compute(data, frame, &config)));
        });
    }

    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let frame = PixelFrame::with_default_padding(800.0, 400.0).unwrap();
    let layout = LineChartLayout::compute(&chart_data(512), frame, &LineChartConfig::default());

    c.bench_function("line_hit_test", |b| {
        b.iter(|| black_box(layout.hit_test(black_box(glam::Vec2::new(400.0, 200.0)))));
    });
}

fn bench_calendar_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("calendar_layout");
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

    for num_days in [30u32, 200, 365] {
        let values: Vec<ContributionValue> = (0..u64::from(num_days))
            .step_by(3)
            .map(|i| ContributionValue::new(end - Days::new(i), (i % 11) as f64))
            .collect();
        group.throughput(Throughput::Elements(u64::from(num_days)));

        group.bench_with_input(BenchmarkId::from_parameter(num_days), &values, |b, values| {
            let config = CalendarConfig::default().with_day_labels(true);
            b.iter(|| black_box(CalendarLayout::compute(end, num_days, values, &config)));
        });
    }

    group.finish();
}

fn bench_pie_layout(c: &mut Criterion) {
    let slices: Vec<PieSlice> = (0..12)
        .map(|i| PieSlice::new(format!("Slice {i}"), f64::from(i + 1), Color::from_rgb_u8(20 * i, 90, 200)))
        .collect();
    let config = PieChartConfig::default();

    c.bench_function("pie_layout", |b| {
        b.iter(|| black_box(PieChartLayout::compute(&slices, 400.0, 250.0, &config)));
    });
}

fn bench_svg_render(c: &mut Criterion) {
    let frame = PixelFrame::with_default_padding(800.0, 400.0).unwrap();
    let data = chart_data(64);
    let config = LineChartConfig::bezier();

    c.bench_function("svg_render_line_chart", |b| {
        b.iter(|| {
            let mut svg = SvgSurface::new(800.0, 400.0);
            ChartRenderer::new(&mut svg).draw_line_chart(&data, frame, &config);
            black_box(svg.finish())
        });
    });
}

criterion_group!(
    benches,
    bench_line_layout,
    bench_hit_test,
    bench_calendar_layout,
    bench_pie_layout,
    bench_svg_render,
);
criterion_main!(benches);
