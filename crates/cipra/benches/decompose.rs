//! Benchmarks for loop tracing, decomposition and the endpoint map.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

use cipra::{
    get_all_loops, get_endpoint_to_loop_map, trace_loop, BoundaryPoint, ColorMode,
    GridConfiguration, LoopAnalysis, Position, TileVariant, ENDPOINT_KEYS, TOTAL_STEPS,
};

fn configurations() -> Vec<(&'static str, GridConfiguration)> {
    let shuffled = GridConfiguration::identity()
        .shuffled(&mut StdRng::seed_from_u64(0x51))
        .configuration;
    vec![
        ("uniform_zero", GridConfiguration::uniform(TileVariant::default())),
        ("identity", GridConfiguration::identity()),
        ("shuffled", shuffled),
    ]
}

fn bench_trace(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace_loop");
    group.throughput(Throughput::Elements(1));

    for (name, config) in configurations() {
        group.bench_function(name, |b| {
            b.iter(|| {
                black_box(trace_loop(
                    black_box(&config),
                    Position::ZERO,
                    BoundaryPoint::ALL[0],
                ))
            });
        });
    }

    group.finish();
}

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_all_loops");
    group.throughput(Throughput::Elements(TOTAL_STEPS as u64));

    for (name, config) in configurations() {
        group.bench_function(name, |b| {
            b.iter(|| black_box(get_all_loops(black_box(&config))));
        });
    }

    group.finish();
}

fn bench_endpoint_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("endpoint_map");
    group.throughput(Throughput::Elements(ENDPOINT_KEYS as u64));

    for (name, config) in configurations() {
        group.bench_function(name, |b| {
            b.iter(|| black_box(get_endpoint_to_loop_map(black_box(&config))));
        });
    }

    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    group.throughput(Throughput::Elements(1));

    let config = GridConfiguration::identity();
    group.bench_function("analyse_and_summarise", |b| {
        b.iter(|| {
            let analysis = LoopAnalysis::new(black_box(config));
            black_box(analysis.summary(ColorMode::ByLength))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_trace,
    bench_decompose,
    bench_endpoint_map,
    bench_analysis
);
criterion_main!(benches);
