//! Estimation benchmarks over generated directory trees.
//!
//! Run with: `cargo bench --package zipsizer-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::io::Cursor;
use std::time::Duration;
use zipsizer_bench::{CorpusConfig, write_corpus};
use zipsizer_lib::prelude::*;

fn estimate_benchmark(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let corpus = CorpusConfig::default();
    let dir = write_corpus(&corpus).unwrap();

    let mut group = c.benchmark_group("estimate");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(20));
    group.throughput(Throughput::Bytes(corpus.total_bytes()));

    for codec in Codec::all() {
        for ratio in [0.05, 0.1, 0.5] {
            let window = SampleWindow::from_ratio(1024 * 1024, ratio).unwrap();
            let estimator = Estimator::new(EstimateConfig::new(window, *codec, 6)).unwrap();
            let id = BenchmarkId::new(codec.as_str(), ratio);

            group.bench_with_input(id, &estimator, |b, estimator| {
                b.to_async(&runtime)
                    .iter(|| async { estimator.estimate(dir.path()).await.unwrap() });
            });
        }
    }

    group.finish();
}

fn compress_benchmark(c: &mut Criterion) {
    let input: Vec<u8> = (0..4 * 1024 * 1024_u32)
        .map(|i| (i % 251) as u8 ^ (i >> 12) as u8)
        .collect();

    let mut group = c.benchmark_group("compress");
    group.sample_size(10);
    group.throughput(Throughput::Bytes(input.len() as u64));

    for codec in Codec::all() {
        let compressor = StreamingCompressor::new(*codec, 6).unwrap();
        group.bench_function(codec.as_str(), |b| {
            b.iter(|| compressor.measure(Cursor::new(input.as_slice())).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, estimate_benchmark, compress_benchmark);
criterion_main!(benches);
