// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Benchmarks for enumeration alone and enumeration with classification.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use partition_identities::classify::{Classifier, ScanMode};
use partition_identities::verify::count;
use partition_identities::PartitionGenerator;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for n in [30u32, 45, 60] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut parts_seen = 0usize;
                let count = PartitionGenerator::for_each(black_box(n), &mut |parts: &[u32]| {
                    parts_seen += parts.len()
                });
                black_box((count, parts_seen))
            })
        });
    }
    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    for n in [30u32, 45, 60] {
        for (label, mode) in [
            ("short_circuit", ScanMode::ShortCircuit),
            ("exhaustive", ScanMode::Exhaustive),
        ] {
            group.bench_with_input(BenchmarkId::new(label, n), &n, |b, &n| {
                b.iter(|| black_box(count(black_box(n), Classifier::new(mode))))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_classify);
criterion_main!(benches);
