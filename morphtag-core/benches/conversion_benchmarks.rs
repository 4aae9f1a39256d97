//! Performance benchmarks for tag conversion
//!
//! Run with: cargo bench --bench conversion_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use morphtag_core::{TagConverter, Tagset};
use std::hint::black_box;

const SAMPLE_TAGS: &[(&str, &str)] = &[
    ("noun", "S@МН@МУЖ@ИМ@НЕОД"),
    ("full_adjective", "A@ЕД@ЖЕН@РОД"),
    ("short_participle", "V@СОВ@ПРИЧ@ПРОШ@КР@ЕД@ЖЕН"),
    ("verb", "V@СОВ@ИЗЪЯВ@НЕПРОШ@ЕД@1-Л"),
    ("particle", "PART"),
];

/// Benchmark single-tag conversion per family
fn bench_single_tags(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_tag");
    let converter = TagConverter::builtin().unwrap();

    for (family, tag) in SAMPLE_TAGS {
        group.bench_with_input(BenchmarkId::new("convert", family), tag, |b, tag| {
            b.iter(|| converter.convert(black_box(tag)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark batch conversion of a token stream
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let converter = TagConverter::builtin().unwrap();

    for size in [100, 1_000, 10_000] {
        let tags: Vec<&str> = SAMPLE_TAGS
            .iter()
            .map(|(_, tag)| *tag)
            .cycle()
            .take(size)
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("convert_all", size), &tags, |b, tags| {
            b.iter(|| converter.convert_all(black_box(tags).iter().copied()));
        });
    }

    group.finish();
}

/// Benchmark converter construction (pattern compilation dominates)
fn bench_construction(c: &mut Criterion) {
    let tagset = Tagset::builtin().unwrap();

    c.bench_function("construct_converter", |b| {
        b.iter(|| TagConverter::new(black_box(tagset)).unwrap());
    });
}

criterion_group!(benches, bench_single_tags, bench_batch, bench_construction);
criterion_main!(benches);
