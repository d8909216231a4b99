//! Criterion benchmark for the optimal parser — the dominant cost of the
//! codec.
//!
//! Run with:
//!   cargo bench --bench parser
//!
//! Uses the retained `lorem` word-salad generator for reproducible corpora
//! instead of a `SILESIA_CORPUS_DIR`-style real-world fixture: LZ8S targets
//! are small embedded buffers, not multi-megabyte streams, so a seeded
//! synthetic corpus is a closer match to its actual workload than a Silesia
//! file would be.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use lz8s::codec::{compress_buffer, parser, Params};

fn bench_parser_build_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_build_table");
    let params = Params::default();

    for &size in &[1_024usize, 8_192, 65_536] {
        let corpus = lz8s::lorem::gen_buffer(size, 0xC0FFEE);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("lorem", size), &corpus, |b, data| {
            b.iter(|| parser::build_table(data, &params))
        });
    }

    group.finish();
}

fn bench_compress_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress_buffer");

    for &size in &[1_024usize, 8_192, 65_536] {
        let corpus = lz8s::lorem::gen_buffer(size, 0xC0FFEE);

        for (label, params) in [
            ("default", Params::default()),
            ("wide_offset", Params { bits_moff: 16, ..Params::default() }),
            ("short_matches", Params { max_mlen: 16, ..Params::default() }),
        ] {
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{label}_{size}"), size),
                &corpus,
                |b, data| b.iter(|| compress_buffer(data, &params)),
            );
        }
    }

    group.finish();
}

fn bench_highly_repetitive_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_worst_case_repetition");
    let params = Params::default();

    // A single repeated byte maximises the match finder's scan length at
    // every position — close to the O(N · max_off · max_mlen) worst case.
    for &size in &[4_096usize, 65_536] {
        let corpus = vec![b'A'; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("repeated_byte", size), &corpus, |b, data| {
            b.iter(|| parser::build_table(data, &params))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parser_build_table, bench_compress_buffer, bench_highly_repetitive_input);
criterion_main!(benches);
