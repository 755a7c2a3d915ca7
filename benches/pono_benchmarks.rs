//! Pono Spell Benchmarks
//!
//! Benchmarks for dictionary loading and correction queries, using the
//! Criterion framework for statistical analysis and regression detection.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode, Throughput,
};
use pono_spell_lib::config::GeneratorConfig;
use pono_spell_lib::generator::Misspeller;
use pono_spell_lib::PonoTrie;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Builds a synthetic lowercase word list.
fn synthetic_words(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.random_range(3..12);
            (0..len)
                .map(|_| (b'a' + rng.random_range(0..26u8)) as char)
                .collect()
        })
        .collect()
}

/// Benchmark building the index
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("pono_trie_insert");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [1_000, 10_000, 100_000].iter() {
        let words = synthetic_words(*size, 1);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("from_words", size), &words, |b, words| {
            b.iter(|| PonoTrie::from_words(black_box(words)));
        });
    }

    group.finish();
}

/// Benchmark exact hits and fuzzy corrections
fn bench_corrections(c: &mut Criterion) {
    let mut group = c.benchmark_group("pono_trie_corrections");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    let words = synthetic_words(100_000, 2);
    let trie = PonoTrie::from_words(&words);
    let queries: Vec<String> = words.iter().take(1_000).cloned().collect();
    let misspelled = Misspeller::seeded(&GeneratorConfig::default(), 3).sample(&queries, 1_000);

    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("exact", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(trie.corrections(query));
            }
        });
    });

    group.throughput(Throughput::Elements(misspelled.len() as u64));
    group.bench_function("misspelled", |b| {
        b.iter(|| {
            for query in &misspelled {
                black_box(trie.corrections(query));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_insert, bench_corrections);
criterion_main!(benches);
