//! Criterion benchmarks for the two point-in-triangle classifiers.
//! Corpus sizes: n in {1_000, 10_000, 100_000}, seeded so runs are comparable.
//! Results land under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tricmp::harness::{run_pass, Algorithm, Corpus, HarnessCfg};

fn corpus(tests: usize, seed: u64) -> Corpus {
    let cfg = HarnessCfg {
        tests,
        seed,
        ..HarnessCfg::default()
    };
    Corpus::generate(&cfg).expect("corpus")
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    for &n in &[1_000usize, 10_000, 100_000] {
        let corpus = corpus(n, 42);
        for algorithm in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.label(), n), &corpus, |b, corpus| {
                b.iter(|| black_box(run_pass(corpus, algorithm).results))
            });
        }
    }
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.bench_function(BenchmarkId::new("corpus", 10_000), |b| {
        b.iter(|| black_box(corpus(10_000, 7)))
    });
    group.finish();
}

criterion_group!(benches, bench_classify, bench_generate);
criterion_main!(benches);
