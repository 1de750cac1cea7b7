//! Full generation pipeline benchmarks.
//!
//! Measures node construction, candidate enumeration, selection, and
//! assembly together for each selection strategy, on single-part and
//! multi-part graphs.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::SmallRng};

use gengraph_benches::{
    error::BenchSetupError,
    params::{GenerationBenchParams, StrategyKind},
};

/// Seed used for every run.
const SEED: u64 = 42;

/// Node counts to benchmark.
const SIZES: &[usize] = &[50, 200, 800];

/// Part counts to benchmark.
const PART_COUNTS: &[usize] = &[1, 4];

const STRATEGIES: &[StrategyKind] = &[
    StrategyKind::Complete,
    StrategyKind::Random { edges_per_node: 4 },
    StrategyKind::Nearest,
];

fn generate_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("generate");
    group.sample_size(20);

    for &strategy in STRATEGIES {
        for &size in SIZES {
            for &part_count in PART_COUNTS {
                let params = GenerationBenchParams {
                    size,
                    part_count,
                    strategy,
                    seed: SEED,
                };
                let generator = params.generator()?;

                group.bench_with_input(
                    BenchmarkId::from_parameter(&params),
                    &generator,
                    |b, generator| {
                        b.iter(|| {
                            let mut rng = SmallRng::seed_from_u64(SEED);
                            generator.generate_with_rng(&mut rng)
                        });
                    },
                );
            }
        }
    }

    group.finish();
    Ok(())
}

fn generate(c: &mut Criterion) {
    if let Err(err) = generate_impl(c) {
        panic!("generate benchmark setup failed: {err}");
    }
}

criterion_group!(benches, generate);
criterion_main!(benches);
