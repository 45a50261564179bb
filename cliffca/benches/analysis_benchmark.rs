use cliffca::distance::support_distance;
use cliffca::{analyze, AnalysisOptions, LatticeState, PauliSymbol, RuleMatrix};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::prelude::*;

pub fn analyze_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("analyze");
    group.sample_size(10);
    let rule = RuleMatrix::glider();
    let options = AnalysisOptions::default();
    for size in [8usize, 16usize, 32usize] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, &size| {
            bencher.iter_batched(
                || random_state(size),
                |state| analyze(&rule, &state, size, &options),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

pub fn support_distance_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("support_distance");
    group.sample_size(10);
    for size in [12usize, 24usize, 48usize] {
        // Y on sites 0..=2 leaves k = 2 whenever 3 divides the size
        let state = LatticeState::with_symbols(size, PauliSymbol::Y, 0..3);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, &size| {
            bencher.iter(|| support_distance(&state, size));
        });
    }
    group.finish();
}

fn random_state(size: usize) -> LatticeState {
    let mut random_number_generator = thread_rng();
    let symbols = [PauliSymbol::I, PauliSymbol::X, PauliSymbol::Z, PauliSymbol::Y];
    (0..size)
        .map(|_| symbols[random_number_generator.gen_range(0..symbols.len())])
        .collect()
}

criterion_group!(benches, analyze_benchmark, support_distance_benchmark);
criterion_main!(benches);
