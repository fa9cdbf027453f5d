//! Performance benchmarks for release simulations
//!
//! # What We're Measuring
//!
//! 1. **Simulation**: evaluating a closed-form law on the time grid
//!    - One evaluation per grid point
//!    - Time should scale linearly with the number of points
//!
//! 2. **Release rate**: numerical derivative of a stored profile
//!
//! 3. **Sequential vs parallel**: the same fine grid below and above the
//!    parallel threshold (only meaningful with `--features parallel`)
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench simulation_performance
//!
//! # Only the simulation group
//! cargo bench --bench simulation_performance simulate
//!
//! # With rayon
//! cargo bench --bench simulation_performance --features parallel
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use drux::models::{HiguchiModel, ZeroOrderModel};
use drux::solver::{parallel_threshold, set_parallel_threshold, ReleaseSimulation, SimulationConfig};

/// Grid sizes: duration 1000 s with 10³ to 10⁶ intervals
const GRID_SIZES: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];

fn config_for(points: usize) -> SimulationConfig {
    SimulationConfig::new(1000.0).with_time_step(1000.0 / points as f64)
}

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Simulation of both laws across grid sizes
fn benchmark_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");

    for &points in GRID_SIZES.iter() {
        let config = config_for(points);
        group.throughput(Throughput::Elements(points as u64));

        group.bench_with_input(BenchmarkId::new("higuchi", points), &config, |b, config| {
            let mut simulation = ReleaseSimulation::new(HiguchiModel::new(1e-6, 1.5, 0.5, 1.0));
            b.iter(|| simulation.simulate_with(black_box(config)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("zero_order", points), &config, |b, config| {
            let mut simulation = ReleaseSimulation::new(ZeroOrderModel::new(0.01, 0.1));
            b.iter(|| simulation.simulate_with(black_box(config)).unwrap());
        });
    }

    group.finish();
}

/// Derivative of a stored profile
fn benchmark_release_rate(c: &mut Criterion) {
    let mut group = c.benchmark_group("release_rate");

    for &points in GRID_SIZES.iter() {
        let mut simulation = ReleaseSimulation::new(HiguchiModel::new(1e-6, 1.5, 0.5, 1.0));
        simulation.simulate_with(&config_for(points)).unwrap();

        group.throughput(Throughput::Elements(points as u64));
        group.bench_with_input(BenchmarkId::from_parameter(points), &simulation, |b, simulation| {
            b.iter(|| black_box(simulation).release_rate().unwrap());
        });
    }

    group.finish();
}

/// Same fine grid evaluated sequentially, then with the threshold lowered
fn benchmark_parallel_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_threshold");
    let config = config_for(1_000_000);
    let original = parallel_threshold();

    for (label, threshold) in [("sequential", usize::MAX), ("parallel", 1)] {
        set_parallel_threshold(threshold);

        group.bench_function(label, |b| {
            let mut simulation = ReleaseSimulation::new(HiguchiModel::new(1e-6, 1.5, 0.5, 1.0));
            b.iter(|| simulation.simulate_with(black_box(&config)).unwrap());
        });
    }

    set_parallel_threshold(original);
    group.finish();
}

criterion_group!(
    benches,
    benchmark_simulate,
    benchmark_release_rate,
    benchmark_parallel_threshold
);
criterion_main!(benches);
