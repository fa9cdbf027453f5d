//! Example: Higuchi film vs zero-order tablet
//!
//! Simulates a drug-loaded polymer film (Higuchi law) and a constant-rate
//! tablet (zero-order law), prints the key figures, then writes the curves
//! as CSV and plots into the system temp directory.
//!
//! **Film** (Higuchi):
//! - D  = 1e-6 cm²/s (diffusivity)
//! - c0 = 1.5 mg/cm³ (initial concentration)
//! - cs = 0.5 mg/cm³ (solubility)
//! - L  = 1 cm (thickness)
//!
//! **Tablet** (zero-order):
//! - M0 = 0.01 mg (already in solution)
//! - k0 = 0.1 mg/s
//!
//! Run with `cargo run --example higuchi_film`.

use drux::{
    models::{HiguchiModel, ZeroOrderModel},
    output::export::{CsvConfig, CsvExporter, CsvMetadata, Exporter},
    output::PlotConfig,
    physics::ReleaseModel,
    solver::{ReleaseSimulation, SimulationConfig},
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  drux {} - Higuchi film vs zero-order tablet", drux::VERSION);
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Simulation configuration ======

    let config = SimulationConfig::new(1000.0).with_time_step(10.0);
    println!("Simulation:");
    println!("  Duration  : {} s", config.duration);
    println!("  Time step : {} s\n", config.time_step);

    let tmp_dir = std::env::temp_dir();

    // ====== Higuchi film ======

    let film = HiguchiModel::new(1e-6, 1.5, 0.5, 1.0);
    println!("{} ({:?} regime)", film.name(), film.regime());
    if let Some(description) = film.description() {
        println!("  {}", description);
    }

    let mut film_simulation = ReleaseSimulation::new(film);

    let start = Instant::now();
    let release = film_simulation.simulate_with(&config)?;
    let elapsed = start.elapsed();

    let final_release = release[release.len() - 1];
    let t_half = film_simulation.time_for_release(final_release / 2.0)?;
    let rate = film_simulation.release_rate()?;

    println!("  Points         : {}", release.len());
    println!("  Final release  : {:.6}", final_release);
    println!("  Half of final  : reached at {} s", t_half);
    println!("  Rate at 1000 s : {:.3e} /s", rate[rate.len() - 1]);
    println!("  Computed in    : {:?}\n", elapsed);

    // ====== Zero-order tablet ======

    let mut tablet_simulation = ReleaseSimulation::new(ZeroOrderModel::new(0.01, 0.1));
    tablet_simulation.simulate_with(&config)?;

    let tablet_rate = tablet_simulation.release_rate()?;
    println!("{}", tablet_simulation.model().name());
    println!("  Rate           : {:.4} mg/s", tablet_rate[0]);
    println!("  50 mg reached  : {} s", tablet_simulation.time_for_release(50.0)?);

    match tablet_simulation.time_for_release(500.0) {
        Ok(t) => println!("  500 mg reached : {} s\n", t),
        Err(e) => println!("  500 mg         : {} ({})\n", e, e.kind()),
    }

    // ====== Export ======

    let params = film_simulation.model().params();
    let mut metadata = CsvMetadata::from_simulation(
        film_simulation.model().name(),
        config.duration,
        config.time_step,
        release.len(),
    );
    metadata.add_parameter("D (cm^2/s)", params.diffusivity);
    metadata.add_parameter("c0 (mg/cm^3)", params.initial_concentration);
    metadata.add_parameter("cs (mg/cm^3)", params.solubility);
    metadata.add_parameter("L (cm)", params.thickness);

    let exporter = CsvExporter::new(CsvConfig::default().with_metadata(metadata));
    let csv_path = tmp_dir.join("higuchi_film.csv");
    exporter.export_profile_with_rate(film_simulation.profile()?, None, &csv_path.to_string_lossy())?;
    println!("CSV written to {}", csv_path.display());

    // ====== Plots ======

    let profile_path = tmp_dir.join("higuchi_film.png");
    match film_simulation.plot(&profile_path.to_string_lossy(), None) {
        Ok(plot) => println!("Release plot written to {}", plot.output_path.display()),
        Err(e) => println!("Release plot skipped: {}", e),
    }

    let rate_config = PlotConfig::release_rate("Higuchi film - release rate");
    let rate_path = tmp_dir.join("higuchi_film_rate.svg");
    match film_simulation.plot_release_rate(&rate_path.to_string_lossy(), Some(&rate_config)) {
        Ok(plot) => println!("Rate plot written to {}", plot.output_path.display()),
        Err(e) => println!("Rate plot skipped: {}", e),
    }

    Ok(())
}
