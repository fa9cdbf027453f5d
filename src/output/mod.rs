//! Output of simulated release curves
//!
//! - **Visualization**: PNG/SVG plots using plotters (`plot` feature)
//! - **Export**: CSV files for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── profile.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ## Visualization
//!
//! ```rust,ignore
//! use drux::output::visualization::plot_release_profile;
//!
//! plot_release_profile(&time, &release, "release.png", None)?;
//! ```
//!
//! ## CSV Export
//!
//! ```rust,ignore
//! use drux::output::export::export_release_csv;
//!
//! export_release_csv(&time, &release, "release.csv", None)?;
//! ```
//!
//! Both sub-modules accept plain `&[f64]` slices, and the simulation exposes
//! `plot` / `plot_release_rate` on top of them.

pub mod export;
pub mod visualization;

pub use visualization::{plot_release_profile, plot_release_rate, PlotConfig, PlotFormat, ReleasePlot};

pub use export::{export_release_csv, export_release_multi_csv, CsvConfig, CsvExporter, Exporter};
