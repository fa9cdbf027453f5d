//! Visualization of simulated release curves
//!
//! Rendering uses the `plotters` library and is compiled in with the `plot`
//! feature (on by default). Without it every plotting entry point still checks
//! its input, then fails with
//! [`UnavailableError::PlottingBackend`](crate::error::UnavailableError).
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use drux::models::HiguchiModel;
//! use drux::output::visualization::PlotConfig;
//! use drux::solver::ReleaseSimulation;
//!
//! let mut simulation = ReleaseSimulation::new(HiguchiModel::new(1e-6, 1.5, 0.5, 1.0));
//! simulation.simulate(1000.0, 10.0)?;
//!
//! // Release curve with default config
//! let plot = simulation.plot("higuchi.png", None)?;
//!
//! // Release rate, custom title
//! let config = PlotConfig::release_rate("Higuchi release rate");
//! simulation.plot_release_rate("higuchi_rate.svg", Some(&config))?;
//! ```

pub mod config;
#[cfg(feature = "plot")]
mod profile;

pub use config::{PlotConfig, Rgb, BLUE, NO_TITLE, RED, WHITE};

use std::path::{Path, PathBuf};

use crate::error::{DataError, ReleaseError};
use crate::physics::ReleaseModel;
use crate::solver::ReleaseSimulation;

/// Image format of a rendered plot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotFormat {
    Png,
    Svg,
}

impl PlotFormat {
    /// Format implied by the file extension (`.svg`, anything else is PNG)
    pub fn from_path(path: &str) -> Self {
        match Path::new(path).extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => PlotFormat::Svg,
            _ => PlotFormat::Png,
        }
    }
}

/// Handle to a rendered figure
#[derive(Clone, Debug, PartialEq)]
pub struct ReleasePlot {
    /// File the figure was written to
    pub output_path: PathBuf,

    /// Image format
    pub format: PlotFormat,

    /// Extent of the time axis
    pub time_range: (f64, f64),

    /// Extent of the value axis
    pub value_range: (f64, f64),

    /// Number of plotted points
    pub points: usize,
}

/// Reject series that cannot make a curve
fn check_series(time_points: &[f64], values: &[f64]) -> Result<(), DataError> {
    if time_points.len() != values.len() {
        return Err(DataError::MisalignedProfile {
            time_points: time_points.len(),
            release: values.len(),
        });
    }
    if values.len() < 2 {
        return Err(DataError::ReleaseProfileTooShort);
    }
    Ok(())
}

#[cfg(feature = "plot")]
fn render(
    time_points: &[f64],
    values: &[f64],
    output_path: &str,
    config: &PlotConfig,
) -> Result<ReleasePlot, ReleaseError> {
    profile::render_curve(time_points, values, output_path, config)
}

#[cfg(not(feature = "plot"))]
fn render(
    _time_points: &[f64],
    _values: &[f64],
    _output_path: &str,
    _config: &PlotConfig,
) -> Result<ReleasePlot, ReleaseError> {
    Err(crate::error::UnavailableError::PlottingBackend.into())
}

/// Plot a release curve (release vs time)
///
/// # Errors
///
/// - `DataError` when the series differ in length or hold fewer than two points
/// - `UnavailableError` without the `plot` feature
/// - `ReleaseError::Render` when the backend cannot write `output_path`
pub fn plot_release_profile(
    time_points: &[f64],
    release: &[f64],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<ReleasePlot, ReleaseError> {
    check_series(time_points, release)?;

    let default_config = PlotConfig::release_profile(NO_TITLE);
    render(time_points, release, output_path, config.unwrap_or(&default_config))
}

/// Plot a release-rate curve (dM/dt vs time)
///
/// Same errors as [`plot_release_profile`].
pub fn plot_release_rate(
    time_points: &[f64],
    rate: &[f64],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<ReleasePlot, ReleaseError> {
    check_series(time_points, rate)?;

    let default_config = PlotConfig::release_rate(NO_TITLE);
    render(time_points, rate, output_path, config.unwrap_or(&default_config))
}

impl<M: ReleaseModel> ReleaseSimulation<M> {
    /// Plot the stored release curve
    ///
    /// # Errors
    ///
    /// `StateError` before any simulation, then the errors of
    /// [`plot_release_profile`].
    pub fn plot(&self, output_path: &str, config: Option<&PlotConfig>) -> Result<ReleasePlot, ReleaseError> {
        let profile = self.profile()?;

        let default_config = PlotConfig::release_profile(self.model().name());
        plot_release_profile(
            profile.time_points().as_slice(),
            profile.release().as_slice(),
            output_path,
            Some(config.unwrap_or(&default_config)),
        )
    }

    /// Plot the release rate derived from the stored curve
    pub fn plot_release_rate(
        &self,
        output_path: &str,
        config: Option<&PlotConfig>,
    ) -> Result<ReleasePlot, ReleaseError> {
        let profile = self.profile()?;
        let rate = self.release_rate()?;

        plot_release_rate(
            profile.time_points().as_slice(),
            rate.as_slice(),
            output_path,
            config,
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
