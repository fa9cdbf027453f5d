//! Export of simulated release curves.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module, so a new
//! format is a new file next to [`csv`].
//!
//! # Usage example
//!
//! ```rust,ignore
//! use drux::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//! let profile = simulation.profile()?;
//!
//! // Full export (every grid point)
//! exporter.export_profile(profile, None, "higuchi.csv")?;
//!
//! // Downsampled to 50 points, with the release rate as a third column
//! exporter.export_profile_with_rate(profile, Some(50), "higuchi_light.csv")?;
//! ```

pub mod csv;

pub use csv::{
    export_release_csv, export_release_multi_csv, CsvConfig, CsvError, CsvExporter, CsvMetadata,
};

use crate::solver::ReleaseProfile;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type, so callers can
/// match on them without unboxing.
///
/// # Parameter `n_points`
///
/// - `None`: exports every grid point
/// - `Some(n)`: uniformly downsamples to `n` points, always keeping the
///   **first and last** points (start of release and final release)
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Exports the release curve: `time` and `release` columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is invalid or the directory does not exist.
    fn export_profile(
        &self,
        profile: &ReleaseProfile,
        n_points: Option<usize>,
        path: &str,
    ) -> Result<(), Self::Error>;

    /// Exports the release curve plus its release rate as a third column.
    ///
    /// The rate is computed on the full grid before downsampling.
    ///
    /// # Errors
    ///
    /// Same as [`export_profile`](Exporter::export_profile), plus a failure
    /// when the profile is too short to differentiate.
    fn export_profile_with_rate(
        &self,
        profile: &ReleaseProfile,
        n_points: Option<usize>,
        path: &str,
    ) -> Result<(), Self::Error>;
}

/// Indices of a uniform subsample of `len` points
///
/// Keeps index 0 and index `len - 1`. `None`, or a request at least as large
/// as `len`, keeps every index. A request for fewer than two points still
/// yields both ends.
pub(crate) fn sample_indices(len: usize, n_points: Option<usize>) -> Vec<usize> {
    let n = match n_points {
        Some(n) if n < len => n.max(2),
        _ => return (0..len).collect(),
    };
    if n >= len {
        return (0..len).collect();
    }

    log::debug!("Downsampling {} points to {}", len, n);

    let last = len - 1;
    let mut indices: Vec<usize> = (0..n)
        .map(|k| ((k as f64) * (last as f64) / ((n - 1) as f64)).round() as usize)
        .collect();
    indices.dedup();
    indices
}

// =================================================================================================
// Tests
// =================================================================================================
