//! CSV export of simulated release curves
//!
//! CSV is readable by spreadsheets, pandas, MATLAB and most analysis tools.
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,ignore
//! use drux::output::export::export_release_csv;
//!
//! let time = vec![0.0, 10.0, 20.0];
//! let release = vec![0.0, 0.05, 0.07];
//!
//! export_release_csv(&time, &release, "release.csv", None)?;
//! ```
//!
//! **Output** (`release.csv`):
//! ```csv
//! Time (s),Release
//! 0.000000,0.000000
//! 10.000000,0.050000
//! 20.000000,0.070000
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use drux::output::export::{export_release_csv, CsvConfig, CsvMetadata};
//!
//! let mut metadata = CsvMetadata::from_simulation("Higuchi", 1000.0, 10.0, 101);
//! metadata.add_parameter("D (cm^2/s)", 1e-6);
//!
//! let config = CsvConfig::default().with_metadata(metadata);
//! export_release_csv(&time, &release, "release.csv", Some(&config))?;
//! ```
//!
//! **Output**:
//! ```csv
//! # Drug Release Simulation Data
//! # Generated: 2026-02-11T15:30:00+00:00
//! # Model: Higuchi
//! # Duration: 1000 s
//! # Time Step: 10 s
//! # Points: 101
//! # D (cm^2/s): 0.000001
//! #
//! Time (s),Release
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};

use thiserror::Error;

use super::{sample_indices, Exporter};
use crate::error::DataError;
use crate::solver::ReleaseProfile;

// =============================================================================
// Errors
// =============================================================================

/// Failure of a CSV export
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("Empty data: time and value series must not be empty")]
    EmptyData,

    #[error("Data length mismatch: {time_points} time points versus {values} values in '{series}'")]
    LengthMismatch {
        series: String,
        time_points: usize,
        values: usize,
    },

    #[error("Column count mismatch: {series} value series versus {names} names")]
    ColumnMismatch { series: usize, names: usize },

    #[error("Invalid data: NaN or Inf detected in '{0}'")]
    NonFinite(String),

    #[error(transparent)]
    Profile(#[from] DataError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use drux::output::export::CsvConfig;
///
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 10,
///     ..Default::default()
/// };
/// assert_eq!(config.decimal_separator, '.');
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Header of the time column (default: "Time (s)")
    pub time_header: String,

    /// Header of the release column (default: "Release")
    pub release_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            time_header: "Time (s)".to_string(),
            release_header: "Release".to_string(),
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// High precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only fields that are set end up in the header.
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    /// Model name (e.g., "Higuchi")
    pub model_name: Option<String>,

    /// Simulated duration (seconds)
    pub duration: Option<f64>,

    /// Time step (seconds)
    pub time_step: Option<f64>,

    /// Number of exported grid points
    pub points: Option<usize>,

    /// Model parameters as (label, value)
    pub parameters: Vec<(String, f64)>,

    /// Additional free-form entries
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Metadata describing a simulation run
    pub fn from_simulation(model: &str, duration: f64, time_step: f64, points: usize) -> Self {
        Self {
            model_name: Some(model.to_string()),
            duration: Some(duration),
            time_step: Some(time_step),
            points: Some(points),
            ..Default::default()
        }
    }

    /// Add a model parameter
    pub fn add_parameter(&mut self, label: &str, value: f64) {
        self.parameters.push((label.to_string(), value));
    }

    /// Add custom entry
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments
fn write_metadata_header<W: Write>(out: &mut W, metadata: &CsvMetadata) -> Result<(), CsvError> {
    writeln!(out, "# Drug Release Simulation Data")?;
    writeln!(out, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(model) = &metadata.model_name {
        writeln!(out, "# Model: {}", model)?;
    }
    if let Some(duration) = metadata.duration {
        writeln!(out, "# Duration: {} s", duration)?;
    }
    if let Some(time_step) = metadata.time_step {
        writeln!(out, "# Time Step: {} s", time_step)?;
    }
    if let Some(points) = metadata.points {
        writeln!(out, "# Points: {}", points)?;
    }

    for (label, value) in &metadata.parameters {
        writeln!(out, "# {}: {}", label, value)?;
    }
    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")?;
    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

/// Write one header line and the data rows
fn write_table<W: Write>(
    out: &mut W,
    time_serie: &[f64],
    columns: &[&[f64]],
    headers: &[&str],
    configuration: &CsvConfig,
) -> Result<(), CsvError> {
    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(out, metadata)?;
        }
    }

    write!(out, "{}", configuration.time_header)?;
    for header in headers {
        write!(out, "{}{}", configuration.delimiter, header)?;
    }
    writeln!(out)?;

    for (i, time) in time_serie.iter().enumerate() {
        write!(out, "{}", format_number(*time, configuration))?;
        for column in columns {
            write!(
                out,
                "{}{}",
                configuration.delimiter,
                format_number(column[i], configuration)
            )?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Check emptiness, lengths and finiteness of the series
fn validate_series(time_serie: &[f64], columns: &[&[f64]], names: &[&str]) -> Result<(), CsvError> {
    if time_serie.is_empty() || columns.is_empty() {
        return Err(CsvError::EmptyData);
    }
    if columns.len() != names.len() {
        return Err(CsvError::ColumnMismatch {
            series: columns.len(),
            names: names.len(),
        });
    }
    if time_serie.iter().any(|t| !t.is_finite()) {
        return Err(CsvError::NonFinite("time".to_string()));
    }

    for (column, name) in columns.iter().zip(names) {
        if column.len() != time_serie.len() {
            return Err(CsvError::LengthMismatch {
                series: name.to_string(),
                time_points: time_serie.len(),
                values: column.len(),
            });
        }
        if column.iter().any(|v| !v.is_finite()) {
            return Err(CsvError::NonFinite(name.to_string()));
        }
    }

    Ok(())
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export a release curve to CSV
///
/// Writes a time column and a release column, with an optional metadata
/// header.
///
/// # Errors
///
/// - Empty data
/// - Mismatched lengths
/// - NaN or Inf values
/// - File creation errors
pub fn export_release_csv(
    time_serie: &[f64],
    release_serie: &[f64],
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let header = configuration.release_header.as_str();
    export_release_multi_csv(time_serie, &[release_serie], &[header], output_path, Some(configuration))
}

/// Export several curves sharing one time grid (e.g. release and rate)
///
/// One column per series, headed by the matching entry of `names`.
pub fn export_release_multi_csv(
    time_serie: &[f64],
    series: &[&[f64]],
    names: &[&str],
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    validate_series(time_serie, series, names)?;

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let mut out = BufWriter::new(File::create(output_path)?);
    write_table(&mut out, time_serie, series, names, configuration)?;
    out.flush()?;

    log::debug!("Exported {} rows to {}", time_serie.len(), output_path);
    Ok(())
}

// =============================================================================
// Exporter implementation
// =============================================================================

/// [`Exporter`] writing CSV files
#[derive(Clone, Debug, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export_profile(
        &self,
        profile: &ReleaseProfile,
        n_points: Option<usize>,
        path: &str,
    ) -> Result<(), CsvError> {
        let indices = sample_indices(profile.len(), n_points);
        let time = pick(profile.time_points().as_slice(), &indices);
        let release = pick(profile.release().as_slice(), &indices);

        export_release_csv(&time, &release, path, Some(&self.config))
    }

    fn export_profile_with_rate(
        &self,
        profile: &ReleaseProfile,
        n_points: Option<usize>,
        path: &str,
    ) -> Result<(), CsvError> {
        // Rate is taken on the full grid, then sampled like the release
        let rate = profile.release_rate()?;

        let indices = sample_indices(profile.len(), n_points);
        let time = pick(profile.time_points().as_slice(), &indices);
        let release = pick(profile.release().as_slice(), &indices);
        let rate = pick(rate.as_slice(), &indices);

        let release_header = self.config.release_header.as_str();
        export_release_multi_csv(
            &time,
            &[&release[..], &rate[..]],
            &[release_header, "Release rate"],
            path,
            Some(&self.config),
        )
    }
}

fn pick(values: &[f64], indices: &[usize]) -> Vec<f64> {
    indices.iter().map(|&i| values[i]).collect()
}

// =================================================================================================
// Tests
// =================================================================================================
