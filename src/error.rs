//! Error taxonomy
//!
//! Every fallible operation of the crate returns [`ReleaseError`]. The enum has
//! one variant per failure class, and each class wraps a cause enum carrying
//! the precise reason:
//!
//! | Class | Cause enum | Raised by |
//! |-------|------------|-----------|
//! | Range | [`RangeError`] | `simulate`, `time_for_release` |
//! | Parameter | [`ParameterError`] | `simulate` (through `validate`) |
//! | State | [`StateError`] | `release_rate`, `time_for_release`, `plot` |
//! | Data | [`DataError`] | `release_rate`, `plot` |
//! | Unavailable | [`UnavailableError`] | `plot` without the `plot` feature |
//!
//! Messages are fixed strings so that callers matching on the rendered text
//! keep working.

use thiserror::Error;

/// A numeric argument lies outside its valid domain
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    /// Duration or time step is zero, negative, NaN or infinite
    #[error("Duration and time step must be positive values")]
    DurationTimeStepNotPositive,

    /// The time step does not fit inside the simulated duration
    #[error("Time step cannot be greater than duration")]
    TimeStepGreaterThanDuration,

    /// `duration / time_step` gives more points than a grid can hold
    #[error("Time grid is too large: duration / time step exceeds the number of representable points")]
    TimeGridTooLarge,

    /// Target outside `[0, 1]` for a fractional release law
    #[error("Target release must be between 0 and 1.")]
    TargetReleaseOutsideFraction,

    /// Negative target for an absolute-amount release law
    #[error("Target release must be non-negative.")]
    TargetReleaseNegative,

    /// Target above the release achieved at the end of the simulated horizon
    #[error("Target release exceeds maximum release of the simulated duration.")]
    TargetReleaseExceedsMaximum,
}

/// A physical constant violates a law-specific constraint
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("Diffusivity (D) must be positive.")]
    NonPositiveDiffusivity,

    #[error("Initial drug concentration (c0) must be positive.")]
    NonPositiveConcentration,

    #[error("Solubility (cs) must be positive.")]
    NonPositiveSolubility,

    #[error("Film thickness (L) must be positive.")]
    NonPositiveThickness,

    #[error("Solubility (cs) must be lower or equal to initial concentration (c0).")]
    SolubilityExceedsConcentration,

    #[error("Initial amount of drug in the solution (M0) must be non-negative.")]
    NegativeInitialAmount,

    #[error("Release rate (k0) must be non-negative.")]
    NegativeReleaseRate,
}

/// An operation needs a simulation that has not been run
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StateError {
    #[error("No simulation data available. Run simulate() first.")]
    NoSimulationData,
}

/// Stored data exists but cannot support the requested computation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("Release profile is too short to calculate release rate.")]
    ReleaseProfileTooShort,

    #[error("Time grid and release profile must have the same length ({time_points} vs {release})")]
    MisalignedProfile { time_points: usize, release: usize },
}

/// An optional collaborator was not compiled in
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnavailableError {
    #[error("Plotting backend is required for plotting but not enabled (build with the `plot` feature).")]
    PlottingBackend,
}

/// Crate-level error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReleaseError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Unavailable(#[from] UnavailableError),

    /// The plotting backend failed while drawing or writing the figure
    #[error("Failed to render plot: {0}")]
    Render(String),
}

impl ReleaseError {
    /// Short label of the failure class
    pub fn kind(&self) -> &'static str {
        match self {
            ReleaseError::Range(_) => "RangeError",
            ReleaseError::Parameter(_) => "ParameterError",
            ReleaseError::State(_) => "StateError",
            ReleaseError::Data(_) => "DataError",
            ReleaseError::Unavailable(_) => "UnavailableError",
            ReleaseError::Render(_) => "RenderError",
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
