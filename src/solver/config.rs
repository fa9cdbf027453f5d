//! Simulation configuration and time discretization

use nalgebra::DVector;

use crate::error::RangeError;

/// Time step used when the caller does not pick one (seconds)
pub const DEFAULT_TIME_STEP: f64 = 1.0;

/// Multiple of `f64::EPSILON` (relative to `duration`) within which a whole
/// number of steps is taken to land exactly on `duration`
///
/// Keeps `0.3 / 0.1 = 2.9999999999999996` from growing a spurious extra point.
const GRID_ULPS: f64 = 4.0;

/// Configuration of one simulation run
///
/// # Example
///
/// ```rust
/// use drux::solver::SimulationConfig;
///
/// let config = SimulationConfig::new(1000.0).with_time_step(10.0);
/// let grid = config.time_grid().unwrap();
///
/// assert_eq!(grid.len(), 101);
/// assert_eq!(grid[100], 1000.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Simulated horizon (seconds)
    pub duration: f64,

    /// Spacing of the time grid (seconds)
    pub time_step: f64,
}

impl SimulationConfig {
    /// Configuration with the default time step
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            time_step: DEFAULT_TIME_STEP,
        }
    }

    /// Builder pattern: set time step
    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    /// Validate that duration and step describe a usable grid
    pub fn validate(&self) -> Result<(), RangeError> {
        let positive = |x: f64| x > 0.0 && x.is_finite();

        if !positive(self.duration) || !positive(self.time_step) {
            return Err(RangeError::DurationTimeStepNotPositive);
        }
        if self.time_step > self.duration {
            return Err(RangeError::TimeStepGreaterThanDuration);
        }
        Ok(())
    }

    /// Number of points of the time grid
    ///
    /// The grid covers `[0, duration]` and its last point is the smallest
    /// multiple of `time_step` that is at least `duration`.
    pub fn grid_len(&self) -> Result<usize, RangeError> {
        self.validate()?;

        let ratio = self.duration / self.time_step;
        let nearest = ratio.round();
        let lands_on_duration =
            (nearest * self.time_step - self.duration).abs() <= GRID_ULPS * f64::EPSILON * self.duration;
        let intervals = if lands_on_duration { nearest } else { ratio.ceil() };

        // `usize::MAX as f64` rounds up to 2^64, so `<` keeps the cast in range
        if !(intervals < usize::MAX as f64) {
            return Err(RangeError::TimeGridTooLarge);
        }

        (intervals as usize)
            .checked_add(1)
            .ok_or(RangeError::TimeGridTooLarge)
    }

    /// Build the time grid `[0, step, 2·step, ...]`
    ///
    /// Points are computed as `i * time_step` rather than accumulated, so the
    /// grid carries no drift.
    pub fn time_grid(&self) -> Result<DVector<f64>, RangeError> {
        let n = self.grid_len()?;
        let step = self.time_step;
        Ok(DVector::from_fn(n, |i, _| i as f64 * step))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
