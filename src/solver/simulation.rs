//! Simulation of a release law over a time grid
//!
//! [`ReleaseSimulation`] owns one release law and the result of its last
//! simulation. Every derived quantity (rate, inverse lookup, plot, export) is
//! computed from that stored result only: the law is never evaluated again
//! outside of `simulate`.

use nalgebra::DVector;

use crate::error::{DataError, RangeError, ReleaseError, StateError};
use crate::physics::ReleaseModel;
use crate::solver::config::SimulationConfig;
use crate::solver::gradient::gradient;
use crate::solver::parallel_threshold;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// =================================================================================================
// Release profile
// =================================================================================================

/// Time grid and release values of one simulation, index-aligned
///
/// `release()[i]` is the release evaluated at `time_points()[i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ReleaseProfile {
    time_points: DVector<f64>,
    release: DVector<f64>,
}

impl ReleaseProfile {
    /// Pair a grid with its release values
    pub fn new(time_points: DVector<f64>, release: DVector<f64>) -> Result<Self, DataError> {
        if time_points.len() != release.len() {
            return Err(DataError::MisalignedProfile {
                time_points: time_points.len(),
                release: release.len(),
            });
        }
        Ok(Self { time_points, release })
    }

    /// Time grid (seconds)
    pub fn time_points(&self) -> &DVector<f64> {
        &self.time_points
    }

    /// Release value at each grid point
    pub fn release(&self) -> &DVector<f64> {
        &self.release
    }

    /// Number of grid points
    pub fn len(&self) -> usize {
        self.release.len()
    }

    /// True when the profile holds no point
    pub fn is_empty(&self) -> bool {
        self.release.is_empty()
    }

    /// Release reached at the end of the simulated horizon
    pub fn final_release(&self) -> Option<f64> {
        self.release.as_slice().last().copied()
    }

    /// Numerical derivative of the release with respect to time
    pub fn release_rate(&self) -> Result<DVector<f64>, DataError> {
        gradient(&self.release, &self.time_points)
    }

    /// Earliest grid time whose release is at least `target`
    ///
    /// No interpolation happens between the two bracketing points. The caller
    /// is expected to have checked `target` against the law's domain.
    pub fn first_time_reaching(&self, target: f64) -> Result<f64, RangeError> {
        let maximum = self
            .final_release()
            .ok_or(RangeError::TargetReleaseExceedsMaximum)?;

        if target > maximum {
            return Err(RangeError::TargetReleaseExceedsMaximum);
        }

        self.release
            .iter()
            .position(|&r| r >= target)
            .map(|index| self.time_points[index])
            .ok_or(RangeError::TargetReleaseExceedsMaximum)
    }
}

// =================================================================================================
// Simulation state
// =================================================================================================

/// Whether a simulation result is available
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SimulationState {
    /// `simulate` has not succeeded yet
    #[default]
    Unsimulated,

    /// Result of the last successful `simulate`
    Simulated(ReleaseProfile),
}

impl SimulationState {
    /// Stored profile, or the state error every derived query reports
    pub fn profile(&self) -> Result<&ReleaseProfile, StateError> {
        match self {
            SimulationState::Unsimulated => Err(StateError::NoSimulationData),
            SimulationState::Simulated(profile) => Ok(profile),
        }
    }
}

// =================================================================================================
// Release simulation
// =================================================================================================

/// A release law together with its last simulated profile
///
/// # Concurrency
///
/// `simulate` takes `&mut self` and replaces the stored profile wholesale;
/// queries take `&self`. Any number of queries may run at once, never
/// alongside a `simulate` on the same instance. Use one instance per logical
/// computation.
///
/// # Example
///
/// ```rust
/// use drux::models::ZeroOrderModel;
/// use drux::solver::ReleaseSimulation;
///
/// let mut simulation = ReleaseSimulation::new(ZeroOrderModel::new(0.01, 0.1));
/// simulation.simulate(1000.0, 10.0)?;
///
/// let rate = simulation.release_rate()?;
/// assert!(rate.iter().all(|r| (r - 0.1).abs() < 1e-9));
///
/// let t_half = simulation.time_for_release(50.0)?;
/// assert_eq!(t_half, 500.0);
/// # Ok::<(), drux::error::ReleaseError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ReleaseSimulation<M: ReleaseModel> {
    model: M,
    state: SimulationState,
}

impl<M: ReleaseModel> ReleaseSimulation<M> {
    /// Wrap a model; no simulation data until `simulate` succeeds
    ///
    /// Parameters are not validated here.
    pub fn new(model: M) -> Self {
        Self {
            model,
            state: SimulationState::Unsimulated,
        }
    }

    /// Release law
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Give back the release law, dropping any result
    pub fn into_model(self) -> M {
        self.model
    }

    /// Current state
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// True once a simulation succeeded
    pub fn is_simulated(&self) -> bool {
        matches!(self.state, SimulationState::Simulated(_))
    }

    /// Stored profile
    pub fn profile(&self) -> Result<&ReleaseProfile, ReleaseError> {
        Ok(self.state.profile()?)
    }

    /// Time grid of the last simulation
    pub fn time_points(&self) -> Option<&DVector<f64>> {
        self.state.profile().ok().map(ReleaseProfile::time_points)
    }

    /// Release values of the last simulation
    pub fn release_profile(&self) -> Option<&DVector<f64>> {
        self.state.profile().ok().map(ReleaseProfile::release)
    }

    /// Simulate the release over `[0, duration]` sampled every `time_step`
    ///
    /// # Steps
    ///
    /// 1. Check duration and step (`RangeError`)
    /// 2. Build the time grid
    /// 3. Validate the model parameters (`ParameterError`)
    /// 4. Evaluate the law at every grid point, in grid order
    /// 5. Replace the stored profile and return the release values
    ///
    /// On failure the previously stored profile, if any, is kept untouched.
    pub fn simulate(&mut self, duration: f64, time_step: f64) -> Result<DVector<f64>, ReleaseError> {
        self.simulate_with(&SimulationConfig::new(duration).with_time_step(time_step))
    }

    /// Simulate with an explicit configuration
    pub fn simulate_with(&mut self, config: &SimulationConfig) -> Result<DVector<f64>, ReleaseError> {
        let time_points = config.time_grid()?;

        if let Err(e) = self.model.validate() {
            log::warn!("{} rejected its parameters: {e}", self.model.name());
            return Err(e.into());
        }

        let release = evaluate_profile(&self.model, &time_points);

        log::debug!(
            "{}: simulated {} points over {} s (step {} s)",
            self.model.name(),
            release.len(),
            config.duration,
            config.time_step
        );

        self.state = SimulationState::Simulated(ReleaseProfile::new(time_points, release.clone())?);
        Ok(release)
    }

    /// Instantaneous release rate at every grid point
    ///
    /// Numerical estimate from the stored profile (see [`gradient`]).
    pub fn release_rate(&self) -> Result<DVector<f64>, ReleaseError> {
        let profile = self.state.profile()?;
        log::trace!("{}: differentiating {} points", self.model.name(), profile.len());
        Ok(profile.release_rate()?)
    }

    /// Earliest simulated time at which the release reaches `target`
    ///
    /// # Errors
    ///
    /// - `StateError` without simulation data
    /// - `RangeError` when `target` is outside the law's release domain
    /// - `RangeError` when `target` is above the release reached at the end
    ///   of the simulated horizon
    pub fn time_for_release(&self, target: f64) -> Result<f64, ReleaseError> {
        let profile = self.state.profile()?;
        self.model.release_domain().check(target)?;
        Ok(profile.first_time_reaching(target)?)
    }

    /// Overwrite the stored state
    #[cfg(test)]
    pub(crate) fn force_state(&mut self, state: SimulationState) {
        self.state = state;
    }
}

/// Evaluate `model` at every point of `time_points`, preserving order
///
/// Large grids are spread over the rayon pool when the `parallel` feature is
/// enabled.
fn evaluate_profile<M: ReleaseModel + ?Sized>(model: &M, time_points: &DVector<f64>) -> DVector<f64> {
    let mut release = time_points.clone();

    if release.len() > parallel_threshold() {
        #[cfg(feature = "parallel")]
        release.as_mut_slice().par_iter_mut().for_each(|t| *t = model.evaluate_at(*t));
        #[cfg(not(feature = "parallel"))]
        release.iter_mut().for_each(|t| *t = model.evaluate_at(*t));
    } else {
        release.iter_mut().for_each(|t| *t = model.evaluate_at(*t));
    }

    release
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParameterError;
    use crate::models::{HiguchiModel, ZeroOrderModel};
    use crate::solver::ThresholdGuard;

    fn single_point_state() -> SimulationState {
        let profile = ReleaseProfile::new(
            DVector::from_vec(vec![0.0]),
            DVector::from_vec(vec![0.0]),
        )
        .unwrap();
        SimulationState::Simulated(profile)
    }

    #[test]
    fn test_new_simulation_is_unsimulated() {
        let simulation = ReleaseSimulation::new(ZeroOrderModel::new(0.01, 0.1));
        assert!(!simulation.is_simulated());
        assert!(simulation.time_points().is_none());
        assert!(simulation.release_profile().is_none());
        assert_eq!(simulation.state(), &SimulationState::Unsimulated);
    }

    #[test]
    fn test_construction_does_not_validate() {
        let simulation = ReleaseSimulation::new(HiguchiModel::new(-1.0, -1.0, -1.0, -1.0));
        assert!(!simulation.is_simulated());
    }

    #[test]
    fn test_simulate_stores_aligned_grid_and_profile() {
        let mut simulation = ReleaseSimulation::new(ZeroOrderModel::new(0.01, 0.1));
        let release = simulation.simulate(1000.0, 10.0).unwrap();

        let time_points = simulation.time_points().unwrap();
        assert_eq!(time_points.len(), release.len());
        assert_eq!(simulation.release_profile().unwrap(), &release);
        assert_eq!(release[0], simulation.model().evaluate_at(0.0));
    }

    #[test]
    fn test_failed_simulate_keeps_previous_state() {
        let mut simulation = ReleaseSimulation::new(ZeroOrderModel::new(0.01, 0.1));
        simulation.simulate(100.0, 10.0).unwrap();
        let before = simulation.state().clone();

        assert!(simulation.simulate(10.0, 20.0).is_err());
        assert_eq!(simulation.state(), &before);
    }

    #[test]
    fn test_invalid_parameters_leave_state_unset() {
        let mut simulation = ReleaseSimulation::new(ZeroOrderModel::new(-0.01, 0.1));
        let error = simulation.simulate(100.0, 10.0).unwrap_err();
        assert_eq!(error, ReleaseError::Parameter(ParameterError::NegativeInitialAmount));
        assert!(!simulation.is_simulated());
    }

    #[test]
    fn test_range_checked_before_parameters() {
        let mut simulation = ReleaseSimulation::new(ZeroOrderModel::new(-0.01, 0.1));
        let error = simulation.simulate(-1.0, 10.0).unwrap_err();
        assert_eq!(error, ReleaseError::Range(RangeError::DurationTimeStepNotPositive));
    }

    #[test]
    fn test_resimulate_replaces_profile() {
        let mut simulation = ReleaseSimulation::new(ZeroOrderModel::new(0.0, 1.0));
        simulation.simulate(100.0, 10.0).unwrap();
        simulation.simulate(10.0, 1.0).unwrap();

        let profile = simulation.profile().unwrap();
        assert_eq!(profile.len(), 11);
        assert_eq!(profile.final_release(), Some(10.0));
    }

    #[test]
    fn test_queries_require_simulation() {
        let simulation = ReleaseSimulation::new(ZeroOrderModel::new(0.01, 0.1));
        let expected = ReleaseError::State(StateError::NoSimulationData);
        assert_eq!(simulation.release_rate().unwrap_err(), expected);
        assert_eq!(simulation.time_for_release(0.5).unwrap_err(), expected);
        assert_eq!(simulation.profile().unwrap_err(), expected);
    }

    #[test]
    fn test_single_point_profile_is_too_short() {
        let mut simulation = ReleaseSimulation::new(HiguchiModel::new(1e-6, 1.5, 0.5, 1.0));
        simulation.force_state(single_point_state());
        assert_eq!(
            simulation.release_rate().unwrap_err(),
            ReleaseError::Data(DataError::ReleaseProfileTooShort)
        );
    }

    #[test]
    fn test_state_error_wins_over_domain_error() {
        let simulation = ReleaseSimulation::new(HiguchiModel::new(1e-6, 1.5, 0.5, 1.0));
        assert_eq!(
            simulation.time_for_release(-1.0).unwrap_err(),
            ReleaseError::State(StateError::NoSimulationData)
        );
    }

    #[test]
    fn test_first_time_reaching_picks_earliest_index() {
        let profile = ReleaseProfile::new(
            DVector::from_vec(vec![0.0, 1.0, 2.0, 3.0]),
            DVector::from_vec(vec![0.0, 0.5, 0.5, 1.0]),
        )
        .unwrap();
        assert_eq!(profile.first_time_reaching(0.5), Ok(1.0));
        assert_eq!(profile.first_time_reaching(0.6), Ok(3.0));
        assert_eq!(profile.first_time_reaching(0.0), Ok(0.0));
        assert_eq!(profile.first_time_reaching(1.1), Err(RangeError::TargetReleaseExceedsMaximum));
    }

    #[test]
    fn test_misaligned_profile_rejected() {
        let result = ReleaseProfile::new(
            DVector::from_vec(vec![0.0, 1.0]),
            DVector::from_vec(vec![0.0]),
        );
        assert_eq!(result, Err(DataError::MisalignedProfile { time_points: 2, release: 1 }));
    }

    #[test]
    fn test_evaluation_order_is_preserved_above_threshold() {
        let _guard = ThresholdGuard::save(8);
        let model = ZeroOrderModel::new(0.0, 2.0);
        let time_points = DVector::from_fn(100, |i, _| i as f64);

        let release = evaluate_profile(&model, &time_points);
        for (i, value) in release.iter().enumerate() {
            assert_eq!(*value, 2.0 * i as f64);
        }
    }
}
