//! Simulation engine
//!
//! This module turns a release law into a sampled release curve and derives
//! everything else from that curve.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Release law** (`ReleaseModel`) - WHAT is released
//!    - Parameter record and its validation
//!    - Closed-form release at time t
//!
//! 2. **Configuration** (`SimulationConfig`) - WHERE it is sampled
//!    - Duration and time step
//!    - Time grid construction
//!
//! 3. **Simulation** (`ReleaseSimulation`) - The numerics
//!    - Evaluates the law on the grid
//!    - Stores the profile
//!    - Derives the release rate and the time to reach a target
//!
//! # Module Organization
//!
//! - **`config`**: `SimulationConfig`, default time step, time grid
//! - **`gradient`**: numerical derivative on (possibly non-uniform) grids
//! - **`simulation`**: `ReleaseSimulation`, `SimulationState`, `ReleaseProfile`
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────────┐
//! │  Release Model  │  (parameters + formula)
//! └────────┬────────┘
//!          │
//! ┌────────▼─────────────┐
//! │ ReleaseSimulation    │ ← simulate(duration, time_step)
//! └────────┬─────────────┘
//!          │
//! ┌────────▼────────────┐
//! │ ReleaseProfile      │ ← grid + release values
//! └──┬───────┬───────┬──┘
//!    │       │       │
//!  rate   inverse  plot / export
//! ```
//!
//! # Error Handling
//!
//! All operations return `Result<T, ReleaseError>`:
//!
//! ```rust
//! use drux::models::ZeroOrderModel;
//! use drux::solver::ReleaseSimulation;
//!
//! let mut simulation = ReleaseSimulation::new(ZeroOrderModel::new(0.0, 0.1));
//!
//! match simulation.simulate(10.0, 20.0) {
//!     Ok(profile) => println!("{} points", profile.len()),
//!     Err(e) => eprintln!("{} ({})", e, e.kind()),
//! }
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================
mod config;
mod gradient;
mod simulation;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Release laws are cheap closed forms, so thread-pool dispatch only pays off
// on very fine grids. The threshold is an AtomicUsize so benchmarks and tests
// can move it at runtime; Relaxed ordering is enough for a performance hint.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of grid points above which evaluation switches to rayon
/// (only with the `parallel` feature).
const DEFAULT_PARALLEL_THRESHOLD: usize = 100_000;

static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// # Example
///
/// ```rust
/// use drux::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

#[cfg(test)]
static THRESHOLD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// RAII guard that sets the threshold and restores the previous value on drop.
///
/// Holds a lock for its whole lifetime so that tests moving the threshold do
/// not interleave.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl ThresholdGuard {
    pub(crate) fn save(new_value: usize) -> Self {
        let lock = THRESHOLD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous, _lock: lock }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use config::{SimulationConfig, DEFAULT_TIME_STEP};
pub use gradient::gradient;
pub use simulation::{ReleaseProfile, ReleaseSimulation, SimulationState};

// =================================================================================================
// Tests
// =================================================================================================
