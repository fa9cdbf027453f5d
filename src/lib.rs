//! drux: Drug Release Kinetics
//!
//! Simulates how much drug a delivery system releases over time, for two
//! closed-form release laws:
//!
//! - **Higuchi**: diffusion-controlled release from a film
//! - **Zero-order**: release at a constant rate
//!
//! # Architecture
//!
//! 1. **Separation of law and numerics**
//!    - Release models define the formula (what is released)
//!    - The simulation samples it on a time grid and derives rate and
//!      inverse lookups from the stored samples
//!
//! 2. **Extensibility and Type Safety**
//!    - New laws implement [`ReleaseModel`](physics::ReleaseModel)
//!    - Typed errors for every failure family ([`error::ReleaseError`])
//!    - Explicit simulated / unsimulated state
//!
//! # Quick Start
//!
//! ```rust
//! use drux::prelude::*;
//!
//! # fn main() -> Result<(), ReleaseError> {
//! // 1. Describe the film
//! let model = HiguchiModel::new(
//!     1e-6, // diffusivity (cm^2/s)
//!     1.5,  // initial drug concentration (mg/cm^3)
//!     0.5,  // solubility (mg/cm^3)
//!     1.0,  // film thickness (cm)
//! );
//!
//! // 2. Simulate 1000 s sampled every 10 s
//! let mut simulation = ReleaseSimulation::new(model);
//! let release = simulation.simulate(1000.0, 10.0)?;
//! assert_eq!(release.len(), 101);
//!
//! // 3. Derived quantities
//! let rate = simulation.release_rate()?;
//! let t_10 = simulation.time_for_release(0.01)?;
//!
//! println!("rate at end: {:.3e} /s", rate[rate.len() - 1]);
//! println!("1% released after {} s", t_10);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: the release-law contract
//! - [`models`]: Higuchi and zero-order laws
//! - [`solver`]: time grid, simulation, numerical derivative
//! - [`output`]: plots and CSV export
//! - [`error`]: error types
//!
//! # Features
//!
//! - `plot` (default): PNG/SVG rendering through plotters
//! - `parallel`: rayon evaluation of very fine grids

pub mod error;
pub mod physics;

pub mod models;
pub mod output;
pub mod solver;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use drux::prelude::*;
    //! ```
    pub use crate::error::{
        DataError, ParameterError, RangeError, ReleaseError, StateError, UnavailableError,
    };
    pub use crate::models::{HiguchiModel, HiguchiParameters, ZeroOrderModel, ZeroOrderParameters};
    pub use crate::output::{PlotConfig, ReleasePlot};
    pub use crate::physics::{ReleaseDomain, ReleaseModel};
    pub use crate::solver::{ReleaseProfile, ReleaseSimulation, SimulationConfig, SimulationState};
}
