//! Release laws for drug delivery systems
//!
//! All models implement the [`ReleaseModel`](crate::physics::ReleaseModel) trait.
//! `ReleaseSimulation` calls `validate` once per simulation and `evaluate_at`
//! once per time point: models are responsible for the physics, the simulation
//! for the discretization and the derived quantities.
//!
//! # Available Models
//!
//! ## [`HiguchiModel`]: diffusion from a polymer film
//!
//! Piecewise closed form selected by the loading ratio c0 / cs. Produces a
//! released fraction (targets in `[0, 1]`).
//!
//! ## [`ZeroOrderModel`]: constant-rate release
//!
//! `M(t) = M0 + k0·t`. Produces an absolute amount (targets in `[0, ∞)`).

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod higuchi;
pub mod zero_order;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use higuchi::{HiguchiModel, HiguchiParameters, HiguchiRegime, EXCESS_LOADING_RATIO};
pub use zero_order::{ZeroOrderModel, ZeroOrderParameters};
