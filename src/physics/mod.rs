//! Release laws
//!
//! This module provides the trait every release law implements.
//! A release law encapsulates the closed-form physics of one delivery system
//! (diffusion from a polymer film, constant-rate erosion, ...).
//!
//! # Architecture
//!
//! Release laws are **separate from the simulation engine**:
//! - The law provides the **formula** (physics)
//! - [`ReleaseSimulation`](crate::solver::ReleaseSimulation) provides the
//!   **discretization** and the derived quantities (numerics)
//!
//! # Implementing a New Release Law
//!
//! ```rust
//! use drux::error::ParameterError;
//! use drux::physics::{ReleaseDomain, ReleaseModel};
//!
//! struct FirstOrder {
//!     rate_constant: f64,
//! }
//!
//! impl ReleaseModel for FirstOrder {
//!     fn validate(&self) -> Result<(), ParameterError> {
//!         if self.rate_constant < 0.0 {
//!             return Err(ParameterError::NegativeReleaseRate);
//!         }
//!         Ok(())
//!     }
//!
//!     fn evaluate_at(&self, t: f64) -> f64 {
//!         1.0 - (-self.rate_constant * t).exp()
//!     }
//!
//!     fn release_domain(&self) -> ReleaseDomain {
//!         ReleaseDomain::Fraction
//!     }
//!
//!     fn name(&self) -> &str {
//!         "First order"
//!     }
//! }
//! ```
//!
//! # Available Laws
//!
//! See [`crate::models`]: Higuchi (diffusion from a film) and zero-order.

pub mod traits;

pub use traits::{ReleaseDomain, ReleaseModel};
