//! Higuchi release from a drug-loaded polymer film
//!
//! Closed-form diffusion law for a film of thickness L loaded with drug at
//! initial concentration c0, where the drug dissolves in the carrier up to its
//! solubility cs and diffuses out with diffusivity D.
//!
//! # Regimes
//!
//! The formula depends on how loaded the film is compared to the solubility.
//! The regime is a function of the parameter record only, so one simulation
//! always runs in a single regime:
//!
//! | Regime | Condition | Release M(t) |
//! |--------|-----------|--------------|
//! | [`HiguchiRegime::Dilute`] | c0 ≤ cs | √(D·t / (π·L²)) |
//! | [`HiguchiRegime::General`] | cs < c0 ≤ 10·cs | √(D·t·(2·c0 − cs)·cs) |
//! | [`HiguchiRegime::ExcessLoading`] | c0 > 10·cs | √(D·c0·(2·c0 − cs)·cs) · t |
//!
//! Validation requires cs ≤ c0, so the dilute regime is reached exactly at
//! saturation (c0 = cs).
//!
//! # Example
//!
//! ```rust
//! use drux::models::HiguchiModel;
//! use drux::solver::ReleaseSimulation;
//!
//! let model = HiguchiModel::new(1e-6, 1.5, 0.5, 1.0);
//! let mut simulation = ReleaseSimulation::new(model);
//!
//! let profile = simulation.simulate(1000.0, 10.0).unwrap();
//! assert_eq!(profile.len(), 101);
//! ```

use std::f64::consts::PI;

use crate::error::ParameterError;
use crate::physics::{ReleaseDomain, ReleaseModel};

/// Loading ratio c0 / cs above which the excess-loading law applies
pub const EXCESS_LOADING_RATIO: f64 = 10.0;

/// Physical constants of the Higuchi law
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HiguchiParameters {
    /// Drug diffusivity in the polymer carrier D \[cm²/s\]
    pub diffusivity: f64,
    /// Initial drug concentration c0 \[mg/cm³\]
    pub initial_concentration: f64,
    /// Drug solubility in the polymer cs \[mg/cm³\]
    pub solubility: f64,
    /// Film thickness L \[cm\]
    pub thickness: f64,
}

/// Branch of the piecewise Higuchi law
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HiguchiRegime {
    /// Drug fully dissolved in the carrier (c0 ≤ cs)
    Dilute,
    /// Loading far above solubility (c0 > 10·cs)
    ExcessLoading,
    /// Comparable concentrations
    General,
}

/// Higuchi drug release model
#[derive(Clone, Debug)]
pub struct HiguchiModel {
    params: HiguchiParameters,
}

impl HiguchiModel {
    /// Create a new model
    ///
    /// No validation happens here: an invalid record is reported by
    /// `ReleaseSimulation::simulate`.
    ///
    /// # Arguments
    ///
    /// * `diffusivity` - D \[cm²/s\]
    /// * `initial_concentration` - c0 \[mg/cm³\]
    /// * `solubility` - cs \[mg/cm³\]
    /// * `thickness` - L \[cm\]
    pub fn new(diffusivity: f64, initial_concentration: f64, solubility: f64, thickness: f64) -> Self {
        Self::from_parameters(HiguchiParameters {
            diffusivity,
            initial_concentration,
            solubility,
            thickness,
        })
    }

    /// Create a model from an existing parameter record
    pub fn from_parameters(params: HiguchiParameters) -> Self {
        Self { params }
    }

    /// Get the parameter record
    pub fn params(&self) -> &HiguchiParameters {
        &self.params
    }

    /// Branch of the law selected by the parameter record
    pub fn regime(&self) -> HiguchiRegime {
        let c0 = self.params.initial_concentration;
        let cs = self.params.solubility;

        if c0 <= cs {
            HiguchiRegime::Dilute
        } else if c0 > EXCESS_LOADING_RATIO * cs {
            HiguchiRegime::ExcessLoading
        } else {
            HiguchiRegime::General
        }
    }
}

impl ReleaseModel for HiguchiModel {
    fn validate(&self) -> Result<(), ParameterError> {
        let p = &self.params;

        // `!(x > 0.0)` also rejects NaN
        if !(p.diffusivity > 0.0) {
            return Err(ParameterError::NonPositiveDiffusivity);
        }
        if !(p.initial_concentration > 0.0) {
            return Err(ParameterError::NonPositiveConcentration);
        }
        if !(p.solubility > 0.0) {
            return Err(ParameterError::NonPositiveSolubility);
        }
        if !(p.thickness > 0.0) {
            return Err(ParameterError::NonPositiveThickness);
        }
        if p.solubility > p.initial_concentration {
            return Err(ParameterError::SolubilityExceedsConcentration);
        }
        Ok(())
    }

    fn evaluate_at(&self, t: f64) -> f64 {
        let HiguchiParameters {
            diffusivity: d,
            initial_concentration: c0,
            solubility: cs,
            thickness: l,
        } = self.params;

        match self.regime() {
            HiguchiRegime::Dilute => (d * t / (PI * l * l)).sqrt(),
            HiguchiRegime::ExcessLoading => (d * c0 * (2.0 * c0 - cs) * cs).sqrt() * t,
            HiguchiRegime::General => (d * t * (2.0 * c0 - cs) * cs).sqrt(),
        }
    }

    fn release_domain(&self) -> ReleaseDomain {
        ReleaseDomain::Fraction
    }

    fn name(&self) -> &str {
        "Higuchi"
    }

    fn description(&self) -> Option<&str> {
        Some("Diffusion-controlled release from a drug-loaded polymer film")
    }
}

// =================================================================================================
// Tests
// =================================================================================================
