//! Zero-order release
//!
//! The delivery system releases drug at a constant rate k0 on top of an
//! initial amount M0 already present in the release medium:
//!
//! $$M(t) = M_0 + k_0 \cdot t$$
//!
//! The released quantity is an absolute amount, so targets are only bounded
//! below by zero.

use crate::error::ParameterError;
use crate::physics::{ReleaseDomain, ReleaseModel};

/// Physical constants of the zero-order law
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZeroOrderParameters {
    /// Initial amount of drug in the solution M0 \[mg\] (most times 0)
    pub initial_amount: f64,
    /// Zero-order release rate constant k0 \[mg/s\]
    pub release_rate: f64,
}

/// Zero-order drug release model
#[derive(Clone, Debug)]
pub struct ZeroOrderModel {
    params: ZeroOrderParameters,
}

impl ZeroOrderModel {
    /// Create a new model
    ///
    /// # Arguments
    ///
    /// * `initial_amount` - M0 \[mg\]
    /// * `release_rate` - k0 \[mg/s\]
    pub fn new(initial_amount: f64, release_rate: f64) -> Self {
        Self {
            params: ZeroOrderParameters {
                initial_amount,
                release_rate,
            },
        }
    }

    /// Create a model with no drug initially in solution (M0 = 0)
    pub fn with_rate(release_rate: f64) -> Self {
        Self::new(0.0, release_rate)
    }

    /// Get the parameter record
    pub fn params(&self) -> &ZeroOrderParameters {
        &self.params
    }
}

impl ReleaseModel for ZeroOrderModel {
    fn validate(&self) -> Result<(), ParameterError> {
        if !(self.params.initial_amount >= 0.0) {
            return Err(ParameterError::NegativeInitialAmount);
        }
        if !(self.params.release_rate >= 0.0) {
            return Err(ParameterError::NegativeReleaseRate);
        }
        Ok(())
    }

    fn evaluate_at(&self, t: f64) -> f64 {
        self.params.initial_amount + self.params.release_rate * t
    }

    fn release_domain(&self) -> ReleaseDomain {
        ReleaseDomain::Amount
    }

    fn name(&self) -> &str {
        "Zero-order"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
