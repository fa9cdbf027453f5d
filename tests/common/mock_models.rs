//! Mock release laws for testing
//!
//! They plug into the simulation through the public trait only, with
//! derivatives known in closed form.

use drux::error::ParameterError;
use drux::physics::{ReleaseDomain, ReleaseModel};

// =================================================================================================
// First-order release: F(t) = 1 - exp(-k t)
// =================================================================================================

/// First-order release, dF/dt = k exp(-k t)
pub struct FirstOrderRelease {
    pub rate_constant: f64,
}

impl FirstOrderRelease {
    pub fn new(rate_constant: f64) -> Self {
        Self { rate_constant }
    }

    /// Exact release rate at time t
    pub fn analytical_rate(&self, t: f64) -> f64 {
        self.rate_constant * (-self.rate_constant * t).exp()
    }
}

impl ReleaseModel for FirstOrderRelease {
    fn validate(&self) -> Result<(), ParameterError> {
        if self.rate_constant > 0.0 {
            Ok(())
        } else {
            Err(ParameterError::NegativeReleaseRate)
        }
    }

    fn evaluate_at(&self, t: f64) -> f64 {
        1.0 - (-self.rate_constant * t).exp()
    }

    fn name(&self) -> &str {
        "First-order"
    }
}

// =================================================================================================
// Square-root release: M(t) = a sqrt(t), unbounded amount
// =================================================================================================

/// Release growing like sqrt(t), reported as an amount
pub struct SquareRootRelease {
    pub coefficient: f64,
}

impl ReleaseModel for SquareRootRelease {
    fn validate(&self) -> Result<(), ParameterError> {
        Ok(())
    }

    fn evaluate_at(&self, t: f64) -> f64 {
        self.coefficient * t.sqrt()
    }

    fn release_domain(&self) -> ReleaseDomain {
        ReleaseDomain::Amount
    }

    fn name(&self) -> &str {
        "Square root"
    }

    fn description(&self) -> Option<&str> {
        Some("M(t) = a sqrt(t)")
    }
}
