//! Release model traits and types
//!
//! This module defines the core API for release laws:
//! - `ReleaseModel`: trait for all closed-form release laws
//! - `ReleaseDomain`: valid range of a release target for a given law

use crate::error::{ParameterError, RangeError};

// =================================================================================================
// Release Domain
// =================================================================================================

/// Domain of the quantity a release law produces
///
/// Determines which targets `time_for_release` accepts before it even looks at
/// the simulated profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseDomain {
    /// Normalized released fraction in `[0, 1]`
    Fraction,

    /// Absolute released amount in `[0, ∞)`
    Amount,
}

impl ReleaseDomain {
    /// Check that `target` belongs to the domain
    ///
    /// NaN never belongs to any domain.
    pub fn check(&self, target: f64) -> Result<(), RangeError> {
        match self {
            ReleaseDomain::Fraction => {
                if (0.0..=1.0).contains(&target) {
                    Ok(())
                } else {
                    Err(RangeError::TargetReleaseOutsideFraction)
                }
            }
            ReleaseDomain::Amount => {
                if target >= 0.0 {
                    Ok(())
                } else {
                    Err(RangeError::TargetReleaseNegative)
                }
            }
        }
    }
}

// =================================================================================================
// Release Model Trait
// =================================================================================================

/// Trait for closed-form release laws
///
/// # Responsibility
/// States the physics of one delivery system: which parameter records are
/// acceptable and how much drug is released at time `t`.
/// Does NOT discretize time, store profiles or derive rates (that's the
/// `ReleaseSimulation` job).
///
/// # Contract
/// - `validate` is idempotent and has no side effect beyond its result.
/// - `evaluate_at` is a pure function of `t` and the stored parameters and
///   must be defined for every `t >= 0`, including `t = 0`.
///
/// All new release laws MUST implement this trait.
pub trait ReleaseModel: Send + Sync {
    /// Checks the parameter record against the law's physical constraints
    ///
    /// Returns the first violated constraint.
    fn validate(&self) -> Result<(), ParameterError>;

    /// Release at time `t` (seconds)
    fn evaluate_at(&self, t: f64) -> f64;

    /// Domain of the released quantity
    fn release_domain(&self) -> ReleaseDomain {
        ReleaseDomain::Fraction
    }

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;

    /// Description of the model (option)
    fn description(&self) -> Option<&str> {
        None
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_domain_bounds() {
        let domain = ReleaseDomain::Fraction;
        assert!(domain.check(0.0).is_ok());
        assert!(domain.check(0.5).is_ok());
        assert!(domain.check(1.0).is_ok());
        assert_eq!(domain.check(-0.1), Err(RangeError::TargetReleaseOutsideFraction));
        assert_eq!(domain.check(2.0), Err(RangeError::TargetReleaseOutsideFraction));
    }

    #[test]
    fn test_amount_domain_is_unbounded_above() {
        let domain = ReleaseDomain::Amount;
        assert!(domain.check(0.0).is_ok());
        assert!(domain.check(1.0e6).is_ok());
        assert_eq!(domain.check(-0.1), Err(RangeError::TargetReleaseNegative));
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!(ReleaseDomain::Fraction.check(f64::NAN).is_err());
        assert!(ReleaseDomain::Amount.check(f64::NAN).is_err());
    }

    struct ConstantRelease;

    impl ReleaseModel for ConstantRelease {
        fn validate(&self) -> Result<(), ParameterError> {
            Ok(())
        }

        fn evaluate_at(&self, _t: f64) -> f64 {
            0.25
        }

        fn name(&self) -> &str {
            "Constant"
        }
    }

    #[test]
    fn test_trait_defaults() {
        let model = ConstantRelease;
        assert_eq!(model.release_domain(), ReleaseDomain::Fraction);
        assert!(model.description().is_none());
        assert_eq!(model.evaluate_at(0.0), 0.25);
    }
}
