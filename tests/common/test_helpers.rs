//! Helper functions for integration tests

use nalgebra::DVector;

/// Assert that a simulated profile matches a reference law point by point
/// (relative tolerance)
pub fn assert_profiles_close(
    time_points: &DVector<f64>,
    release: &DVector<f64>,
    reference: impl Fn(f64) -> f64,
    tolerance: f64,
    message: &str,
) {
    assert_eq!(time_points.len(), release.len(), "{}: Dimension mismatch", message);

    for (i, (&t, &r)) in time_points.iter().zip(release.iter()).enumerate() {
        let expected = reference(t);
        let error = relative_error(r, expected);
        assert!(
            error < tolerance,
            "{}: point {} (t = {}) is {} instead of {} (relative error {})",
            message, i, t, r, expected, error
        );
    }
}

/// Higuchi release for a general loading: sqrt(D t (2 c0 - cs) cs)
pub fn higuchi_general(diffusivity: f64, c0: f64, cs: f64, t: f64) -> f64 {
    (diffusivity * t * (2.0 * c0 - cs) * cs).sqrt()
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}
