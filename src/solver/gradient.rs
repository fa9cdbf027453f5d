//! Numerical differentiation of a sampled curve

use nalgebra::DVector;

use crate::error::DataError;

/// Derivative of `values` with respect to `points`
///
/// Interior points use the second-order central scheme for non-uniform
/// spacing. With `hs = x[i] - x[i-1]` and `hd = x[i+1] - x[i]`:
///
/// $$f'_i = \frac{h_s^2 f_{i+1} + (h_d^2 - h_s^2) f_i - h_d^2 f_{i-1}}{h_s h_d (h_s + h_d)}$$
///
/// which reduces to `(f[i+1] - f[i-1]) / 2h` on a uniform grid. The two
/// endpoints use first-order one-sided differences.
///
/// # Errors
///
/// - [`DataError::ReleaseProfileTooShort`] with fewer than two samples
/// - [`DataError::MisalignedProfile`] when the two vectors differ in length
///
/// # Example
///
/// ```rust
/// use drux::solver::gradient;
/// use nalgebra::DVector;
///
/// let t = DVector::from_vec(vec![0.0, 1.0, 2.0, 3.0]);
/// let m = t.map(|t| 2.0 * t + 1.0);
///
/// let rate = gradient(&m, &t).unwrap();
/// assert!(rate.iter().all(|r| (r - 2.0).abs() < 1e-12));
/// ```
pub fn gradient(values: &DVector<f64>, points: &DVector<f64>) -> Result<DVector<f64>, DataError> {
    let n = values.len();

    if points.len() != n {
        return Err(DataError::MisalignedProfile {
            time_points: points.len(),
            release: n,
        });
    }
    if n < 2 {
        return Err(DataError::ReleaseProfileTooShort);
    }

    let mut derivative = DVector::zeros(n);

    derivative[0] = (values[1] - values[0]) / (points[1] - points[0]);
    derivative[n - 1] = (values[n - 1] - values[n - 2]) / (points[n - 1] - points[n - 2]);

    for i in 1..n - 1 {
        let hs = points[i] - points[i - 1];
        let hd = points[i + 1] - points[i];

        derivative[i] = (hs * hs * values[i + 1] + (hd * hd - hs * hs) * values[i]
            - hd * hd * values[i - 1])
            / (hs * hd * (hs + hd));
    }

    Ok(derivative)
}

// =================================================================================================
// Tests
// =================================================================================================
