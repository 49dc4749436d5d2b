//! Linear interpolation on `x·y`.

use crate::error::{MathError, MathResult};
use crate::interpolation::{check_points, Interpolator, LinearInterpolator};

/// Interpolates `x·y` linearly and divides by `x`.
///
/// For zero rates with continuous compounding this is linear interpolation
/// of the log discount factor. All abscissae, and every query point, must
/// be strictly positive.
#[derive(Debug, Clone)]
pub struct LinearXyInterpolator {
    inner: LinearInterpolator,
}

impl LinearXyInterpolator {
    /// Creates a new interpolator.
    ///
    /// # Errors
    ///
    /// Fails on the usual grid checks and if `xs[0] <= 0`.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        check_points(&xs, &ys)?;
        if xs[0] <= 0.0 {
            return Err(MathError::invalid_input(
                "linear xy interpolation requires all x to be greater than zero",
            ));
        }
        let xy: Vec<f64> = xs.iter().zip(&ys).map(|(x, y)| x * y).collect();
        Ok(Self {
            inner: LinearInterpolator::new(xs, xy)?,
        })
    }
}

impl Interpolator for LinearXyInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        if x <= 0.0 {
            return Err(MathError::invalid_input(
                "linear xy interpolation requires x to be greater than zero",
            ));
        }
        Ok(self.inner.value(x) / x)
    }

    fn min_x(&self) -> f64 {
        self.inner.min_x()
    }

    fn max_x(&self) -> f64 {
        self.inner.max_x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_log_discount_linear() {
        let interp = LinearXyInterpolator::new(vec![1.0, 2.0], vec![0.01, 0.02]).unwrap();
        // x·y: 0.01 at 1, 0.04 at 2, so 0.025 at 1.5
        assert_relative_eq!(interp.interpolate(1.5).unwrap(), 0.025 / 1.5, epsilon = 1e-14);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(LinearXyInterpolator::new(vec![0.0, 1.0], vec![0.01, 0.02]).is_err());
        let interp = LinearXyInterpolator::new(vec![1.0, 2.0], vec![0.01, 0.02]).unwrap();
        assert!(interp.interpolate(0.0).is_err());
    }
}
