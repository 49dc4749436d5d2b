//! Linear interpolation.

use crate::error::MathResult;
use crate::interpolation::{check_points, find_index, Interpolator};

/// Linear interpolation between data points.
///
/// A single support point yields a constant.
///
/// # Example
///
/// ```rust
/// use lgmkit_math::interpolation::{LinearInterpolator, Interpolator};
///
/// let interp = LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0]).unwrap();
/// assert!((interp.interpolate(1.5).unwrap() - 2.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, lengths differ, values are
    /// non-finite or `xs` is not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        check_points(&xs, &ys)?;
        Ok(Self { xs, ys })
    }

    /// Evaluates without the `Result` wrapper; construction already
    /// guarantees a valid grid.
    pub(crate) fn value(&self, s: f64) -> f64 {
        if self.xs.len() == 1 {
            return self.ys[0];
        }
        let i = find_index(&self.xs, s);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        (self.ys[i] * (x1 - s) + self.ys[i + 1] * (s - x0)) / (x1 - x0)
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        Ok(self.value(x))
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_basic() {
        let interp = LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0]).unwrap();
        assert_relative_eq!(interp.interpolate(0.5).unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(1.5).unwrap(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_extends_boundary_segments() {
        let interp = LinearInterpolator::new(vec![1.0, 2.0], vec![1.0, 3.0]).unwrap();
        assert_relative_eq!(interp.interpolate(0.0).unwrap(), -1.0, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(3.0).unwrap(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_point() {
        let interp = LinearInterpolator::new(vec![2.0], vec![0.7]).unwrap();
        assert_relative_eq!(interp.interpolate(10.0).unwrap(), 0.7);
        assert_relative_eq!(interp.min_x(), interp.max_x());
    }

    #[test]
    fn test_rejects_unsorted() {
        assert!(LinearInterpolator::new(vec![0.0, 2.0, 1.0], vec![0.0; 3]).is_err());
    }
}
