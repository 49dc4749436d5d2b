//! Interpolation methods for term structures and volatility grids.
//!
//! # Available Methods
//!
//! - [`LinearInterpolator`]: piecewise linear
//! - [`LinearXyInterpolator`]: linear on `x·y`, i.e. linear in log-discount
//!   when `y` is a continuously compounded zero rate
//! - [`BesselHermite`]: cubic Hermite with Bessel slopes, falls back to
//!   linear below three points
//! - [`Grid2d`]: bilinear on a rectangular grid, clamped to the edges
//!
//! The 1-D interpolators extend their boundary segment outside the data
//! range; flat extrapolation is a policy of the curve layer.

mod bessel_hermite;
mod grid2d;
mod linear;
mod linear_xy;

pub use bessel_hermite::BesselHermite;
pub use grid2d::Grid2d;
pub use linear::LinearInterpolator;
pub use linear_xy::LinearXyInterpolator;

use crate::error::{MathError, MathResult};

/// Trait for 1-D interpolation methods.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

/// Index of the segment `[xs[i], xs[i+1]]` used for `s`.
///
/// Points equal to an interior node resolve to the segment on its left;
/// points outside the range resolve to the boundary segments. Requires
/// `xs` sorted ascending; returns 0 for fewer than two nodes.
#[must_use]
pub fn find_index(xs: &[f64], s: f64) -> usize {
    if xs.len() < 2 {
        return 0;
    }
    xs.partition_point(|&v| v < s)
        .saturating_sub(1)
        .min(xs.len() - 2)
}

/// Validates a support grid: non-empty, equal lengths, strictly increasing
/// finite abscissae, finite ordinates.
pub(crate) fn check_points(xs: &[f64], ys: &[f64]) -> MathResult<()> {
    if xs.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.iter().chain(ys).any(|v| !v.is_finite()) {
        return Err(MathError::invalid_input("support points must be finite"));
    }
    if xs.windows(2).any(|w| w[1] <= w[0]) {
        return Err(MathError::invalid_input(
            "x values must be strictly increasing",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_find_index() {
        let xs = [1.0, 2.0, 3.0, 5.0];
        assert_eq!(find_index(&xs, 0.0), 0);
        assert_eq!(find_index(&xs, 1.0), 0);
        assert_eq!(find_index(&xs, 1.5), 0);
        assert_eq!(find_index(&xs, 2.0), 0);
        assert_eq!(find_index(&xs, 2.5), 1);
        assert_eq!(find_index(&xs, 5.0), 2);
        assert_eq!(find_index(&xs, 9.0), 2);
        assert_eq!(find_index(&[1.0], 9.0), 0);
    }

    #[test]
    fn test_check_points() {
        assert!(check_points(&[], &[]).is_err());
        assert!(check_points(&[1.0, 2.0], &[1.0]).is_err());
        assert!(check_points(&[1.0, 1.0], &[1.0, 2.0]).is_err());
        assert!(check_points(&[1.0, 2.0], &[1.0, f64::NAN]).is_err());
        assert!(check_points(&[1.0, 2.0], &[1.0, 2.0]).is_ok());
    }

    #[test]
    fn test_all_interpolators_through_points() {
        let times = vec![0.5, 1.0, 2.0, 3.0, 5.0];
        let rates = vec![0.02, 0.025, 0.03, 0.035, 0.04];

        let linear = LinearInterpolator::new(times.clone(), rates.clone()).unwrap();
        let linear_xy = LinearXyInterpolator::new(times.clone(), rates.clone()).unwrap();
        let bessel = BesselHermite::new(times.clone(), rates.clone()).unwrap();

        for (t, r) in times.iter().zip(rates.iter()) {
            assert_relative_eq!(linear.interpolate(*t).unwrap(), *r, epsilon = 1e-12);
            assert_relative_eq!(linear_xy.interpolate(*t).unwrap(), *r, epsilon = 1e-12);
            assert_relative_eq!(bessel.interpolate(*t).unwrap(), *r, epsilon = 1e-12);
        }
    }
}
