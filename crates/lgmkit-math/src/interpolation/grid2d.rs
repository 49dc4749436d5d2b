//! Bilinear interpolation on a rectangular grid.

use crate::error::{MathError, MathResult};
use crate::interpolation::{check_points, find_index};

/// Bilinear interpolation on `values[i1][i2]` over axes `x1` × `x2`.
///
/// Query points are clamped to the grid on each axis independently, so
/// extrapolation is flat. A 1×N or N×1 grid degrades to a 1-D linear
/// lookup along the non-trivial axis.
///
/// # Example
///
/// ```rust
/// use lgmkit_math::interpolation::Grid2d;
///
/// let grid = Grid2d::new(
///     vec![1.0, 2.0],
///     vec![1.0, 2.0],
///     vec![vec![1.0, 2.0], vec![3.0, 4.0]],
/// ).unwrap();
/// assert!((grid.value(1.5, 1.5) - 2.5).abs() < 1e-12);
/// assert!((grid.value(0.0, 9.0) - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Grid2d {
    x1: Vec<f64>,
    x2: Vec<f64>,
    values: Vec<f64>,
}

impl Grid2d {
    /// Creates a new grid.
    ///
    /// # Errors
    ///
    /// Returns an error if an axis is empty or not strictly increasing, or if
    /// `values` is not `x1.len()` rows of `x2.len()` finite numbers.
    pub fn new(x1: Vec<f64>, x2: Vec<f64>, values: Vec<Vec<f64>>) -> MathResult<Self> {
        let (n1, n2) = (x1.len(), x2.len());
        if n1 == 0 || n2 == 0 {
            return Err(MathError::insufficient_data(1, 0));
        }
        if values.len() != n1 {
            return Err(MathError::invalid_input(format!(
                "expected {n1} rows of values, got {}",
                values.len()
            )));
        }
        if let Some(row) = values.iter().find(|row| row.len() != n2) {
            return Err(MathError::invalid_input(format!(
                "expected {n2} values per row, got {}",
                row.len()
            )));
        }
        check_points(&x1, &vec![0.0; n1])?;
        check_points(&x2, &vec![0.0; n2])?;

        let values: Vec<f64> = values.into_iter().flatten().collect();
        if values.iter().any(|v| !v.is_finite()) {
            return Err(MathError::invalid_input("grid values must be finite"));
        }
        Ok(Self { x1, x2, values })
    }

    /// First axis.
    pub fn x1(&self) -> &[f64] {
        &self.x1
    }

    /// Second axis.
    pub fn x2(&self) -> &[f64] {
        &self.x2
    }

    /// Interpolated value at `(s1, s2)`.
    pub fn value(&self, s1: f64, s2: f64) -> f64 {
        let (n1, n2) = (self.x1.len(), self.x2.len());

        if n1 == 1 {
            return flat_linear(&self.x2, &self.values, s2);
        }
        if n2 == 1 {
            return flat_linear(&self.x1, &self.values, s1);
        }

        let s1 = s1.clamp(self.x1[0], self.x1[n1 - 1]);
        let s2 = s2.clamp(self.x2[0], self.x2[n2 - 1]);
        let i1 = find_index(&self.x1, s1);
        let i2 = find_index(&self.x2, s2);

        let at = |a: usize, b: usize| self.values[a * n2 + b];
        let v11 = at(i1, i2);
        let v12 = at(i1 + 1, i2);
        let v21 = at(i1, i2 + 1);
        let v22 = at(i1 + 1, i2 + 1);

        let w1 = (s1 - self.x1[i1]) / (self.x1[i1 + 1] - self.x1[i1]);
        let w2 = (s2 - self.x2[i2]) / (self.x2[i2 + 1] - self.x2[i2]);

        (1.0 - w1) * (1.0 - w2) * v11 + (1.0 - w1) * w2 * v21 + w1 * (1.0 - w2) * v12 + w1 * w2 * v22
    }
}

fn flat_linear(xs: &[f64], ys: &[f64], s: f64) -> f64 {
    let n = xs.len();
    if s <= xs[0] {
        return ys[0];
    }
    if s >= xs[n - 1] {
        return ys[n - 1];
    }
    let i = find_index(xs, s);
    (ys[i] * (xs[i + 1] - s) + ys[i + 1] * (s - xs[i])) / (xs[i + 1] - xs[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Grid2d {
        Grid2d::new(
            vec![1.0, 2.0, 3.0],
            vec![1.0, 2.0, 3.0, 4.0],
            vec![
                vec![1.0, 1.0, 2.0, 2.0],
                vec![2.0, 2.0, 3.0, 3.0],
                vec![3.0, 3.0, 4.0, 4.0],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_bilinear() {
        let grid = sample();
        assert_relative_eq!(grid.value(1.0, 2.5), 1.5, epsilon = 1e-12);
        assert_relative_eq!(grid.value(2.0, 2.5), 2.5, epsilon = 1e-12);
        assert_relative_eq!(grid.value(2.5, 2.5), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_extrapolation() {
        let grid = sample();
        assert_relative_eq!(grid.value(0.0, 0.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(grid.value(10.0, 10.0), 4.0, epsilon = 1e-12);
        assert_relative_eq!(grid.value(10.0, 2.5), 3.5, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_axes() {
        let row = Grid2d::new(vec![1.0], vec![1.0, 3.0], vec![vec![0.1, 0.3]]).unwrap();
        assert_relative_eq!(row.value(99.0, 2.0), 0.2, epsilon = 1e-12);
        assert_relative_eq!(row.value(99.0, 5.0), 0.3, epsilon = 1e-12);

        let col = Grid2d::new(vec![1.0, 3.0], vec![5.0], vec![vec![0.1], vec![0.3]]).unwrap();
        assert_relative_eq!(col.value(2.0, -1.0), 0.2, epsilon = 1e-12);
        assert_relative_eq!(col.value(0.0, -1.0), 0.1, epsilon = 1e-12);

        let point = Grid2d::new(vec![1.0], vec![1.0], vec![vec![0.25]]).unwrap();
        assert_relative_eq!(point.value(-3.0, 7.0), 0.25);
    }

    #[test]
    fn test_shape_errors() {
        assert!(Grid2d::new(vec![1.0, 2.0], vec![1.0], vec![vec![1.0]]).is_err());
        assert!(Grid2d::new(vec![1.0], vec![1.0, 2.0], vec![vec![1.0]]).is_err());
        assert!(Grid2d::new(vec![2.0, 1.0], vec![1.0], vec![vec![1.0], vec![1.0]]).is_err());
    }
}
