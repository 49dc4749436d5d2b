//! Cubic Hermite interpolation with Bessel slopes.

use crate::error::MathResult;
use crate::interpolation::{check_points, find_index, Interpolator};

/// Piecewise cubic through every support point, slopes estimated from the
/// parabola through each point and its neighbours (Bessel).
///
/// With fewer than three points the cubic terms vanish and the
/// interpolator is linear.
#[derive(Debug, Clone)]
pub struct BesselHermite {
    xs: Vec<f64>,
    ys: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
    d: Vec<f64>,
}

impl BesselHermite {
    /// Creates a new interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, lengths differ, values are
    /// non-finite or `xs` is not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        check_points(&xs, &ys)?;
        let n = xs.len();

        if n < 3 {
            let b = if n == 2 {
                vec![(ys[1] - ys[0]) / (xs[1] - xs[0])]
            } else {
                vec![0.0]
            };
            let len = b.len();
            return Ok(Self {
                xs,
                ys,
                b,
                c: vec![0.0; len],
                d: vec![0.0; len],
            });
        }

        let mut dx = vec![0.0; n];
        let mut dy = vec![0.0; n];
        for i in 1..n {
            dx[i] = xs[i] - xs[i - 1];
            dy[i] = ys[i] - ys[i - 1];
        }

        let mut b = vec![0.0; n];
        b[0] = ((xs[2] + xs[1] - 2.0 * xs[0]) * dy[1] / dx[1] - dx[1] * dy[2] / dx[2])
            / (xs[2] - xs[0]);
        for i in 1..n - 1 {
            b[i] = (dx[i + 1] * dy[i] / dx[i] + dx[i] * dy[i + 1] / dx[i + 1])
                / (xs[i + 1] - xs[i - 1]);
        }
        b[n - 1] = ((2.0 * xs[n - 1] - xs[n - 2] - xs[n - 3]) * dy[n - 1] / dx[n - 1]
            - dx[n - 1] * dy[n - 2] / dx[n - 2])
            / (xs[n - 1] - xs[n - 3]);

        let mut c = vec![0.0; n - 1];
        let mut d = vec![0.0; n - 1];
        for i in 0..n - 1 {
            let h = dx[i + 1];
            let m = dy[i + 1] / h;
            c[i] = (3.0 * m - b[i + 1] - 2.0 * b[i]) / h;
            d[i] = (b[i + 1] + b[i] - 2.0 * m) / (h * h);
        }

        Ok(Self { xs, ys, b, c, d })
    }
}

impl Interpolator for BesselHermite {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        let i = find_index(&self.xs, x);
        let ds = x - self.xs[i];
        Ok(self.ys[i] + ds * (self.b[i] + ds * (self.c[i] + ds * self.d[i])))
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
