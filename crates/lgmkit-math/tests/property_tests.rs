//! Property-based tests for the solvers and interpolators.

use approx::assert_relative_eq;
use lgmkit_math::prelude::*;
use proptest::prelude::*;

/// Strictly increasing grid built from positive increments.
fn grid() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec((0.05_f64..3.0, -0.02_f64..0.08), 1..12).prop_map(|steps| {
        let mut t = 0.0;
        steps
            .into_iter()
            .map(|(dt, y)| {
                t += dt;
                (t, y)
            })
            .unzip()
    })
}

proptest! {
    /// Every interpolator reproduces its support points.
    #[test]
    fn interpolators_hit_support_points((xs, ys) in grid()) {
        let linear = LinearInterpolator::new(xs.clone(), ys.clone()).unwrap();
        let linear_xy = LinearXyInterpolator::new(xs.clone(), ys.clone()).unwrap();
        let bessel = BesselHermite::new(xs.clone(), ys.clone()).unwrap();

        for (x, y) in xs.iter().zip(&ys) {
            prop_assert!((linear.interpolate(*x).unwrap() - y).abs() < 1e-12);
            prop_assert!((linear_xy.interpolate(*x).unwrap() - y).abs() < 1e-12);
            prop_assert!((bessel.interpolate(*x).unwrap() - y).abs() < 1e-12);
        }
    }

    /// Linear interpolation stays within the bracketing values.
    #[test]
    fn linear_is_bounded((xs, ys) in grid(), u in 0.0_f64..1.0) {
        prop_assume!(xs.len() >= 2);
        let interp = LinearInterpolator::new(xs.clone(), ys.clone()).unwrap();
        let s = xs[0] + u * (xs[xs.len() - 1] - xs[0]);
        let i = find_index(&xs, s);
        let v = interp.interpolate(s).unwrap();
        let (lo, hi) = (ys[i].min(ys[i + 1]), ys[i].max(ys[i + 1]));
        prop_assert!(v >= lo - 1e-14 && v <= hi + 1e-14);
    }

    /// Ridders recovers the root of a monotone cubic from any bracket around it.
    #[test]
    fn ridders_finds_bracketed_root(
        root in -5.0_f64..5.0,
        left in 0.01_f64..10.0,
        right in 0.01_f64..10.0,
    ) {
        let f = |x: f64| (x - root) * (1.0 + (x - root) * (x - root));
        let config = SolverConfig::default().with_tolerance(1e-12).with_max_iterations(60);
        let result = ridders(f, root - left, root + right, &config).unwrap();
        prop_assert!((result.root - root).abs() < 1e-9);
    }
}

#[test]
fn test_secant_and_ridders_on_discount_equation() {
    // Annual rate r with (1 + r)^-7 = 0.8
    let f = |r: f64| (1.0 + r).powf(-7.0) - 0.8;
    let expected = 0.8_f64.powf(-1.0 / 7.0) - 1.0;

    let s = secant(f, 0.0, 0.05, &SolverConfig::default()).unwrap();
    let r = ridders(f, 0.0, 0.1, &SolverConfig::default()).unwrap();

    assert_relative_eq!(s.root, expected, epsilon = 1e-8);
    assert_relative_eq!(r.root, expected, epsilon = 1e-8);
}
