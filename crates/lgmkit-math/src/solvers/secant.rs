//! Secant root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Secant root-finding algorithm.
///
/// Approximates the derivative by the chord through the last two iterates.
/// If `x1` is a worse starting point than `x0` (larger `|f|`), the two are
/// swapped before iterating.
///
/// Iteration stops when `|f(x)|` or the step size falls to the tolerance.
///
/// # Errors
///
/// - [`MathError::ConvergenceFailed`] when the iteration budget is exhausted
/// - [`MathError::InvalidResult`] when an iterate becomes non-finite
///
/// # Example
///
/// ```rust
/// use lgmkit_math::solvers::{secant, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let result = secant(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-8);
/// ```
pub fn secant<F>(f: F, x0: f64, x1: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let tol = config.tolerance;
    let mut x = x0;
    let mut x_next = x1;
    let mut fx = f(x);
    let mut f_next = f(x_next);

    if f_next.abs() > fx.abs() {
        std::mem::swap(&mut x, &mut x_next);
        std::mem::swap(&mut fx, &mut f_next);
    }

    let mut iterations = 0;
    while f_next.abs() > tol && (x - x_next).abs() > tol {
        if iterations >= config.max_iterations {
            return Err(MathError::convergence_failed(iterations, f_next.abs()));
        }
        let step = (x - x_next) * f_next / (f_next - fx);
        x = x_next;
        fx = f_next;
        x_next = x + step;
        if !x_next.is_finite() {
            return Err(MathError::InvalidResult { solver: "secant" });
        }
        f_next = f(x_next);
        iterations += 1;
    }

    if !x_next.is_finite() || f_next.is_nan() {
        return Err(MathError::InvalidResult { solver: "secant" });
    }

    Ok(SolverResult {
        root: x_next,
        iterations,
        residual: f_next,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;
        let config = SolverConfig::default().with_tolerance(1e-12);

        let result = secant(f, 1.0, 2.0, &config).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_cube_root() {
        let f = |x: f64| x * x * x - 27.0;
        let config = SolverConfig::default().with_tolerance(1e-12);

        let result = secant(f, 2.0, 4.0, &config).unwrap();

        assert_relative_eq!(result.root, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_swaps_worse_start() {
        // f(10) is far worse than f(1.5); the solver still starts from the better point.
        let f = |x: f64| x * x - 2.0;
        let result = secant(f, 1.5, 10.0, &SolverConfig::default()).unwrap();
        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-8);
    }

    #[test]
    fn test_exact_start() {
        let f = |x: f64| x - 1.0;
        let result = secant(f, 0.0, 1.0, &SolverConfig::default()).unwrap();
        assert_eq!(result.iterations, 0);
        assert_relative_eq!(result.root, 1.0);
    }

    #[test]
    fn test_too_many_iterations() {
        let f = |x: f64| x.atan();
        let config = SolverConfig::default().with_max_iterations(2);
        let err = secant(f, 5.0, 10.0, &config).unwrap_err();
        assert!(matches!(
            err,
            MathError::ConvergenceFailed { .. } | MathError::InvalidResult { .. }
        ));
    }

    #[test]
    fn test_invalid_result() {
        let f = |x: f64| if x > 1.0 { f64::NAN } else { x - 0.5 };
        assert!(secant(f, 0.0, 2.0, &SolverConfig::default()).is_err());
    }
}
