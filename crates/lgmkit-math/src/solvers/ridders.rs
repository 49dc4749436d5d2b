//! Ridders' bracketed root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Ridders' method on the bracket `[x0, x1]` (either order).
///
/// Each iteration evaluates the midpoint and an exponentially corrected
/// point, then keeps whichever sub-interval still brackets the sign change.
/// Returns an endpoint immediately if `|f|` is already within tolerance
/// there, and the midpoint once the bracket collapses below `1e-15`.
///
/// # Errors
///
/// - [`MathError::InvalidBracket`] if `f(x0)` and `f(x1)` have the same sign
/// - [`MathError::ConvergenceFailed`] when the iteration budget is exhausted
///
/// # Example
///
/// ```rust
/// use lgmkit_math::solvers::{ridders, SolverConfig};
///
/// let f = |x: f64| x.cos() - x;
/// let result = ridders(f, 0.0, 1.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - 0.7390851332).abs() < 1e-8);
/// ```
pub fn ridders<F>(f: F, x0: f64, x1: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let tol = config.tolerance;
    let (mut x, mut y) = (x0, x1);
    let (mut fx, mut fy) = (f(x), f(y));

    if fx * fy > 0.0 {
        return Err(MathError::InvalidBracket {
            a: x0,
            b: x1,
            fa: fx,
            fb: fy,
        });
    }
    if fx.abs() < tol {
        return Ok(done(x, 0, fx));
    }
    if fy.abs() < tol {
        return Ok(done(y, 0, fy));
    }

    for iteration in 1..=config.max_iterations {
        let z = 0.5 * (x + y);
        if (x - y).abs() < 1e-15 {
            return Ok(done(z, iteration, f(z)));
        }
        let fz = f(z);
        if fz.abs() < tol {
            return Ok(done(z, iteration, fz));
        }
        let r = (fz * fz - fy * fx).sqrt();
        if r == 0.0 {
            return Ok(done(z, iteration, fz));
        }
        let mut w = (z - x) * signum(fx - fy) * fz / r + z;
        if w.is_nan() {
            w = z;
        }
        let fw = f(w);
        if fw.abs() < tol {
            return Ok(done(w, iteration, fw));
        }

        if fz * fw < 0.0 {
            x = w;
            fx = fw;
            y = z;
            fy = fz;
        } else if fx * fw < 0.0 {
            y = w;
            fy = fw;
        } else if fy * fw < 0.0 {
            x = w;
            fx = fw;
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        fx.abs().min(fy.abs()),
    ))
}

fn done(root: f64, iterations: u32, residual: f64) -> SolverResult {
    SolverResult {
        root,
        iterations,
        residual,
    }
}

fn signum(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
