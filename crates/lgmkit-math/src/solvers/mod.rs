//! Root-finding algorithms.
//!
//! Two derivative-free solvers cover every use site in the engine:
//!
//! - [`secant`]: fast superlinear iteration from two starting points
//! - [`ridders`]: bracketed method with guaranteed convergence once
//!   `f(x0)` and `f(x1)` differ in sign
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Secant | Fast (superlinear) | May diverge | Two guesses |
//! | Ridders | Fast (quadratic) | Guaranteed | Bracket |
//!
//! Both are pure functions of the callback and never allocate.
//!
//! # Example
//!
//! ```rust
//! use lgmkit_math::solvers::{ridders, SolverConfig};
//!
//! // Continuously compounded rate that discounts 100 to 95 over 2 years.
//! let f = |r: f64| 100.0 * (-2.0 * r).exp() - 95.0;
//! let result = ridders(f, 0.0, 0.1, &SolverConfig::default()).unwrap();
//! assert!((result.root - 0.025646).abs() < 1e-6);
//! ```

mod ridders;
mod secant;

pub use ridders::ridders;
pub use secant::secant;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 20;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}
