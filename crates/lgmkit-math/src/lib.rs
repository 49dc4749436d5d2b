//! # lgmkit Math
//!
//! Numerical building blocks for the lgmkit interest rate engine.
//!
//! This crate provides:
//!
//! - **Solvers**: 1-D root-finders ([`secant`](solvers::secant) and bracketed
//!   [`ridders`](solvers::ridders)) used for bootstrapping and calibration
//! - **Interpolation**: linear, linear-on-`x·y` and Bessel-Hermite cubic
//!   interpolators, plus a bilinear 2-D grid
//! - **Distributions**: the standard normal density and a double-precision
//!   cumulative distribution function
//!
//! All routines work on `f64` and allocate only at construction time.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]

pub mod distributions;
pub mod error;
pub mod interpolation;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::distributions::{cndf, ndf};
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{
        find_index, BesselHermite, Grid2d, Interpolator, LinearInterpolator, LinearXyInterpolator,
    };
    pub use crate::solvers::{ridders, secant, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
