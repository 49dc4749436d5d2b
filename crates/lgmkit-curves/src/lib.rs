//! # lgmkit Curves
//!
//! Term structures for the lgmkit interest rate engine.
//!
//! This crate provides:
//!
//! - **Curves**: zero-rate curves with four interpolation laws, annual or
//!   continuous compounding and configurable flat extrapolation
//! - **Surfaces**: volatility grids over expiry and term, relative or
//!   absolute strike, with an optional additive smile
//! - **Scenarios**: additive, multiplicative and absolute overlays applied
//!   through borrowed views, leaving base objects untouched
//!
//! Times are year fractions on the ACT/365 clock measured from the
//! valuation date.
//!
//! # Example
//!
//! ```rust
//! use lgmkit_curves::prelude::*;
//!
//! let curve = Curve::constant(0.02).unwrap();
//! let df = curve.get_df(1.0).unwrap();
//! assert!((df - 1.0 / 1.02).abs() < 1e-12);
//!
//! let surface = Surface::constant(0.005).unwrap();
//! assert_eq!(surface.get_rate(1.0, 5.0, 0.02, 0.02), 0.005);
//! ```

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
#![allow(clippy::float_cmp)]

pub mod compounding;
pub mod curve;
pub mod error;
pub mod interpolation;
pub mod scenario;
pub mod surface;
pub mod traits;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::compounding::Compounding;
    pub use crate::curve::{add_curves, labels_to_times, Curve, CurveBuilder};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::interpolation::InterpolationMode;
    pub use crate::scenario::{
        CurveShift, ScenarioCurve, ScenarioModel, ScenarioRule, ScenarioSurface, SurfaceShift,
    };
    pub use crate::surface::{Surface, SurfaceKind, VolSurface};
    pub use crate::traits::YieldCurve;
}

pub use compounding::Compounding;
pub use curve::{add_curves, Curve, CurveBuilder};
pub use error::{CurveError, CurveResult};
pub use interpolation::InterpolationMode;
pub use scenario::{CurveShift, ScenarioCurve, ScenarioModel, ScenarioRule, ScenarioSurface, SurfaceShift};
pub use surface::{Surface, SurfaceKind, VolSurface};
pub use traits::YieldCurve;
