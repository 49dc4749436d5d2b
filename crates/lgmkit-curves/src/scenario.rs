//! Scenario overlays for curves and surfaces.
//!
//! A [`ScenarioRule`] is compiled once into a [`CurveShift`] or
//! [`SurfaceShift`]. Base curves and surfaces are never modified: a shift
//! is paired with its base through a borrowed view ([`ScenarioCurve`],
//! [`ScenarioSurface`]) that implements the same lookup trait, so any
//! number of scenarios can be evaluated concurrently against one base.
//!
//! # Example
//!
//! ```rust
//! use lgmkit_curves::prelude::*;
//!
//! let base = Curve::constant(0.01).unwrap();
//! let rule = ScenarioRule {
//!     model: ScenarioModel::Additive,
//!     labels_x: vec!["1Y".into(), "10Y".into()],
//!     labels_y: Vec::new(),
//!     values: vec![vec![0.01, 0.01]],
//! };
//! let shift = CurveShift::new(&rule, &base).unwrap();
//!
//! let shocked = base.with_shift(&shift);
//! assert!((shocked.get_rate(5.0).unwrap() - 0.02).abs() < 1e-12);
//! assert!((base.get_rate(5.0).unwrap() - 0.01).abs() < 1e-12);
//! ```

use lgmkit_math::interpolation::Grid2d;
use serde::{Deserialize, Serialize};

use crate::compounding::Compounding;
use crate::curve::{labels_to_times, Curve};
use crate::error::{CurveError, CurveResult};
use crate::interpolation::InterpolationMode;
use crate::surface::{Surface, VolSurface};
use crate::traits::YieldCurve;

/// How a scenario value combines with the base value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioModel {
    /// `base + shift`
    Additive,
    /// `base * shift`
    Multiplicative,
    /// `shift` replaces the base value.
    Absolute,
}

impl ScenarioModel {
    /// Combines a base value with a scenario value.
    #[must_use]
    pub fn apply(self, base: f64, shift: f64) -> f64 {
        match self {
            Self::Additive => base + shift,
            Self::Multiplicative => base * shift,
            Self::Absolute => shift,
        }
    }
}

/// Scenario definition as supplied by a scenario container.
///
/// `labels_x` are term labels, `labels_y` expiry labels (surfaces only),
/// and `values` is indexed `[y][x]`. Curves use the first row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRule {
    /// Combination model.
    pub model: ScenarioModel,
    /// Term labels.
    pub labels_x: Vec<String>,
    /// Expiry labels.
    #[serde(default)]
    pub labels_y: Vec<String>,
    /// Scenario values, one row per expiry label.
    pub values: Vec<Vec<f64>>,
}

/// Compiled curve scenario: a mini-curve over the rule's term labels.
#[derive(Debug, Clone)]
pub struct CurveShift {
    model: ScenarioModel,
    curve: Curve,
}

impl CurveShift {
    /// Compiles `rule` for use on `base`.
    ///
    /// The mini-curve interpolates linearly on zero rates, except for an
    /// absolute rule, which reuses the base curve's interpolation,
    /// compounding and extrapolation so that an absolute rule carrying the
    /// base values reproduces the base exactly.
    ///
    /// # Errors
    ///
    /// Fails if the rule has no values, the first row does not match the
    /// labels, or a label cannot be parsed.
    pub fn new(rule: &ScenarioRule, base: &Curve) -> CurveResult<Self> {
        let row = rule
            .values
            .first()
            .ok_or(CurveError::MissingInput { what: "scenario values" })?;
        if row.len() != rule.labels_x.len() {
            return Err(CurveError::shape_mismatch(
                "scenario values",
                rule.labels_x.len(),
                row.len(),
            ));
        }

        let builder = Curve::builder()
            .times(labels_to_times(&rule.labels_x)?)
            .zcs(row.clone());
        let curve = match rule.model {
            ScenarioModel::Absolute => builder
                .interpolation(base.interpolation())
                .compounding(base.compounding())
                .short_end_flat(base.short_end_flat())
                .long_end_flat(base.long_end_flat())
                .build()?,
            _ => builder.interpolation(InterpolationMode::LinearZc).build()?,
        };

        Ok(Self {
            model: rule.model,
            curve,
        })
    }

    /// Combination model.
    pub fn model(&self) -> ScenarioModel {
        self.model
    }

    /// Applies the shift to `base_rate` at time `t`.
    pub fn apply(&self, base_rate: f64, t: f64) -> CurveResult<f64> {
        Ok(self.model.apply(base_rate, self.curve.get_rate(t)?))
    }
}

/// Compiled surface scenario: a grid over expiry labels × term labels.
#[derive(Debug, Clone)]
pub struct SurfaceShift {
    model: ScenarioModel,
    grid: Grid2d,
}

impl SurfaceShift {
    /// Compiles `rule` into an expiry × term grid.
    ///
    /// # Errors
    ///
    /// Fails on unparseable labels or a value matrix that does not match
    /// `labels_y.len()` rows by `labels_x.len()` columns.
    pub fn new(rule: &ScenarioRule) -> CurveResult<Self> {
        let expiries = labels_to_times(&rule.labels_y)?;
        let terms = labels_to_times(&rule.labels_x)?;
        Ok(Self {
            model: rule.model,
            grid: Grid2d::new(expiries, terms, rule.values.clone())?,
        })
    }

    /// Combination model.
    pub fn model(&self) -> ScenarioModel {
        self.model
    }

    /// Applies the shift to `base` at `(t_expiry, t_term)`.
    pub fn apply(&self, base: f64, t_expiry: f64, t_term: f64) -> f64 {
        self.model.apply(base, self.grid.value(t_expiry, t_term))
    }

    /// Applies the shift to `base` at `t_expiry` only, reading the rule's
    /// first term column.
    ///
    /// Strike surfaces have no term axis, so their shift is a function of
    /// expiry alone.
    pub fn apply_by_expiry(&self, base: f64, t_expiry: f64) -> f64 {
        let first_term = self.grid.x2()[0];
        self.model.apply(base, self.grid.value(t_expiry, first_term))
    }
}

/// A curve seen through an optional scenario shift.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioCurve<'a> {
    base: &'a Curve,
    shift: Option<&'a CurveShift>,
}

impl<'a> ScenarioCurve<'a> {
    /// Pairs `base` with `shift`; `None` is the unshifted curve.
    #[must_use]
    pub fn new(base: &'a Curve, shift: Option<&'a CurveShift>) -> Self {
        Self { base, shift }
    }

    /// Underlying curve.
    pub fn base(&self) -> &'a Curve {
        self.base
    }
}

impl YieldCurve for ScenarioCurve<'_> {
    fn get_rate(&self, t: f64) -> CurveResult<f64> {
        let rate = self.base.get_rate(t)?;
        match self.shift {
            Some(shift) => shift.apply(rate, t),
            None => Ok(rate),
        }
    }

    fn compounding(&self) -> Compounding {
        self.base.compounding()
    }
}

/// A surface seen through an optional scenario shift.
///
/// The shift acts on the grid value; a smile is added afterwards.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioSurface<'a> {
    base: &'a Surface,
    shift: Option<&'a SurfaceShift>,
}

impl<'a> ScenarioSurface<'a> {
    /// Pairs `base` with `shift`; `None` is the unshifted surface.
    #[must_use]
    pub fn new(base: &'a Surface, shift: Option<&'a SurfaceShift>) -> Self {
        Self { base, shift }
    }

    /// Underlying surface.
    pub fn base(&self) -> &'a Surface {
        self.base
    }
}

impl VolSurface for ScenarioSurface<'_> {
    fn get_rate(&self, t_expiry: f64, t_term: f64, fwd: f64, strike: f64) -> f64 {
        self.base
            .rate_with_shift(t_expiry, t_term, fwd, strike, self.shift)
    }
}
