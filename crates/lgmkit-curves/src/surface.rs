//! Volatility surfaces.
//!
//! A [`Surface`] is a bilinear grid over expiry and a second axis whose
//! meaning depends on its [`SurfaceKind`]:
//!
//! | Kind | Second axis | Smile |
//! |------|-------------|-------|
//! | `ExpiryTerm` | underlying term | optional, additive over `strike - fwd` |
//! | `ExpiryRelStrike` | `strike - fwd` | no |
//! | `ExpiryAbsStrike` | `strike` | no |
//!
//! Lookups clamp to the grid on each axis, so extrapolation is flat.

use lgmkit_math::interpolation::{find_index, Grid2d};
use serde::{Deserialize, Serialize};

use crate::curve::labels_to_times;
use crate::error::{check_increasing, CurveError, CurveResult};
use crate::scenario::{ScenarioSurface, SurfaceShift};

/// Axis layout of a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    /// Expiry × underlying term, optionally with a smile.
    #[default]
    ExpiryTerm,
    /// Expiry × relative strike (`strike - fwd`).
    ExpiryRelStrike,
    /// Expiry × absolute strike.
    ExpiryAbsStrike,
}

/// Volatility lookup shared by [`Surface`] and its scenario view.
pub trait VolSurface: Send + Sync {
    /// Volatility for an option expiring at `t_expiry` on an underlying with
    /// term `t_term`, forward `fwd` and strike `strike`.
    ///
    /// Arguments a surface kind does not use are ignored.
    fn get_rate(&self, t_expiry: f64, t_term: f64, fwd: f64, strike: f64) -> f64;
}

#[derive(Debug, Clone)]
struct SmileSection {
    moneyness: f64,
    grid: Grid2d,
}

/// Volatility surface with an optional additive smile.
#[derive(Debug, Clone)]
pub struct Surface {
    kind: SurfaceKind,
    grid: Grid2d,
    smile: Vec<SmileSection>,
}

impl Surface {
    /// Expiry × term surface.
    ///
    /// # Errors
    ///
    /// Fails if either axis is empty or not strictly increasing, or if
    /// `values` is not `expiries.len()` rows of `terms.len()` numbers.
    pub fn expiry_term(
        expiries: Vec<f64>,
        terms: Vec<f64>,
        values: Vec<Vec<f64>>,
    ) -> CurveResult<Self> {
        Self::new(SurfaceKind::ExpiryTerm, expiries, terms, values)
    }

    /// Expiry × term surface from period labels.
    pub fn expiry_term_from_labels<S: AsRef<str>>(
        labels_expiry: &[S],
        labels_term: &[S],
        values: Vec<Vec<f64>>,
    ) -> CurveResult<Self> {
        Self::expiry_term(
            labels_to_times(labels_expiry)?,
            labels_to_times(labels_term)?,
            values,
        )
    }

    /// Expiry × relative strike surface.
    pub fn expiry_rel_strike(
        expiries: Vec<f64>,
        moneyness: Vec<f64>,
        values: Vec<Vec<f64>>,
    ) -> CurveResult<Self> {
        Self::new(SurfaceKind::ExpiryRelStrike, expiries, moneyness, values)
    }

    /// Expiry × absolute strike surface.
    pub fn expiry_abs_strike(
        expiries: Vec<f64>,
        strikes: Vec<f64>,
        values: Vec<Vec<f64>>,
    ) -> CurveResult<Self> {
        Self::new(SurfaceKind::ExpiryAbsStrike, expiries, strikes, values)
    }

    /// Surface returning `value` everywhere.
    pub fn constant(value: f64) -> CurveResult<Self> {
        Self::expiry_term(vec![1.0], vec![1.0], vec![vec![value]])
    }

    /// Surface of the given kind.
    pub fn new(
        kind: SurfaceKind,
        expiries: Vec<f64>,
        second_axis: Vec<f64>,
        values: Vec<Vec<f64>>,
    ) -> CurveResult<Self> {
        check_increasing(&expiries)?;
        check_increasing(&second_axis)?;
        if values.len() != expiries.len() {
            return Err(CurveError::shape_mismatch(
                "surface rows",
                expiries.len(),
                values.len(),
            ));
        }
        if let Some(row) = values.iter().find(|row| row.len() != second_axis.len()) {
            return Err(CurveError::shape_mismatch(
                "surface columns",
                second_axis.len(),
                row.len(),
            ));
        }
        Ok(Self {
            kind,
            grid: Grid2d::new(expiries, second_axis, values)?,
            smile: Vec::new(),
        })
    }

    /// Attaches a smile: one section per moneyness node (`strike - fwd`).
    ///
    /// Sections contribute only their own grid; a section's smile is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Fails unless the surface is `ExpiryTerm`, the lengths match and
    /// `moneyness` is strictly increasing.
    pub fn with_smile(mut self, moneyness: Vec<f64>, sections: Vec<Surface>) -> CurveResult<Self> {
        if self.kind != SurfaceKind::ExpiryTerm {
            return Err(CurveError::invalid_value(
                "only expiry/term surfaces carry a smile",
            ));
        }
        if moneyness.len() != sections.len() {
            return Err(CurveError::shape_mismatch(
                "smile sections",
                moneyness.len(),
                sections.len(),
            ));
        }
        check_increasing(&moneyness)?;
        self.smile = moneyness
            .into_iter()
            .zip(sections)
            .map(|(moneyness, section)| SmileSection {
                moneyness,
                grid: section.grid,
            })
            .collect();
        Ok(self)
    }

    /// Axis layout.
    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    /// Expiry axis.
    pub fn expiries(&self) -> &[f64] {
        self.grid.x1()
    }

    /// Second axis (terms, relative or absolute strikes).
    pub fn second_axis(&self) -> &[f64] {
        self.grid.x2()
    }

    /// Whether a smile is attached.
    pub fn has_smile(&self) -> bool {
        !self.smile.is_empty()
    }

    /// Raw grid lookup, no smile and no scenario.
    pub fn get_surface_rate(&self, t_expiry: f64, x: f64) -> f64 {
        self.grid.value(t_expiry, x)
    }

    /// View of this surface under a scenario shift.
    #[must_use]
    pub fn with_shift<'a>(&'a self, shift: &'a SurfaceShift) -> ScenarioSurface<'a> {
        ScenarioSurface::new(self, Some(shift))
    }

    pub(crate) fn rate_with_shift(
        &self,
        t_expiry: f64,
        t_term: f64,
        fwd: f64,
        strike: f64,
        shift: Option<&SurfaceShift>,
    ) -> f64 {
        let x = match self.kind {
            SurfaceKind::ExpiryTerm => t_term,
            SurfaceKind::ExpiryRelStrike => strike - fwd,
            SurfaceKind::ExpiryAbsStrike => strike,
        };
        let mut rate = self.grid.value(t_expiry, x);
        if let Some(shift) = shift {
            rate = match self.kind {
                SurfaceKind::ExpiryTerm => shift.apply(rate, t_expiry, t_term),
                SurfaceKind::ExpiryRelStrike | SurfaceKind::ExpiryAbsStrike => {
                    shift.apply_by_expiry(rate, t_expiry)
                }
            };
        }
        if self.smile.is_empty() {
            return rate;
        }
        rate + self.smile_rate(t_expiry, t_term, strike - fwd)
    }

    fn smile_rate(&self, t_expiry: f64, t_term: f64, m: f64) -> f64 {
        let n = self.smile.len();
        let first = &self.smile[0];
        let last = &self.smile[n - 1];
        if n == 1 || m <= first.moneyness {
            return first.grid.value(t_expiry, t_term);
        }
        if m >= last.moneyness {
            return last.grid.value(t_expiry, t_term);
        }

        let nodes: Vec<f64> = self.smile.iter().map(|s| s.moneyness).collect();
        let i = find_index(&nodes, m);
        let (lo, hi) = (&self.smile[i], &self.smile[i + 1]);
        let w = (m - lo.moneyness) / (hi.moneyness - lo.moneyness);
        (1.0 - w) * lo.grid.value(t_expiry, t_term) + w * hi.grid.value(t_expiry, t_term)
    }
}

impl VolSurface for Surface {
    fn get_rate(&self, t_expiry: f64, t_term: f64, fwd: f64, strike: f64) -> f64 {
        self.rate_with_shift(t_expiry, t_term, fwd, strike, None)
    }
}
