//! Core trait for discount curves.

use lgmkit_core::MIN_TIME;

use crate::compounding::Compounding;
use crate::error::CurveResult;

/// A zero-rate term structure on the ACT/365 clock.
///
/// Implementors supply [`get_rate`](YieldCurve::get_rate) and their
/// [`compounding`](YieldCurve::compounding); discount factors and forward
/// quantities are derived from those two.
///
/// Both [`Curve`](crate::Curve) and its scenario view
/// [`ScenarioCurve`](crate::ScenarioCurve) implement this trait, so pricing
/// code is written once against `&dyn YieldCurve`.
pub trait YieldCurve: Send + Sync {
    /// Zero rate at time `t`.
    fn get_rate(&self, t: f64) -> CurveResult<f64>;

    /// Compounding convention of [`get_rate`](YieldCurve::get_rate).
    fn compounding(&self) -> Compounding;

    /// Discount factor at time `t`; exactly 1 for `t` below [`MIN_TIME`].
    fn get_df(&self, t: f64) -> CurveResult<f64> {
        if t < MIN_TIME {
            return Ok(1.0);
        }
        Ok(self.compounding().discount_factor(self.get_rate(t)?, t))
    }

    /// Forward amount `df(t1) / df(t2) - 1`, 0 if `t2 - t1` is below
    /// [`MIN_TIME`].
    fn get_fwd_amount(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        if t2 - t1 < MIN_TIME {
            return Ok(0.0);
        }
        Ok(self.get_df(t1)? / self.get_df(t2)? - 1.0)
    }

    /// Annually compounded forward rate between `t1` and `t2`, 0 if the
    /// interval is below [`MIN_TIME`].
    fn get_fwd_rate(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        if t2 - t1 < MIN_TIME {
            return Ok(0.0);
        }
        let ratio = self.get_df(t1)? / self.get_df(t2)?;
        Ok(ratio.powf(1.0 / (t2 - t1)) - 1.0)
    }
}
