//! Cash-flow tables.

use lgmkit_curves::YieldCurve;
use lgmkit_math::solvers::{secant, SolverConfig};

use crate::error::{CashFlowError, CashFlowResult};

/// Payment stream on the model time axis.
///
/// Parallel arrays ordered by non-decreasing payment time:
///
/// * `t_pmt` - year fraction from the valuation date (negative for past
///   payments)
/// * `pmt_total` - signed payment amount
/// * `current_principal` - notional outstanding over the accrual period
///   that ends with this payment
/// * `pmt_interest` - optional interest part of each payment; when present,
///   exercising between two payments also settles accrued interest
///
/// The first row usually sits at the start of the first accrual period with
/// a zero payment, so that every later payment has a predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlows {
    t_pmt: Vec<f64>,
    pmt_total: Vec<f64>,
    current_principal: Vec<f64>,
    pmt_interest: Option<Vec<f64>>,
}

impl CashFlows {
    /// Creates a cash-flow table.
    ///
    /// # Errors
    ///
    /// Fails on arrays of different lengths, non-finite entries or
    /// decreasing payment times.
    pub fn new(
        t_pmt: Vec<f64>,
        pmt_total: Vec<f64>,
        current_principal: Vec<f64>,
    ) -> CashFlowResult<Self> {
        let n = t_pmt.len();
        if pmt_total.len() != n || current_principal.len() != n {
            return Err(CashFlowError::invalid_cash_flows(format!(
                "length mismatch: {n} times, {} payments, {} principals",
                pmt_total.len(),
                current_principal.len()
            )));
        }
        check_finite("t_pmt", &t_pmt)?;
        check_finite("pmt_total", &pmt_total)?;
        check_finite("current_principal", &current_principal)?;
        if let Some(i) = t_pmt.windows(2).position(|w| w[1] < w[0]) {
            return Err(CashFlowError::invalid_cash_flows(format!(
                "payment times decrease at index {}",
                i + 1
            )));
        }
        Ok(Self {
            t_pmt,
            pmt_total,
            current_principal,
            pmt_interest: None,
        })
    }

    /// Attaches the interest part of each payment.
    pub fn with_interest(mut self, pmt_interest: Vec<f64>) -> CashFlowResult<Self> {
        if pmt_interest.len() != self.t_pmt.len() {
            return Err(CashFlowError::invalid_cash_flows(format!(
                "expected {} interest payments, got {}",
                self.t_pmt.len(),
                pmt_interest.len()
            )));
        }
        check_finite("pmt_interest", &pmt_interest)?;
        self.pmt_interest = Some(pmt_interest);
        Ok(self)
    }

    /// Payment times.
    pub fn t_pmt(&self) -> &[f64] {
        &self.t_pmt
    }

    /// Total payment amounts.
    pub fn pmt_total(&self) -> &[f64] {
        &self.pmt_total
    }

    /// Outstanding principal per accrual period.
    pub fn current_principal(&self) -> &[f64] {
        &self.current_principal
    }

    /// Interest part of each payment, if known.
    pub fn pmt_interest(&self) -> Option<&[f64]> {
        self.pmt_interest.as_deref()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.t_pmt.len()
    }

    /// True if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.t_pmt.is_empty()
    }

    /// Index of the first payment strictly after `t`, or `len()` if none.
    pub fn first_after(&self, t: f64) -> usize {
        self.t_pmt.partition_point(|&tp| tp <= t)
    }

    /// Present value of all future payments (`t_pmt > 0`).
    pub fn present_value<C: YieldCurve + ?Sized>(&self, curve: &C) -> CashFlowResult<f64> {
        self.present_value_after(curve, 0.0)
    }

    /// Present value, as of the valuation date, of the payments strictly
    /// after `t`.
    pub fn present_value_after<C: YieldCurve + ?Sized>(
        &self,
        curve: &C,
        t: f64,
    ) -> CashFlowResult<f64> {
        self.present_value_after_spread(curve, t, 0.0)
    }

    /// Like [`present_value_after`](Self::present_value_after), with each
    /// discount factor scaled by `(1 + residual_spread)^-t`.
    pub fn present_value_after_spread<C: YieldCurve + ?Sized>(
        &self,
        curve: &C,
        t: f64,
        residual_spread: f64,
    ) -> CashFlowResult<f64> {
        let start = self.first_after(t.max(0.0));
        let mut pv = 0.0;
        for (tp, amount) in self.t_pmt[start..].iter().zip(&self.pmt_total[start..]) {
            pv += amount * curve.get_df(*tp)? * (1.0 + residual_spread).powf(-tp);
        }
        Ok(pv)
    }

    /// Internal rate of return, annually compounded.
    ///
    /// Solves for the rate at which the payments after `t_settlement`,
    /// together with `payment_on_settlement` made at `t_settlement`, have
    /// zero present value. A purchase at price `P` is a settlement payment
    /// of `-P`.
    ///
    /// # Errors
    ///
    /// Fails if the secant iteration does not converge.
    pub fn irr(&self, t_settlement: f64, payment_on_settlement: f64) -> CashFlowResult<f64> {
        let start = self.first_after(t_settlement.max(0.0));
        let flows: Vec<(f64, f64)> = self.t_pmt[start..]
            .iter()
            .copied()
            .zip(self.pmt_total[start..].iter().copied())
            .collect();
        let npv = |x: f64| {
            let pv: f64 = flows.iter().map(|(t, amount)| amount * (1.0 + x).powf(-t)).sum();
            pv + payment_on_settlement * (1.0 + x).powf(-t_settlement)
        };
        let result = secant(npv, 0.0, 1e-4, &SolverConfig::default())?;
        Ok(result.root)
    }
}

fn check_finite(what: &str, values: &[f64]) -> CashFlowResult<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(CashFlowError::invalid_cash_flows(format!(
            "{what}[{i}] is not finite"
        ))),
        None => Ok(()),
    }
}
