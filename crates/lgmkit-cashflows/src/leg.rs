//! Fixed and floating legs.
//!
//! A leg turns a [`Schedule`] into a [`CashFlows`] table: interest accrues
//! on the unadjusted period with the leg's day count and is paid on the
//! adjusted period end. Row 0 sits at the first schedule date with a zero
//! payment.

use lgmkit_core::daycounts::{DayCount, DayCountConvention};
use lgmkit_core::{time_from, Date};
use lgmkit_curves::YieldCurve;

use crate::cashflow::CashFlows;
use crate::error::{CashFlowError, CashFlowResult};
use crate::schedule::Schedule;

/// Principal profile shared by both leg types.
#[derive(Debug, Clone, PartialEq)]
struct Notional {
    amount: f64,
    /// Repayment at the end of each period; empty for a bullet.
    amortization: Vec<f64>,
    exchange: bool,
}

impl Notional {
    fn bullet(amount: f64) -> Self {
        Self {
            amount,
            amortization: Vec::new(),
            exchange: true,
        }
    }

    fn set_amortization(&mut self, repayments: Vec<f64>, periods: usize) -> CashFlowResult<()> {
        if repayments.len() != periods {
            return Err(CashFlowError::invalid_cash_flows(format!(
                "expected {periods} repayments, got {}",
                repayments.len()
            )));
        }
        if repayments.iter().any(|r| !r.is_finite() || *r < 0.0) {
            return Err(CashFlowError::invalid_cash_flows(
                "repayments must be finite and non-negative",
            ));
        }
        let total: f64 = repayments.iter().sum();
        if total > self.amount.abs() * (1.0 + 1e-12) {
            return Err(CashFlowError::invalid_cash_flows(format!(
                "repayments total {total} exceeds notional {}",
                self.amount
            )));
        }
        self.amortization = repayments;
        Ok(())
    }

    fn repayment(&self, period: usize) -> f64 {
        self.amortization.get(period).copied().unwrap_or(0.0)
    }
}

/// Builds the table, asking `rate` for each period's coupon rate.
fn build_cash_flows<F>(
    schedule: &Schedule,
    valuation: Date,
    notional: &Notional,
    day_count: DayCountConvention,
    mut rate: F,
) -> CashFlowResult<CashFlows>
where
    F: FnMut(Date, Date) -> CashFlowResult<f64>,
{
    let paid = schedule.adjusted_dates();
    let n = schedule.num_periods();
    if n == 0 {
        return Err(CashFlowError::invalid_schedule("leg needs at least one period"));
    }

    let mut t_pmt = Vec::with_capacity(n + 1);
    let mut pmt_total = Vec::with_capacity(n + 1);
    let mut pmt_interest = Vec::with_capacity(n + 1);
    let mut current_principal = Vec::with_capacity(n + 1);

    t_pmt.push(time_from(valuation, paid[0]));
    pmt_total.push(0.0);
    pmt_interest.push(0.0);
    current_principal.push(notional.amount);

    let sign = notional.amount.signum();
    let mut outstanding = notional.amount;
    for (i, (start, end)) in schedule.periods().enumerate() {
        let interest = outstanding * rate(start, end)? * day_count.year_fraction(start, end);
        let mut repay = sign * notional.repayment(i);
        if i + 1 == n && notional.exchange {
            repay = outstanding;
        }

        t_pmt.push(time_from(valuation, paid[i + 1]));
        pmt_interest.push(interest);
        pmt_total.push(interest + repay);
        current_principal.push(outstanding);
        outstanding -= sign * notional.repayment(i);
    }

    CashFlows::new(t_pmt, pmt_total, current_principal)?.with_interest(pmt_interest)
}

/// Sum of `principal × accrual × df` over periods paid after valuation.
fn annuity<C: YieldCurve + ?Sized>(
    cash_flows: &CashFlows,
    schedule: &Schedule,
    day_count: DayCountConvention,
    curve: &C,
) -> CashFlowResult<f64> {
    let mut annuity = 0.0;
    for (i, (start, end)) in schedule.periods().enumerate() {
        let t = cash_flows.t_pmt()[i + 1];
        if t <= 0.0 {
            continue;
        }
        annuity += cash_flows.current_principal()[i + 1]
            * day_count.year_fraction(start, end)
            * curve.get_df(t)?;
    }
    Ok(annuity)
}

/// Leg paying a fixed coupon rate.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedLeg {
    schedule: Schedule,
    notional: Notional,
    fixed_rate: f64,
    day_count: DayCountConvention,
}

impl FixedLeg {
    /// Bullet leg with notional exchange at maturity, accruing ACT/365.
    #[must_use]
    pub fn new(schedule: Schedule, notional: f64, fixed_rate: f64) -> Self {
        Self {
            schedule,
            notional: Notional::bullet(notional),
            fixed_rate,
            day_count: DayCountConvention::default(),
        }
    }

    /// Sets the accrual day count.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Whether the outstanding notional is paid at maturity (default true).
    #[must_use]
    pub fn with_notional_exchange(mut self, exchange: bool) -> Self {
        self.notional.exchange = exchange;
        self
    }

    /// Sets the principal repaid at the end of each period.
    ///
    /// # Errors
    ///
    /// Fails unless there is one non-negative repayment per period and the
    /// total does not exceed the notional.
    pub fn with_amortization(mut self, repayments: Vec<f64>) -> CashFlowResult<Self> {
        let periods = self.schedule.num_periods();
        self.notional.set_amortization(repayments, periods)?;
        Ok(self)
    }

    /// Underlying schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Initial notional.
    pub fn notional(&self) -> f64 {
        self.notional.amount
    }

    /// Coupon rate.
    pub fn fixed_rate(&self) -> f64 {
        self.fixed_rate
    }

    /// Accrual day count.
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Cash-flow table relative to `valuation`.
    pub fn cash_flows(&self, valuation: Date) -> CashFlowResult<CashFlows> {
        let rate = self.fixed_rate;
        build_cash_flows(
            &self.schedule,
            valuation,
            &self.notional,
            self.day_count,
            |_, _| Ok(rate),
        )
    }

    /// Present value of one unit of coupon rate over the future periods.
    pub fn annuity<C: YieldCurve + ?Sized>(&self, valuation: Date, curve: &C) -> CashFlowResult<f64> {
        let cash_flows = self.cash_flows(valuation)?;
        annuity(&cash_flows, &self.schedule, self.day_count, curve)
    }

    /// Present value of the future payments.
    pub fn present_value<C: YieldCurve + ?Sized>(
        &self,
        valuation: Date,
        curve: &C,
    ) -> CashFlowResult<f64> {
        self.cash_flows(valuation)?.present_value(curve)
    }
}

/// Leg paying a projected floating rate plus spread.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatLeg {
    schedule: Schedule,
    notional: Notional,
    spread: f64,
    current_rate: Option<f64>,
    day_count: DayCountConvention,
}

impl FloatLeg {
    /// Bullet leg with notional exchange at maturity, accruing ACT/365.
    #[must_use]
    pub fn new(schedule: Schedule, notional: f64, spread: f64) -> Self {
        Self {
            schedule,
            notional: Notional::bullet(notional),
            spread,
            current_rate: None,
            day_count: DayCountConvention::default(),
        }
    }

    /// Fixing for periods that started before the valuation date, spread
    /// included.
    #[must_use]
    pub fn with_current_rate(mut self, rate: f64) -> Self {
        self.current_rate = Some(rate);
        self
    }

    /// Sets the accrual day count.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Whether the outstanding notional is paid at maturity (default true).
    #[must_use]
    pub fn with_notional_exchange(mut self, exchange: bool) -> Self {
        self.notional.exchange = exchange;
        self
    }

    /// Sets the principal repaid at the end of each period.
    pub fn with_amortization(mut self, repayments: Vec<f64>) -> CashFlowResult<Self> {
        let periods = self.schedule.num_periods();
        self.notional.set_amortization(repayments, periods)?;
        Ok(self)
    }

    /// Underlying schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Spread over the projected rate.
    pub fn spread(&self) -> f64 {
        self.spread
    }

    /// Accrual day count.
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Cash-flow table with coupons projected off `fwd_curve`.
    ///
    /// Periods that started before `valuation` use the current rate when
    /// one is set.
    pub fn cash_flows<C: YieldCurve + ?Sized>(
        &self,
        valuation: Date,
        fwd_curve: &C,
    ) -> CashFlowResult<CashFlows> {
        build_cash_flows(
            &self.schedule,
            valuation,
            &self.notional,
            self.day_count,
            |start, end| match self.current_rate {
                Some(rate) if start < valuation => Ok(rate),
                _ => {
                    let fwd = fwd_curve
                        .get_fwd_rate(time_from(valuation, start), time_from(valuation, end))?;
                    Ok(fwd + self.spread)
                }
            },
        )
    }

    /// Present value of one unit of spread over the future periods.
    pub fn annuity<C: YieldCurve + ?Sized>(
        &self,
        valuation: Date,
        disc_curve: &C,
    ) -> CashFlowResult<f64> {
        let cash_flows = build_cash_flows(
            &self.schedule,
            valuation,
            &self.notional,
            self.day_count,
            |_, _| Ok(0.0),
        )?;
        annuity(&cash_flows, &self.schedule, self.day_count, disc_curve)
    }

    /// Present value of the future payments.
    pub fn present_value<D, F>(
        &self,
        valuation: Date,
        disc_curve: &D,
        fwd_curve: &F,
    ) -> CashFlowResult<f64>
    where
        D: YieldCurve + ?Sized,
        F: YieldCurve + ?Sized,
    {
        self.cash_flows(valuation, fwd_curve)?.present_value(disc_curve)
    }
}
