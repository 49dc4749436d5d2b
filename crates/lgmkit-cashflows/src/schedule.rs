//! Schedule generation.
//!
//! Roll dates are whole multiples of the tenor from an anchor date:
//! backward from maturity (or the next-to-last date) by default, forward
//! from the effective date (or the first date) when the stub sits at the
//! end. The business-day adjustment only decides whether a rolled date
//! collides with an end point; the schedule itself stays unadjusted so that
//! period lengths remain exact tenor multiples.
//!
//! # Example
//!
//! ```rust
//! use lgmkit_cashflows::{Schedule, ScheduleConfig};
//! use lgmkit_core::Date;
//!
//! let config = ScheduleConfig::new(Date::from_ymd(1984, 1, 1).unwrap(), 12)
//!     .with_effective_date(Date::from_ymd(1980, 1, 1).unwrap());
//!
//! let schedule = Schedule::generate(&config, |d| d).unwrap();
//! assert_eq!(schedule.num_periods(), 4);
//! ```

use lgmkit_core::calendars::{BusinessDayConvention, Calendar};
use lgmkit_core::Date;

use crate::error::{CashFlowError, CashFlowResult};

/// Configuration for schedule generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleConfig {
    /// Start of the first accrual period. Optional when a valuation date
    /// anchors a backward roll.
    pub effective_date: Option<Date>,
    /// Final date of the schedule.
    pub maturity: Date,
    /// Tenor in months; 0 gives a single period.
    pub tenor_months: i32,
    /// Valuation date, used in place of a missing effective date.
    pub valuation_date: Option<Date>,
    /// Explicit end of a front stub.
    pub first_date: Option<Date>,
    /// Explicit start of a back stub.
    pub next_to_last_date: Option<Date>,
    /// Roll forward and leave the stub at the end.
    pub stub_at_end: bool,
    /// Merge the implicit stub into the adjacent regular period.
    pub stub_long: bool,
}

impl ScheduleConfig {
    /// Creates a configuration with a short front stub and no explicit dates.
    #[must_use]
    pub fn new(maturity: Date, tenor_months: i32) -> Self {
        Self {
            effective_date: None,
            maturity,
            tenor_months,
            valuation_date: None,
            first_date: None,
            next_to_last_date: None,
            stub_at_end: false,
            stub_long: false,
        }
    }

    /// Sets the effective date.
    #[must_use]
    pub fn with_effective_date(mut self, date: Date) -> Self {
        self.effective_date = Some(date);
        self
    }

    /// Sets the valuation date.
    #[must_use]
    pub fn with_valuation_date(mut self, date: Date) -> Self {
        self.valuation_date = Some(date);
        self
    }

    /// Sets the first date (end of the front stub).
    #[must_use]
    pub fn with_first_date(mut self, date: Date) -> Self {
        self.first_date = Some(date);
        self
    }

    /// Sets the next-to-last date (start of the back stub).
    #[must_use]
    pub fn with_next_to_last_date(mut self, date: Date) -> Self {
        self.next_to_last_date = Some(date);
        self
    }

    /// Places the implicit stub at the end.
    #[must_use]
    pub fn with_stub_at_end(mut self, stub_at_end: bool) -> Self {
        self.stub_at_end = stub_at_end;
        self
    }

    /// Makes the implicit stub long.
    #[must_use]
    pub fn with_stub_long(mut self, stub_long: bool) -> Self {
        self.stub_long = stub_long;
        self
    }

    fn validate(&self) -> CashFlowResult<Date> {
        if self.effective_date.is_none() {
            if self.first_date.is_some() {
                return Err(CashFlowError::MissingDate {
                    what: "effective date (required with a first date)",
                });
            }
            if self.stub_at_end && self.next_to_last_date.is_none() {
                return Err(CashFlowError::MissingDate {
                    what: "effective date (required for an implicit stub at the end)",
                });
            }
        }
        let anchor = self
            .effective_date
            .or(self.valuation_date)
            .ok_or(CashFlowError::MissingDate {
                what: "effective date or valuation date",
            })?;
        if self.maturity < anchor {
            return Err(CashFlowError::invalid_schedule(format!(
                "maturity {} is before {anchor}",
                self.maturity
            )));
        }
        if self.tenor_months < 0 {
            return Err(CashFlowError::InvalidTenor {
                tenor: self.tenor_months,
            });
        }
        Ok(anchor)
    }
}

/// Unadjusted roll dates plus their business-day adjusted counterparts.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    dates: Vec<Date>,
    adjusted: Vec<Date>,
}

impl Schedule {
    /// Generates a schedule, using `adjust` to detect end points that
    /// coincide with a rolled date after adjustment.
    ///
    /// # Errors
    ///
    /// Fails if maturity precedes the effective (or valuation) date, the
    /// tenor is negative, or no date is available to anchor the roll.
    pub fn generate<F>(config: &ScheduleConfig, adjust: F) -> CashFlowResult<Self>
    where
        F: Fn(Date) -> Date,
    {
        let anchor = config.validate()?;
        let tenor = config.tenor_months;
        let maturity = config.maturity;

        if tenor == 0 {
            return Ok(Self::from_dates(vec![anchor, maturity], &adjust));
        }

        let dates = match (config.first_date, config.next_to_last_date) {
            (Some(first), None) => {
                let mut dates = forward_rollout(first, maturity, tenor, &adjust)?;
                dates.push(maturity);
                if anchor != first {
                    dates.insert(0, anchor);
                }
                dates
            }
            (None, Some(next_to_last)) => {
                let mut dates = backward_rollout(anchor, next_to_last, tenor, &adjust)?;
                if maturity != next_to_last {
                    dates.push(maturity);
                }
                prepend_start(&mut dates, config.effective_date, next_to_last, tenor)?;
                dates
            }
            (Some(first), Some(next_to_last)) => {
                let mut dates = backward_rollout(first, next_to_last, tenor, &adjust)?;
                if maturity != next_to_last {
                    dates.push(maturity);
                }
                dates.insert(0, first);
                if anchor != first {
                    dates.insert(0, anchor);
                }
                dates
            }
            (None, None) if config.stub_at_end => {
                let mut dates = forward_rollout(anchor, maturity, tenor, &adjust)?;
                if config.stub_long && dates.len() > 1 {
                    dates.pop();
                }
                dates.push(maturity);
                dates
            }
            (None, None) => {
                let mut dates = backward_rollout(anchor, maturity, tenor, &adjust)?;
                if config.stub_long && dates.len() > 1 {
                    dates.remove(0);
                }
                prepend_start(&mut dates, config.effective_date, maturity, tenor)?;
                dates
            }
        };

        log::debug!(
            "generated schedule with {} dates ({} to {maturity}, tenor {tenor}M)",
            dates.len(),
            dates.first().copied().unwrap_or(maturity)
        );
        Ok(Self::from_dates(dates, &adjust))
    }

    /// Generates a schedule adjusted with `calendar` and `convention`.
    pub fn generate_with_calendar<C: Calendar + ?Sized>(
        config: &ScheduleConfig,
        calendar: &C,
        convention: BusinessDayConvention,
    ) -> CashFlowResult<Self> {
        Self::generate(config, |date| calendar.adjust(date, convention))
    }

    fn from_dates<F: Fn(Date) -> Date>(dates: Vec<Date>, adjust: &F) -> Self {
        let adjusted = dates.iter().map(|&d| adjust(d)).collect();
        Self { dates, adjusted }
    }

    /// Unadjusted schedule dates, used for accrual.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Adjusted schedule dates, used for payment.
    pub fn adjusted_dates(&self) -> &[Date] {
        &self.adjusted
    }

    /// Unadjusted accrual periods `(start, end)`.
    pub fn periods(&self) -> impl Iterator<Item = (Date, Date)> + '_ {
        self.dates.windows(2).map(|w| (w[0], w[1]))
    }

    /// Number of accrual periods.
    pub fn num_periods(&self) -> usize {
        self.dates.len().saturating_sub(1)
    }

    /// True if the schedule has no accrual period.
    pub fn is_empty(&self) -> bool {
        self.dates.len() < 2
    }
}

/// Dates `start + i·tenor` strictly before `end`, starting with `start`.
/// The last one is dropped if it adjusts onto or past `end`.
fn forward_rollout<F: Fn(Date) -> Date>(
    start: Date,
    end: Date,
    tenor: i32,
    adjust: &F,
) -> CashFlowResult<Vec<Date>> {
    let mut dates = vec![start];
    let mut i = 1;
    let mut date = start.add_months(tenor)?;
    while date < end {
        dates.push(date);
        i += 1;
        date = start.add_months(i * tenor)?;
    }
    if let Some(&last) = dates.last() {
        if adjust(end) <= adjust(last) {
            dates.pop();
        }
    }
    Ok(dates)
}

/// Dates `end - i·tenor` strictly after `start`, ending with `end`.
/// The first one is dropped if it adjusts onto or before `start`.
fn backward_rollout<F: Fn(Date) -> Date>(
    start: Date,
    end: Date,
    tenor: i32,
    adjust: &F,
) -> CashFlowResult<Vec<Date>> {
    let mut dates = vec![end];
    let mut i = 1;
    let mut date = end.add_months(-tenor)?;
    while date > start {
        dates.push(date);
        i += 1;
        date = end.add_months(-i * tenor)?;
    }
    dates.reverse();
    if adjust(start) >= adjust(dates[0]) {
        dates.remove(0);
    }
    Ok(dates)
}

/// Puts the effective date in front, or without one, a full period before
/// the first live roll date so the current accrual period is complete.
fn prepend_start(
    dates: &mut Vec<Date>,
    effective_date: Option<Date>,
    fallback: Date,
    tenor: i32,
) -> CashFlowResult<()> {
    let start = match effective_date {
        Some(date) => date,
        None => dates.first().copied().unwrap_or(fallback).add_months(-tenor)?,
    };
    dates.insert(0, start);
    Ok(())
}
