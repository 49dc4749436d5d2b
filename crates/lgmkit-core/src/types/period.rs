//! Period labels such as `"3M"`, `"10Y"` or `"2W"`.
//!
//! Labels are how market data usually names curve pillars and surface
//! axes. A label converts to a year fraction (years as-is, months / 12,
//! weeks / 52, days / 365) or rolls a date forward.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Date;
use crate::error::{CoreError, CoreResult};

/// Unit of a [`Period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodUnit {
    /// Calendar days.
    Days,
    /// Weeks of seven days.
    Weeks,
    /// Calendar months.
    Months,
    /// Calendar years.
    Years,
}

impl PeriodUnit {
    fn suffix(self) -> char {
        match self {
            Self::Days => 'D',
            Self::Weeks => 'W',
            Self::Months => 'M',
            Self::Years => 'Y',
        }
    }
}

/// A signed period, e.g. `Period::new(6, PeriodUnit::Months)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// Number of units.
    pub amount: i32,
    /// The unit.
    pub unit: PeriodUnit,
}

impl Period {
    /// Creates a new period.
    #[must_use]
    pub const fn new(amount: i32, unit: PeriodUnit) -> Self {
        Self { amount, unit }
    }

    /// Year fraction represented by the period.
    #[must_use]
    pub fn to_years(&self) -> f64 {
        let n = f64::from(self.amount);
        match self.unit {
            PeriodUnit::Years => n,
            PeriodUnit::Months => n / 12.0,
            PeriodUnit::Weeks => n / 52.0,
            PeriodUnit::Days => n / 365.0,
        }
    }

    /// Rolls `date` by this period (month arithmetic clamps to month end).
    pub fn add_to(&self, date: Date) -> CoreResult<Date> {
        match self.unit {
            PeriodUnit::Years => date.add_months(12 * self.amount),
            PeriodUnit::Months => date.add_months(self.amount),
            PeriodUnit::Weeks => Ok(date.add_days(7 * i64::from(self.amount))),
            PeriodUnit::Days => Ok(date.add_days(i64::from(self.amount))),
        }
    }

    /// Parses a label and returns its year fraction.
    pub fn years_from_label(label: &str) -> CoreResult<f64> {
        label.parse::<Period>().map(|p| p.to_years())
    }
}

impl FromStr for Period {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let mut chars = label.chars();
        let unit = match chars.next_back().map(|c| c.to_ascii_uppercase()) {
            Some('Y') => PeriodUnit::Years,
            Some('M') => PeriodUnit::Months,
            Some('W') => PeriodUnit::Weeks,
            Some('D') => PeriodUnit::Days,
            _ => return Err(CoreError::invalid_period(s)),
        };
        let amount = chars
            .as_str()
            .parse::<i32>()
            .map_err(|_| CoreError::invalid_period(s))?;
        Ok(Self::new(amount, unit))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_labels() {
        assert_eq!("10Y".parse::<Period>().unwrap(), Period::new(10, PeriodUnit::Years));
        assert_eq!("6m".parse::<Period>().unwrap(), Period::new(6, PeriodUnit::Months));
        assert_eq!("-2W".parse::<Period>().unwrap(), Period::new(-2, PeriodUnit::Weeks));
        assert_eq!("0Y".parse::<Period>().unwrap().to_years(), 0.0);
    }

    #[test]
    fn test_invalid_labels() {
        assert!("Y".parse::<Period>().is_err());
        assert!("5Q".parse::<Period>().is_err());
        assert!("".parse::<Period>().is_err());
        assert!("1.5Y".parse::<Period>().is_err());
    }

    #[test]
    fn test_year_fractions() {
        assert_relative_eq!(Period::years_from_label("18M").unwrap(), 1.5);
        assert_relative_eq!(Period::years_from_label("26W").unwrap(), 0.5);
        assert_relative_eq!(Period::years_from_label("73D").unwrap(), 0.2);
    }

    #[test]
    fn test_add_to_date() {
        let start = Date::from_ymd(2020, 8, 31).unwrap();
        let p: Period = "6M".parse().unwrap();
        assert_eq!(p.add_to(start).unwrap(), Date::from_ymd(2021, 2, 28).unwrap());
        let w: Period = "1W".parse().unwrap();
        assert_eq!(w.add_to(start).unwrap(), Date::from_ymd(2020, 9, 7).unwrap());
    }

    #[test]
    fn test_display_round_trip() {
        let p = Period::new(30, PeriodUnit::Years);
        assert_eq!(p.to_string(), "30Y");
        assert_eq!(p.to_string().parse::<Period>().unwrap(), p);
    }
}
