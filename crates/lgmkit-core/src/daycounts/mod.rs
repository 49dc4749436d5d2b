//! Day count conventions.
//!
//! Coupon accruals use the leg's convention; curve and model time always
//! runs on ACT/365 (see [`crate::time_from`]).

mod act;
mod thirty360;

pub use act::{Act360, Act365Fixed};
pub use thirty360::Thirty360E;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::Date;

/// Trait for day count conventions.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Counts days between two dates according to the convention.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Closed set of supported conventions, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// Actual/365 Fixed.
    #[default]
    #[serde(rename = "ACT/365")]
    Act365Fixed,
    /// Actual/360.
    #[serde(rename = "ACT/360")]
    Act360,
    /// 30E/360 (Eurobond basis).
    #[serde(rename = "30E/360")]
    Thirty360E,
}

impl DayCount for DayCountConvention {
    fn name(&self) -> &'static str {
        match self {
            Self::Act365Fixed => Act365Fixed.name(),
            Self::Act360 => Act360.name(),
            Self::Thirty360E => Thirty360E.name(),
        }
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        match self {
            Self::Act365Fixed => Act365Fixed.year_fraction(start, end),
            Self::Act360 => Act360.year_fraction(start, end),
            Self::Thirty360E => Thirty360E.year_fraction(start, end),
        }
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        match self {
            Self::Act365Fixed => Act365Fixed.day_count(start, end),
            Self::Act360 => Act360.day_count(start, end),
            Self::Thirty360E => Thirty360E.day_count(start, end),
        }
    }
}

impl FromStr for DayCountConvention {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "a/365" | "act/365" | "actual/365" | "act/365f" => Ok(Self::Act365Fixed),
            "a/360" | "act/360" | "actual/360" => Ok(Self::Act360),
            "30e/360" | "30/360" => Ok(Self::Thirty360E),
            _ => Err(CoreError::unknown_convention("day count", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_convention_dispatch() {
        let start = Date::from_ymd(2025, 1, 15).unwrap();
        let end = Date::from_ymd(2025, 7, 15).unwrap();

        let dc: DayCountConvention = "act/360".parse().unwrap();
        assert_eq!(dc, DayCountConvention::Act360);
        assert_relative_eq!(dc.year_fraction(start, end), 181.0 / 360.0);
        assert_eq!(dc.name(), "ACT/360");

        let dc: DayCountConvention = "30E/360".parse().unwrap();
        assert_relative_eq!(dc.year_fraction(start, end), 0.5);
    }

    #[test]
    fn test_unknown_convention() {
        assert!("ACT/999".parse::<DayCountConvention>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&DayCountConvention::Act365Fixed).unwrap();
        assert_eq!(json, "\"ACT/365\"");
    }
}
