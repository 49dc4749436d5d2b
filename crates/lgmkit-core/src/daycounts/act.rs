//! Actual/365 Fixed and Actual/360.

use super::DayCount;
use crate::types::Date;

/// Actual/365 Fixed: actual days over a 365-day year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        start.days_between(&end) as f64 / 365.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual/360: actual days over a 360-day year (money market basis).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        start.days_between(&end) as f64 / 360.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}
