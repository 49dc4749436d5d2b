//! 30E/360 (Eurobond basis).

use super::DayCount;
use crate::types::Date;

/// 30E/360: day 31 is treated as day 30 on both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360E;

impl DayCount for Thirty360E {
    fn name(&self) -> &'static str {
        "30E/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 360.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let d1 = i64::from(start.day().min(30));
        let d2 = i64::from(end.day().min(30));
        let months = i64::from(end.month()) - i64::from(start.month());
        let years = i64::from(end.year() - start.year());
        360 * years + 30 * months + (d2 - d1)
    }
}
