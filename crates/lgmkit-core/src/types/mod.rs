//! Domain types: dates, periods and the year-fraction clock.

mod date;
mod period;

pub use date::{time_from, Date, MIN_TIME};
pub use period::{Period, PeriodUnit};
