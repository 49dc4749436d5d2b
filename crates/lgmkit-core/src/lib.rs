//! # lgmkit Core
//!
//! Calendar-side building blocks for the lgmkit interest rate engine.
//!
//! - **Types**: [`Date`] and [`Period`] (tenor labels such as `"6M"` or `"10Y"`)
//! - **Day Count Conventions**: year fractions between two dates
//! - **Business Day Calendars**: holiday predicates and date adjustment
//!
//! Everything downstream (curves, schedules, the LGM model) measures time as
//! a year fraction from a valuation date; [`time_from`] is the ACT/365
//! convention used for that purpose.
//!
//! ## Example
//!
//! ```rust
//! use lgmkit_core::prelude::*;
//!
//! let valuation = Date::from_ymd(2019, 1, 1).unwrap();
//! let expiry = valuation.add_months(12).unwrap();
//! assert!((time_from(valuation, expiry) - 1.0).abs() < 1e-12);
//!
//! let tenor: Period = "6M".parse().unwrap();
//! assert_eq!(tenor.to_years(), 0.5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::return_self_not_must_use)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::{time_from, Date, Period, PeriodUnit, MIN_TIME};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        BusinessDayConvention, Calendar, HolidayCalendar, TargetCalendar, WeekendCalendar,
    };
    pub use crate::daycounts::{Act360, Act365Fixed, DayCount, DayCountConvention, Thirty360E};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{time_from, Date, Period, PeriodUnit, MIN_TIME};
}
