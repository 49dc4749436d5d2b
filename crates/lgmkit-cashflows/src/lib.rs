//! # lgmkit Cash Flows
//!
//! Payment streams for the lgmkit interest rate engine.
//!
//! This crate provides:
//!
//! - **Schedules**: forward and backward roll-outs with implicit or explicit
//!   stubs, anchored on an effective or valuation date
//! - **Cash-flow tables**: the [`CashFlows`] arrays consumed by the LGM model
//! - **Legs**: fixed and floating legs with optional amortisation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

pub mod cashflow;
pub mod error;
pub mod leg;
pub mod schedule;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflow::CashFlows;
    pub use crate::error::{CashFlowError, CashFlowResult};
    pub use crate::leg::{FixedLeg, FloatLeg};
    pub use crate::schedule::{Schedule, ScheduleConfig};
}

pub use cashflow::CashFlows;
pub use error::{CashFlowError, CashFlowResult};
pub use leg::{FixedLeg, FloatLeg};
pub use schedule::{Schedule, ScheduleConfig};
