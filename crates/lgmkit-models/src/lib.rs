//! # lgmkit Models
//!
//! Option models for the lgmkit interest rate engine.
//!
//! This crate provides:
//!
//! - **Bachelier**: normal-volatility pricing of calls and puts, used for
//!   the market value of calibration swaptions
//! - **LGM**: the Linear Gauss-Markov one-factor model with Hull-White
//!   parametrization, swaption-basket calibration, European closed form and
//!   Bermudan backward induction
//! - **Call rights**: valuation of issuer calls on fixed cash flows
//! - **Scenarios**: parallel repricing under curve and surface shifts
//! - **Configuration**: TOML-loadable [`LgmConfig`]
//!
//! # Example
//!
//! ```rust
//! use lgmkit_cashflows::CashFlows;
//! use lgmkit_curves::Curve;
//! use lgmkit_models::{DiscountSpreads, LgmModel};
//!
//! let curve = Curve::constant(0.02).unwrap();
//! let cf = CashFlows::new(
//!     vec![0.0, 1.0, 2.0, 3.0],
//!     vec![0.0, 4.0, 4.0, 104.0],
//!     vec![100.0; 4],
//! )
//! .unwrap();
//!
//! let model = LgmModel::new(0.01).unwrap();
//! let call = model
//!     .european_call(&cf, 1.0, &curve, 1e-4, &DiscountSpreads::new())
//!     .unwrap();
//! assert!(call > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]

pub mod bachelier;
pub mod call;
pub mod config;
pub mod error;
pub mod lgm;
pub mod scenarios;
pub mod swaption;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bachelier::BachelierModel;
    pub use crate::call::{CallRight, CallValuation, ExerciseStyle, MarketData};
    pub use crate::config::{
        BreakEvenConfig, CalibrationConfig, CalibrationPolicy, GridConfig, LgmConfig,
    };
    pub use crate::error::{ModelError, ModelResult};
    pub use crate::lgm::{DiscountSpreads, LgmModel, ModelState};
    pub use crate::scenarios::{price_scenario, price_scenarios, BaseMarket, Scenario};
    pub use crate::swaption::{BasketSwaption, CalibrationInstrument, SwaptionQuote};
}

pub use bachelier::BachelierModel;
pub use call::{CallRight, CallValuation, ExerciseStyle, MarketData};
pub use config::{CalibrationPolicy, LgmConfig};
pub use error::{ModelError, ModelResult};
pub use lgm::{DiscountSpreads, LgmModel, ModelState};
pub use scenarios::{price_scenarios, BaseMarket, Scenario};
pub use swaption::{BasketSwaption, CalibrationInstrument, SwaptionQuote};
