//! Bachelier (normal) option model.
//!
//! Prices calls and puts on a normally distributed forward:
//!
//! ```text
//! V = φ(F - K)·N(φ·d) + σ√T·n(d),   d = (F - K) / (σ√T)
//! ```
//!
//! with `φ = 1` for a call and `φ = -1` for a put. Swaption volatilities are
//! quoted in this model.

use lgmkit_core::MIN_TIME;
use lgmkit_math::distributions::{cndf, ndf};

/// Below this standard deviation the option is worth its intrinsic value.
const MIN_STD_DEV: f64 = 1e-6;

/// Normal model for a single expiry.
///
/// # Example
///
/// ```rust
/// use lgmkit_models::BachelierModel;
///
/// let model = BachelierModel::new(1.0, 0.01);
/// let atm = model.call_price(0.02, 0.02);
/// assert!((atm - 0.01 / (2.0 * std::f64::consts::PI).sqrt()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BachelierModel {
    time: f64,
    std_dev: f64,
}

impl BachelierModel {
    /// Creates a model for expiry `time` (years) and normal `volatility`.
    #[must_use]
    pub fn new(time: f64, volatility: f64) -> Self {
        Self {
            time,
            std_dev: volatility * time.max(0.0).sqrt(),
        }
    }

    /// Terminal standard deviation `σ√T`.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Price of a call on `forward` struck at `strike`.
    pub fn call_price(&self, forward: f64, strike: f64) -> f64 {
        self.price(1.0, forward, strike)
    }

    /// Price of a put on `forward` struck at `strike`.
    pub fn put_price(&self, forward: f64, strike: f64) -> f64 {
        self.price(-1.0, forward, strike)
    }

    fn price(&self, phi: f64, forward: f64, strike: f64) -> f64 {
        if self.time < 0.0 {
            return 0.0;
        }
        if self.time < MIN_TIME || self.std_dev < MIN_STD_DEV {
            return (phi * (forward - strike)).max(0.0);
        }
        let d = (forward - strike) / self.std_dev;
        phi * (forward - strike) * cndf(phi * d) + self.std_dev * ndf(d)
    }
}
