//! LGM model configuration.
//!
//! Settings load from TOML; every table and key is optional:
//!
//! ```toml
//! mean_reversion = 0.03
//!
//! [grid]
//! std_dev_range = 6
//! resolution = 12
//!
//! [calibration]
//! policy = "lenient"
//! ```

use std::path::Path;

use lgmkit_math::solvers::SolverConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// What calibration does when a basket instrument cannot be matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalibrationPolicy {
    /// Root-finding failures and decreasing variance are errors.
    #[default]
    Strict,
    /// Fall back to the closer of the initial guess and zero variance, and
    /// carry the previous variance forward when it would decrease.
    Lenient,
}

/// State grid of the Bermudan backward induction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Half-width of the grid in standard deviations.
    pub std_dev_range: u32,
    /// Nodes per standard deviation.
    pub resolution: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            std_dev_range: 6,
            resolution: 12,
        }
    }
}

impl GridConfig {
    /// Number of state nodes, `2·range·resolution + 1`.
    pub fn size(&self) -> usize {
        2 * self.std_dev_range as usize * self.resolution as usize + 1
    }
}

/// Calibration loop settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    /// Ridders iterations per basket instrument.
    pub max_iterations: u32,
    /// How often the initial variance guess may be doubled to bracket the
    /// target.
    pub max_doublings: u32,
    /// Failure handling.
    pub policy: CalibrationPolicy,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            max_doublings: 10,
            policy: CalibrationPolicy::Strict,
        }
    }
}

/// Break-even search of the European closed form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakEvenConfig {
    /// Ridders iterations.
    pub max_iterations: u32,
    /// Absolute tolerance on the reduced value.
    pub tolerance: f64,
}

impl Default for BreakEvenConfig {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            tolerance: 1e-8,
        }
    }
}

/// Complete LGM model configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LgmConfig {
    /// Mean reversion speed `a`, at least 0.
    pub mean_reversion: f64,
    /// Flat Hull-White volatility; when set, calibration is bypassed.
    pub hull_white_volatility: Option<f64>,
    /// Bermudan state grid.
    pub grid: GridConfig,
    /// Calibration settings.
    pub calibration: CalibrationConfig,
    /// European break-even search.
    pub break_even: BreakEvenConfig,
}

impl LgmConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> ModelResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ModelError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ModelResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ModelError::config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> ModelResult<String> {
        toml::to_string(self).map_err(|e| ModelError::config(e.to_string()))
    }

    /// Checks every setting is in range.
    pub fn validate(&self) -> ModelResult<()> {
        if !self.mean_reversion.is_finite() || self.mean_reversion < 0.0 {
            return Err(ModelError::invalid_parameter(format!(
                "mean reversion must be finite and non-negative, got {}",
                self.mean_reversion
            )));
        }
        if let Some(vol) = self.hull_white_volatility {
            if !vol.is_finite() || vol < 0.0 {
                return Err(ModelError::invalid_parameter(format!(
                    "Hull-White volatility must be finite and non-negative, got {vol}"
                )));
            }
        }
        if self.grid.std_dev_range == 0 || self.grid.resolution == 0 {
            return Err(ModelError::invalid_parameter(
                "grid range and resolution must be positive",
            ));
        }
        if self.calibration.max_iterations == 0 || self.break_even.max_iterations == 0 {
            return Err(ModelError::invalid_parameter(
                "solver iteration limits must be positive",
            ));
        }
        if self.break_even.tolerance.is_nan() || self.break_even.tolerance <= 0.0 {
            return Err(ModelError::invalid_parameter(format!(
                "break-even tolerance must be positive, got {}",
                self.break_even.tolerance
            )));
        }
        Ok(())
    }

    /// Solver settings of the break-even search.
    pub fn break_even_solver(&self) -> SolverConfig {
        SolverConfig::new(self.break_even.tolerance, self.break_even.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LgmConfig::default();
        assert_eq!(config.mean_reversion, 0.0);
        assert_eq!(config.grid.size(), 145);
        assert_eq!(config.calibration.policy, CalibrationPolicy::Strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = LgmConfig::from_toml_str(
            r#"
            mean_reversion = 0.05
            hull_white_volatility = 0.01

            [calibration]
            policy = "lenient"
            "#,
        )
        .unwrap();
        assert_eq!(config.mean_reversion, 0.05);
        assert_eq!(config.hull_white_volatility, Some(0.01));
        assert_eq!(config.calibration.policy, CalibrationPolicy::Lenient);
        assert_eq!(config.calibration.max_doublings, 10);
        assert_eq!(config.grid, GridConfig::default());
    }

    #[test]
    fn test_invalid() {
        assert!(LgmConfig::from_toml_str("mean_reversion = -0.1").is_err());
        assert!(LgmConfig::from_toml_str("[grid]\nresolution = 0").is_err());
        assert!(LgmConfig::from_toml_str("mean_reversion = \"x\"").is_err());
        assert!(LgmConfig::from_file("/nonexistent/lgm.toml").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = LgmConfig::default();
        config.mean_reversion = 0.02;
        config.grid.resolution = 8;
        let text = config.to_toml_string().unwrap();
        assert_eq!(LgmConfig::from_toml_str(&text).unwrap(), config);
    }
}
