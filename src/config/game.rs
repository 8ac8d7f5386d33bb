//! Game configuration: rake, entry fee bounds and the default payout split.
//!
//! Loaded from TOML. Every field is optional and falls back to the house
//! defaults:
//!
//! ```toml
//! default_rake_percentage = 0.05
//! min_entry_fee = 0.01
//! max_entry_fee = 10.0
//! max_rake_percentage = 0.2
//! distribution_tolerance = 0.001
//!
//! [[payout_distribution]]
//! quarter = "Q1"
//! percentage = 0.15
//! # ...
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//! ```

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::error::{ConfigError, Result};
use crate::types::amount::{approx_eq, checked_sum, within};
use crate::types::{default_payout_distribution, PayoutDistribution};

/// Limits and defaults applied by the calculator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GameConfig {
    /// House cut used when a caller does not pass one (5%).
    #[serde(default = "default_rake_percentage")]
    pub default_rake_percentage: Decimal,

    /// Smallest entry fee a game may charge.
    #[serde(default = "default_min_entry_fee")]
    pub min_entry_fee: Decimal,

    /// Largest entry fee a game may charge.
    #[serde(default = "default_max_entry_fee")]
    pub max_entry_fee: Decimal,

    /// Largest rake a game may take (20%).
    #[serde(default = "default_max_rake_percentage")]
    pub max_rake_percentage: Decimal,

    /// Allowed distance of a distribution's sum from 1.0.
    #[serde(default = "default_distribution_tolerance")]
    pub distribution_tolerance: Decimal,

    /// Split used when a caller does not pass one.
    #[serde(default = "default_payout_distribution")]
    pub payout_distribution: Vec<PayoutDistribution>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_rake_percentage() -> Decimal {
    Decimal::new(5, 2) // 5%
}

fn default_min_entry_fee() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

fn default_max_entry_fee() -> Decimal {
    Decimal::from(10)
}

fn default_max_rake_percentage() -> Decimal {
    Decimal::new(2, 1) // 20%
}

fn default_distribution_tolerance() -> Decimal {
    Decimal::new(1, 3) // 0.001
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_rake_percentage: default_rake_percentage(),
            min_entry_fee: default_min_entry_fee(),
            max_entry_fee: default_max_entry_fee(),
            max_rake_percentage: default_max_rake_percentage(),
            distribution_tolerance: default_distribution_tolerance(),
            payout_distribution: default_payout_distribution(),
            logging: LoggingConfig::default(),
        }
    }
}

impl GameConfig {
    /// Read and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&contents)
    }

    /// Parse and validate TOML config text.
    pub fn parse_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the limits are consistent with each other.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.min_entry_fee.is_sign_negative() || self.min_entry_fee > self.max_entry_fee {
            return Err(ConfigError::InvalidValue {
                field: "min_entry_fee",
                reason: format!(
                    "must be non-negative and at most max_entry_fee ({})",
                    self.max_entry_fee
                ),
            });
        }

        if !within(self.max_rake_percentage, Decimal::ZERO, Decimal::ONE) {
            return Err(ConfigError::InvalidValue {
                field: "max_rake_percentage",
                reason: format!("{} outside 0-1", self.max_rake_percentage),
            });
        }

        if !within(
            self.default_rake_percentage,
            Decimal::ZERO,
            self.max_rake_percentage,
        ) {
            return Err(ConfigError::InvalidValue {
                field: "default_rake_percentage",
                reason: format!(
                    "{} outside 0-{}",
                    self.default_rake_percentage, self.max_rake_percentage
                ),
            });
        }

        if self.distribution_tolerance.is_sign_negative() {
            return Err(ConfigError::InvalidValue {
                field: "distribution_tolerance",
                reason: "must be non-negative".into(),
            });
        }

        if self.payout_distribution.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "payout_distribution",
                reason: "must not be empty".into(),
            });
        }

        let sum = checked_sum(self.payout_distribution.iter().map(|d| d.percentage));
        match sum {
            Some(sum) if approx_eq(sum, Decimal::ONE, self.distribution_tolerance) => Ok(()),
            Some(sum) => Err(ConfigError::InvalidValue {
                field: "payout_distribution",
                reason: format!("sums to {sum}, expected 1.0"),
            }),
            None => Err(ConfigError::InvalidValue {
                field: "payout_distribution",
                reason: "sum overflows".into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::Quarter;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.default_rake_percentage, dec!(0.05));
        assert_eq!(config.min_entry_fee, dec!(0.01));
        assert_eq!(config.max_entry_fee, dec!(10));
        assert_eq!(config.max_rake_percentage, dec!(0.2));
        assert_eq!(config.distribution_tolerance, dec!(0.001));
        assert_eq!(config.payout_distribution, default_payout_distribution());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = GameConfig::parse_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_parse_overrides() {
        let toml = r#"
default_rake_percentage = 0.1
max_entry_fee = 5

[[payout_distribution]]
quarter = "Q2"
percentage = 0.5

[[payout_distribution]]
quarter = "FINAL"
percentage = "0.5"

[logging]
level = "debug"
format = "json"
"#;
        let config = GameConfig::parse_toml(toml).unwrap();
        assert_eq!(config.default_rake_percentage, dec!(0.1));
        assert_eq!(config.max_entry_fee, dec!(5));
        assert_eq!(
            config.payout_distribution,
            vec![
                PayoutDistribution::new(Quarter::Q2, dec!(0.5)),
                PayoutDistribution::new(Quarter::Final, dec!(0.5)),
            ]
        );
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_rejects_unknown_quarter() {
        let toml = r#"
[[payout_distribution]]
quarter = "OVERTIME"
percentage = 1.0
"#;
        assert!(matches!(
            GameConfig::parse_toml(toml),
            Err(Error::Config(ConfigError::Parse(_)))
        ));
    }

    #[test]
    fn test_rejects_bad_distribution_sum() {
        let toml = r#"
[[payout_distribution]]
quarter = "Q1"
percentage = 0.9
"#;
        match GameConfig::parse_toml(toml) {
            Err(Error::Config(ConfigError::InvalidValue {
                field: "payout_distribution",
                ..
            })) => {}
            other => panic!("Expected invalid distribution, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_rake_above_max() {
        let toml = "default_rake_percentage = 0.3";
        match GameConfig::parse_toml(toml) {
            Err(Error::Config(ConfigError::InvalidValue {
                field: "default_rake_percentage",
                ..
            })) => {}
            other => panic!("Expected invalid rake, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_inverted_fee_bounds() {
        let toml = "min_entry_fee = 20";
        match GameConfig::parse_toml(toml) {
            Err(Error::Config(ConfigError::InvalidValue {
                field: "min_entry_fee",
                ..
            })) => {}
            other => panic!("Expected invalid fee bounds, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let result = GameConfig::load("/nonexistent/squares-calculator.toml");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::ReadFile(_)))
        ));
    }
}
