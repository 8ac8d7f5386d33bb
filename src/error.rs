//! Error types.
//!
//! Calculator operations never return these directly to a host: they travel
//! inside [`CalculationResult`](crate::types::CalculationResult). The crate
//! level [`Error`] covers setup paths such as loading configuration.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::CalculationType;

/// Broad category of a calculation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A header digit or square index has no match
    InputNotFound,
    /// The winning square was never bought
    MissingOwnership,
    /// An index or percentage is outside its bounds
    OutOfRange,
    /// A distribution or game configuration breaks a rule
    InvariantViolation,
    /// Unexpected fault during computation
    InternalFault,
}

/// Errors reported through a calculation result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    #[error("Invalid header configuration or score digit not found (home digit {home_digit}, away digit {away_digit})")]
    DigitNotFound { home_digit: u8, away_digit: u8 },

    #[error("No square found at index {index}")]
    SquareNotFound { index: usize },

    #[error("Winning square {index} has no owner")]
    SquareHasNoOwner { index: usize },

    #[error("Invalid square index: {index}. Must be 0-99")]
    InvalidSquareIndex { index: i64 },

    #[error("Payout distribution must sum to 1.0, got {sum}")]
    InvalidDistributionSum { sum: Decimal },

    #[error("Validation errors: {}", join_violations(.violations))]
    ValidationFailed { violations: Vec<ConfigViolation> },

    #[error("arithmetic overflow in {operation}")]
    Overflow { operation: CalculationType },

    #[error("{operation} calculation error: {message}")]
    Internal {
        operation: CalculationType,
        message: String,
    },
}

impl CalculationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalculationError::DigitNotFound { .. } | CalculationError::SquareNotFound { .. } => {
                ErrorKind::InputNotFound
            }
            CalculationError::SquareHasNoOwner { .. } => ErrorKind::MissingOwnership,
            CalculationError::InvalidSquareIndex { .. } => ErrorKind::OutOfRange,
            CalculationError::InvalidDistributionSum { .. }
            | CalculationError::ValidationFailed { .. } => ErrorKind::InvariantViolation,
            CalculationError::Overflow { .. } | CalculationError::Internal { .. } => {
                ErrorKind::InternalFault
            }
        }
    }
}

/// One broken rule found by game configuration validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigViolation {
    #[error("Entry fee {fee} outside valid range {min}-{max}")]
    EntryFeeOutOfRange { fee: Decimal, min: Decimal, max: Decimal },

    #[error("Rake percentage {rake} outside valid range 0-{max}")]
    RakeOutOfRange { rake: Decimal, max: Decimal },

    #[error("Payout distribution sums to {sum}, expected 1.0")]
    DistributionSum { sum: Decimal },

    #[error("Invalid quarter: {quarter}")]
    InvalidQuarter { quarter: String },

    #[error("Invalid percentage for {quarter}: {percentage}")]
    InvalidPercentage { quarter: String, percentage: Decimal },
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Calculation(#[from] CalculationError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_messages() {
        let err = CalculationError::DigitNotFound {
            home_digit: 9,
            away_digit: 7,
        };
        assert!(err.to_string().contains("not found"));

        let err = CalculationError::InvalidDistributionSum { sum: dec!(0.9) };
        assert_eq!(err.to_string(), "Payout distribution must sum to 1.0, got 0.9");

        let err = CalculationError::Internal {
            operation: CalculationType::PotDistribution,
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "pot_distribution calculation error: boom");
    }

    #[test]
    fn test_violations_are_comma_joined() {
        let err = CalculationError::ValidationFailed {
            violations: vec![
                ConfigViolation::RakeOutOfRange {
                    rake: dec!(0.25),
                    max: dec!(0.2),
                },
                ConfigViolation::InvalidQuarter {
                    quarter: "Q5".into(),
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "Validation errors: Rake percentage 0.25 outside valid range 0-0.2, Invalid quarter: Q5"
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            CalculationError::SquareNotFound { index: 1 }.kind(),
            ErrorKind::InputNotFound
        );
        assert_eq!(
            CalculationError::SquareHasNoOwner { index: 1 }.kind(),
            ErrorKind::MissingOwnership
        );
        assert_eq!(
            CalculationError::InvalidSquareIndex { index: 100 }.kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            CalculationError::ValidationFailed { violations: vec![] }.kind(),
            ErrorKind::InvariantViolation
        );
        assert_eq!(
            CalculationError::Overflow {
                operation: CalculationType::WinnerPayout
            }
            .kind(),
            ErrorKind::InternalFault
        );
    }

    #[test]
    fn test_calculation_error_converts_to_crate_error() {
        fn lookup(index: i64) -> Result<u8> {
            let coords = crate::Calculator::new()
                .square_coordinates(index)
                .into_result()?;
            Ok(coords.row)
        }

        assert_eq!(lookup(42).unwrap(), 4);

        let err = lookup(100).unwrap_err();
        assert!(matches!(
            err,
            Error::Calculation(CalculationError::InvalidSquareIndex { index: 100 })
        ));
        assert_eq!(err.to_string(), "Invalid square index: 100. Must be 0-99");
    }
}
