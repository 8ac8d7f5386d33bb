//! Game configuration validation.
//!
//! All rules are checked and every violation is reported, so an operator
//! can fix a config in one pass.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::GameConfig;
use crate::error::{CalculationError, ConfigViolation};
use crate::types::amount::{approx_eq, checked_sum, within};
use crate::types::{CalculationType, DistributionInput, PayoutDistribution, Quarter};

/// A game configuration that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedGameConfig {
    pub valid: bool,
    pub entry_fee: Decimal,
    pub rake_percentage: Decimal,
    pub payout_distribution: Vec<PayoutDistribution>,
}

/// Validate a proposed game against the house limits in `limits`.
///
/// Rules:
/// - entry fee within `min_entry_fee..=max_entry_fee`
/// - rake within `0..=max_rake_percentage`
/// - percentages sum to 1.0 within `distribution_tolerance`
/// - every quarter tag is `Q1`, `Q2`, `Q3`, `Q4` or `FINAL`
/// - every percentage within `0..=1`
///
/// # Errors
///
/// [`CalculationError::ValidationFailed`] carrying every violation found.
pub fn validate_game_config(
    entry_fee: Decimal,
    rake_percentage: Decimal,
    distribution: &[DistributionInput],
    limits: &GameConfig,
) -> Result<ValidatedGameConfig, CalculationError> {
    let mut violations = Vec::new();

    if !within(entry_fee, limits.min_entry_fee, limits.max_entry_fee) {
        violations.push(ConfigViolation::EntryFeeOutOfRange {
            fee: entry_fee,
            min: limits.min_entry_fee,
            max: limits.max_entry_fee,
        });
    }

    if !within(rake_percentage, Decimal::ZERO, limits.max_rake_percentage) {
        violations.push(ConfigViolation::RakeOutOfRange {
            rake: rake_percentage,
            max: limits.max_rake_percentage,
        });
    }

    let sum = checked_sum(distribution.iter().map(|d| d.percentage)).ok_or(
        CalculationError::Overflow {
            operation: CalculationType::GameConfigValidation,
        },
    )?;
    if !approx_eq(sum, Decimal::ONE, limits.distribution_tolerance) {
        violations.push(ConfigViolation::DistributionSum { sum });
    }

    let mut payout_distribution = Vec::with_capacity(distribution.len());
    for input in distribution {
        match input.quarter.parse::<Quarter>() {
            Ok(quarter) => {
                payout_distribution.push(PayoutDistribution::new(quarter, input.percentage))
            }
            Err(_) => violations.push(ConfigViolation::InvalidQuarter {
                quarter: input.quarter.clone(),
            }),
        }
        if !within(input.percentage, Decimal::ZERO, Decimal::ONE) {
            violations.push(ConfigViolation::InvalidPercentage {
                quarter: input.quarter.clone(),
                percentage: input.percentage,
            });
        }
    }

    if !violations.is_empty() {
        return Err(CalculationError::ValidationFailed { violations });
    }

    Ok(ValidatedGameConfig {
        valid: true,
        entry_fee,
        rake_percentage,
        payout_distribution,
    })
}
