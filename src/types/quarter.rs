//! Quarters and payout distributions.
//!
//! A game pays out at five checkpoints: the end of each quarter plus a
//! bonus on the final score. A [`PayoutDistribution`] list assigns each
//! checkpoint its fraction of the player pot; the fractions must sum to 1.0.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::amount::Percentage;

// ============================================================================
// Quarter enum
// ============================================================================

/// Payout checkpoint of a scored game.
///
/// The text form is the tag used on the wire: `Q1`..`Q4` and `FINAL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
    #[serde(rename = "FINAL")]
    Final,
}

impl Quarter {
    /// All checkpoints in game order.
    pub const ALL: [Quarter; 5] = [
        Quarter::Q1,
        Quarter::Q2,
        Quarter::Q3,
        Quarter::Q4,
        Quarter::Final,
    ];

    /// Wire tag for this checkpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
            Quarter::Final => "FINAL",
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a tag is not one of `Q1`, `Q2`, `Q3`, `Q4`, `FINAL`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid quarter: {0}")]
pub struct ParseQuarterError(pub String);

impl FromStr for Quarter {
    type Err = ParseQuarterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quarter::ALL
            .into_iter()
            .find(|quarter| quarter.as_str() == s)
            .ok_or_else(|| ParseQuarterError(s.to_string()))
    }
}

// ============================================================================
// Distributions
// ============================================================================

/// Share of the player pot paid at one checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutDistribution {
    pub quarter: Quarter,
    /// Fraction of the player pot, `0..=1`
    pub percentage: Percentage,
}

impl PayoutDistribution {
    pub fn new(quarter: Quarter, percentage: Percentage) -> Self {
        Self { quarter, percentage }
    }
}

/// Distribution entry as supplied by a host, before the quarter tag has been
/// checked.
///
/// Game configuration validation turns these into [`PayoutDistribution`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionInput {
    pub quarter: String,
    pub percentage: Percentage,
}

impl DistributionInput {
    pub fn new(quarter: impl Into<String>, percentage: Percentage) -> Self {
        Self {
            quarter: quarter.into(),
            percentage,
        }
    }
}

impl From<PayoutDistribution> for DistributionInput {
    fn from(dist: PayoutDistribution) -> Self {
        Self::new(dist.quarter.as_str(), dist.percentage)
    }
}

/// Default split of the player pot.
///
/// | Quarter | Share |
/// |---------|-------|
/// | Q1      | 15%   |
/// | Q2      | 25%   |
/// | Q3      | 15%   |
/// | Q4      | 35%   |
/// | FINAL   | 10%   |
pub fn default_payout_distribution() -> Vec<PayoutDistribution> {
    vec![
        PayoutDistribution::new(Quarter::Q1, Decimal::new(15, 2)),
        PayoutDistribution::new(Quarter::Q2, Decimal::new(25, 2)),
        PayoutDistribution::new(Quarter::Q3, Decimal::new(15, 2)),
        PayoutDistribution::new(Quarter::Q4, Decimal::new(35, 2)),
        PayoutDistribution::new(Quarter::Final, Decimal::new(10, 2)),
    ]
}

// ============================================================================
// GameScore
// ============================================================================

/// Score of both teams at a payout checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameScore {
    pub home: u32,
    pub away: u32,
    pub quarter: Quarter,
}

impl GameScore {
    pub fn new(quarter: Quarter, home: u32, away: u32) -> Self {
        Self { home, away, quarter }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
