//! Seasonal leaderboard scoring.
//!
//! `total = wins * 100 + floor(total_winnings * 10) + games * 5`

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::CalculationError;
use crate::types::amount::ratio;
use crate::types::CalculationType;

/// Points per winning square.
pub const POINTS_PER_WIN: i64 = 100;

/// Points per whole token won.
pub const POINTS_PER_TOKEN_WON: i64 = 10;

/// Points per game entered.
pub const POINTS_PER_GAME: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsBreakdown {
    pub base_points: i64,
    pub winnings_bonus: i64,
    pub participation_bonus: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub wins: u32,
    pub total_winnings: Decimal,
    pub games_participated: u32,
    /// Zero when no games were played
    pub average_winnings: Decimal,
    /// Zero when no games were played
    pub win_rate: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardPoints {
    pub total_points: i64,
    pub breakdown: PointsBreakdown,
    pub stats: PlayerStats,
}

/// Score a player for the seasonal leaderboard.
pub fn leaderboard_points(
    wins: u32,
    total_winnings: Decimal,
    games_participated: u32,
) -> Result<LeaderboardPoints, CalculationError> {
    let overflow = || CalculationError::Overflow {
        operation: CalculationType::LeaderboardPoints,
    };

    let base_points = i64::from(wins) * POINTS_PER_WIN;
    let winnings_bonus = total_winnings
        .checked_mul(Decimal::from(POINTS_PER_TOKEN_WON))
        .and_then(|bonus| bonus.floor().to_i64())
        .ok_or_else(overflow)?;
    let participation_bonus = i64::from(games_participated) * POINTS_PER_GAME;

    let total_points = base_points
        .checked_add(winnings_bonus)
        .and_then(|points| points.checked_add(participation_bonus))
        .ok_or_else(overflow)?;

    // Zero games means zero rates, not a division error
    let games = Decimal::from(games_participated);
    let average_winnings = ratio(total_winnings, games).unwrap_or(Decimal::ZERO);
    let win_rate = ratio(Decimal::from(wins), games).unwrap_or(Decimal::ZERO);

    Ok(LeaderboardPoints {
        total_points,
        breakdown: PointsBreakdown {
            base_points,
            winnings_bonus,
            participation_bonus,
        },
        stats: PlayerStats {
            wins,
            total_winnings,
            games_participated,
            average_winnings,
            win_rate,
        },
    })
}
