//! Pot, rake and payout math.
//!
//! ## Flow
//!
//! 1. [`pot_distribution`]: sum what buyers paid and take the house rake
//! 2. [`quarterly_payouts`]: split the player pot across the checkpoints
//! 3. [`winner_payout`]: pay one checkpoint's amount to the square's owner
//!
//! For every pot, `rake_amount + player_pot == total_pot` exactly.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::CalculationError;
use crate::types::amount::{approx_eq, checked_sum, percent_of, ratio, Amount, Percentage};
use crate::types::{BoardSquare, CalculationType, PayoutDistribution, Quarter};

fn overflow(operation: CalculationType) -> CalculationError {
    CalculationError::Overflow { operation }
}

// ============================================================================
// Pot distribution
// ============================================================================

/// Total pot of a board and the house/player split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PotDistribution {
    pub total_pot: Amount,
    pub rake_amount: Amount,
    pub player_pot: Amount,
    pub rake_percentage: Percentage,
    pub square_count: usize,
    /// `None` when no squares were supplied
    pub average_square_value: Option<Amount>,
}

/// Sum the squares' paid amounts and split off the rake.
pub fn pot_distribution(
    squares: &[BoardSquare],
    rake_percentage: Percentage,
) -> Result<PotDistribution, CalculationError> {
    let op = CalculationType::PotDistribution;

    let total_pot =
        checked_sum(squares.iter().map(|s| s.paid_amount)).ok_or_else(|| overflow(op))?;
    let rake_amount = percent_of(total_pot, rake_percentage).ok_or_else(|| overflow(op))?;
    let player_pot = total_pot.checked_sub(rake_amount).ok_or_else(|| overflow(op))?;
    let average_square_value = ratio(total_pot, Decimal::from(squares.len() as u64));

    Ok(PotDistribution {
        total_pot,
        rake_amount,
        player_pot,
        rake_percentage,
        square_count: squares.len(),
        average_square_value,
    })
}

// ============================================================================
// Quarterly payouts
// ============================================================================

/// Amount paid at one checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuarterlyPayout {
    pub quarter: Quarter,
    pub amount: Amount,
    pub percentage: Percentage,
}

/// Player pot split across checkpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterlyPayouts {
    pub quarterly_payouts: Vec<QuarterlyPayout>,
    pub total_player_pot: Amount,
    pub distribution: Vec<PayoutDistribution>,
}

impl QuarterlyPayouts {
    /// Amount for a checkpoint; the first entry wins if a quarter repeats
    pub fn amount_for(&self, quarter: Quarter) -> Option<Amount> {
        self.quarterly_payouts
            .iter()
            .find(|p| p.quarter == quarter)
            .map(|p| p.amount)
    }

    /// Sum of all checkpoint amounts
    pub fn total(&self) -> Option<Amount> {
        checked_sum(self.quarterly_payouts.iter().map(|p| p.amount))
    }
}

/// Split a player pot by a distribution.
///
/// # Errors
///
/// [`CalculationError::InvalidDistributionSum`] if the percentages do not
/// sum to 1.0 within `tolerance`.
pub fn quarterly_payouts(
    player_pot: Amount,
    distribution: &[PayoutDistribution],
    tolerance: Percentage,
) -> Result<QuarterlyPayouts, CalculationError> {
    let op = CalculationType::QuarterlyPayouts;

    let sum =
        checked_sum(distribution.iter().map(|d| d.percentage)).ok_or_else(|| overflow(op))?;
    if !approx_eq(sum, Decimal::ONE, tolerance) {
        return Err(CalculationError::InvalidDistributionSum { sum });
    }

    let quarterly_payouts = distribution
        .iter()
        .map(|dist| -> Result<QuarterlyPayout, CalculationError> {
            Ok(QuarterlyPayout {
                quarter: dist.quarter,
                amount: percent_of(player_pot, dist.percentage).ok_or_else(|| overflow(op))?,
                percentage: dist.percentage,
            })
        })
        .collect::<Result<Vec<_>, CalculationError>>()?;

    Ok(QuarterlyPayouts {
        quarterly_payouts,
        total_player_pot: player_pot,
        distribution: distribution.to_vec(),
    })
}

// ============================================================================
// Winner payout
// ============================================================================

/// Who is paid for a winning square and how much.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerPayout {
    pub winner_address: String,
    pub payout_amount: Amount,
    pub winning_square_index: usize,
    /// What the winner paid for the square
    pub square_value: Amount,
    /// `payout_amount / square_value`; `None` for a free square
    pub roi: Option<Decimal>,
}

/// Resolve the payout for a winning square.
///
/// # Errors
///
/// - [`CalculationError::SquareNotFound`] if no square has the index
/// - [`CalculationError::SquareHasNoOwner`] if it was never bought
pub fn winner_payout(
    winning_square_index: usize,
    squares: &[BoardSquare],
    quarterly_amount: Amount,
) -> Result<WinnerPayout, CalculationError> {
    let square = squares
        .iter()
        .find(|s| usize::from(s.index) == winning_square_index)
        .ok_or(CalculationError::SquareNotFound {
            index: winning_square_index,
        })?;

    let owner = square.owner().ok_or(CalculationError::SquareHasNoOwner {
        index: winning_square_index,
    })?;

    Ok(WinnerPayout {
        winner_address: owner.to_string(),
        payout_amount: quarterly_amount,
        winning_square_index,
        square_value: square.paid_amount,
        roi: ratio(quarterly_amount, square.paid_amount),
    })
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::default_payout_distribution;
    use rust_decimal_macros::dec;

    fn full_board(paid: Decimal) -> Vec<BoardSquare> {
        (0..100u8)
            .map(|i| BoardSquare::new(i, i % 10, i / 10, paid).with_owner(format!("wallet_{i}")))
            .collect()
    }

    #[test]
    fn test_pot_equal_squares() {
        let pot = pot_distribution(&full_board(dec!(0.1)), dec!(0.05)).unwrap();
        assert_eq!(pot.total_pot, dec!(10.0));
        assert_eq!(pot.rake_amount, dec!(0.5));
        assert_eq!(pot.player_pot, dec!(9.5));
        assert_eq!(pot.square_count, 100);
        assert_eq!(pot.average_square_value, Some(dec!(0.1)));
    }

    #[test]
    fn test_pot_variable_squares() {
        let squares = vec![
            BoardSquare::new(0, 0, 0, dec!(1.0)).with_owner("wallet1"),
            BoardSquare::new(1, 1, 0, dec!(0.5)).with_owner("wallet2"),
            BoardSquare::new(2, 2, 0, dec!(2.0)).with_owner("wallet3"),
        ];
        let pot = pot_distribution(&squares, dec!(0.1)).unwrap();
        assert_eq!(pot.total_pot, dec!(3.5));
        assert_eq!(pot.rake_amount, dec!(0.35));
        assert_eq!(pot.player_pot, dec!(3.15));
        assert_eq!(pot.rake_amount + pot.player_pot, pot.total_pot);
    }

    #[test]
    fn test_pot_empty_board_has_no_average() {
        let pot = pot_distribution(&[], dec!(0.05)).unwrap();
        assert_eq!(pot.total_pot, Decimal::ZERO);
        assert_eq!(pot.player_pot, Decimal::ZERO);
        assert_eq!(pot.square_count, 0);
        assert_eq!(pot.average_square_value, None);
    }

    #[test]
    fn test_pot_overflow() {
        let squares = vec![
            BoardSquare::new(0, 0, 0, Decimal::MAX),
            BoardSquare::new(1, 1, 0, Decimal::MAX),
        ];
        assert_eq!(
            pot_distribution(&squares, dec!(0.05)),
            Err(CalculationError::Overflow {
                operation: CalculationType::PotDistribution
            })
        );
    }

    #[test]
    fn test_quarterly_default_distribution() {
        let payouts =
            quarterly_payouts(dec!(100), &default_payout_distribution(), dec!(0.001)).unwrap();
        assert_eq!(payouts.amount_for(Quarter::Q1), Some(dec!(15)));
        assert_eq!(payouts.amount_for(Quarter::Q2), Some(dec!(25)));
        assert_eq!(payouts.amount_for(Quarter::Q3), Some(dec!(15)));
        assert_eq!(payouts.amount_for(Quarter::Q4), Some(dec!(35)));
        assert_eq!(payouts.amount_for(Quarter::Final), Some(dec!(10)));
        assert_eq!(payouts.total(), Some(dec!(100)));
        assert_eq!(payouts.total_player_pot, dec!(100));
        assert_eq!(payouts.distribution, default_payout_distribution());
    }

    #[test]
    fn test_quarterly_invalid_sum() {
        let dist = [
            PayoutDistribution::new(Quarter::Q1, dec!(0.3)),
            PayoutDistribution::new(Quarter::Q2, dec!(0.3)),
            PayoutDistribution::new(Quarter::Q3, dec!(0.3)),
        ];
        let err = quarterly_payouts(dec!(100), &dist, dec!(0.001)).unwrap_err();
        assert_eq!(err, CalculationError::InvalidDistributionSum { sum: dec!(0.9) });
        assert!(err.to_string().contains("sum to 1.0"));
        assert!(err.to_string().contains("0.9"));
    }

    #[test]
    fn test_quarterly_within_tolerance() {
        let dist = [
            PayoutDistribution::new(Quarter::Q1, dec!(0.5)),
            PayoutDistribution::new(Quarter::Final, dec!(0.5005)),
        ];
        let payouts = quarterly_payouts(dec!(10), &dist, dec!(0.001)).unwrap();
        assert_eq!(payouts.amount_for(Quarter::Final), Some(dec!(5.005)));

        let dist = [
            PayoutDistribution::new(Quarter::Q1, dec!(0.5)),
            PayoutDistribution::new(Quarter::Final, dec!(0.502)),
        ];
        assert!(quarterly_payouts(dec!(10), &dist, dec!(0.001)).is_err());
    }

    #[test]
    fn test_quarterly_empty_distribution() {
        assert_eq!(
            quarterly_payouts(dec!(10), &[], dec!(0.001)),
            Err(CalculationError::InvalidDistributionSum { sum: Decimal::ZERO })
        );
    }

    #[test]
    fn test_winner_payout() {
        let squares = vec![BoardSquare::new(74, 4, 7, dec!(0.1)).with_owner("winner_wallet")];
        let payout = winner_payout(74, &squares, dec!(25.0)).unwrap();
        assert_eq!(payout.winner_address, "winner_wallet");
        assert_eq!(payout.payout_amount, dec!(25.0));
        assert_eq!(payout.winning_square_index, 74);
        assert_eq!(payout.square_value, dec!(0.1));
        assert_eq!(payout.roi, Some(dec!(250)));
    }

    #[test]
    fn test_winner_square_not_found() {
        let squares = vec![BoardSquare::new(10, 0, 1, dec!(0.1)).with_owner("wallet1")];
        let err = winner_payout(74, &squares, dec!(25)).unwrap_err();
        assert_eq!(err, CalculationError::SquareNotFound { index: 74 });
        assert!(err.to_string().contains("No square found"));
    }

    #[test]
    fn test_winner_square_has_no_owner() {
        let squares = vec![BoardSquare::new(74, 4, 7, dec!(0.1))];
        let err = winner_payout(74, &squares, dec!(25)).unwrap_err();
        assert_eq!(err, CalculationError::SquareHasNoOwner { index: 74 });
        assert!(err.to_string().contains("has no owner"));
    }

    #[test]
    fn test_winner_free_square_has_no_roi() {
        let squares = vec![BoardSquare::new(0, 0, 0, Decimal::ZERO).with_owner("promo")];
        let payout = winner_payout(0, &squares, dec!(5)).unwrap();
        assert_eq!(payout.roi, None);
    }
}
