//! Sales statistics for a board.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::CalculationError;
use crate::types::amount::{checked_sum, ratio};
use crate::types::{BoardSquare, CalculationType, TOTAL_SQUARES};

/// How much of a board has been sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardStats {
    pub squares_sold: usize,
    /// Indices with no owner, ascending
    pub available_squares: Vec<u8>,
    /// Percent of the board sold, `0..=100`
    pub occupancy_rate: Decimal,
    /// Sum of `paid_amount` over all supplied squares
    pub total_revenue: Decimal,
    /// Revenue per sold square; revenue itself when nothing is sold
    pub average_sold_value: Decimal,
}

/// Summarise sales on a board.
///
/// Squares with an index outside the board are counted toward revenue but
/// cannot mark a cell sold.
pub fn board_stats(squares: &[BoardSquare]) -> Result<BoardStats, CalculationError> {
    let overflow = CalculationError::Overflow {
        operation: CalculationType::BoardStats,
    };

    let mut sold = [false; TOTAL_SQUARES];
    for square in squares.iter().filter(|s| s.is_sold()) {
        if let Some(cell) = sold.get_mut(usize::from(square.index)) {
            *cell = true;
        }
    }

    let available_squares: Vec<u8> = (0..TOTAL_SQUARES as u8)
        .filter(|&i| !sold[usize::from(i)])
        .collect();
    let squares_sold = TOTAL_SQUARES - available_squares.len();

    let total_revenue =
        checked_sum(squares.iter().map(|s| s.paid_amount)).ok_or_else(|| overflow.clone())?;
    let occupancy_rate = ratio(
        Decimal::from(squares_sold as u64) * Decimal::ONE_HUNDRED,
        Decimal::from(TOTAL_SQUARES as u64),
    )
    .ok_or_else(|| overflow.clone())?;
    let average_sold_value =
        ratio(total_revenue, Decimal::from(squares_sold.max(1) as u64)).ok_or(overflow)?;

    Ok(BoardStats {
        squares_sold,
        available_squares,
        occupancy_rate,
        total_revenue,
        average_sold_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_board() {
        let stats = board_stats(&[]).unwrap();
        assert_eq!(stats.squares_sold, 0);
        assert_eq!(stats.available_squares.len(), 100);
        assert_eq!(stats.occupancy_rate, Decimal::ZERO);
        assert_eq!(stats.total_revenue, Decimal::ZERO);
        assert_eq!(stats.average_sold_value, Decimal::ZERO);
    }

    #[test]
    fn test_partially_sold_board() {
        let squares: Vec<BoardSquare> = (0..25u8)
            .map(|i| BoardSquare::new(i, i % 10, i / 10, dec!(0.2)).with_owner(format!("w{i}")))
            .chain([BoardSquare::new(50, 0, 5, dec!(0))])
            .collect();

        let stats = board_stats(&squares).unwrap();
        assert_eq!(stats.squares_sold, 25);
        assert_eq!(stats.available_squares.first(), Some(&25));
        assert!(stats.available_squares.contains(&50));
        assert_eq!(stats.available_squares.len(), 75);
        assert_eq!(stats.occupancy_rate, dec!(25));
        assert_eq!(stats.total_revenue, dec!(5.0));
        assert_eq!(stats.average_sold_value, dec!(0.2));
    }

    #[test]
    fn test_duplicate_and_off_board_squares() {
        let squares = vec![
            BoardSquare::new(3, 3, 0, dec!(1)).with_owner("a"),
            BoardSquare::new(3, 3, 0, dec!(1)).with_owner("b"),
            BoardSquare::new(120, 0, 0, dec!(1)).with_owner("c"),
        ];
        let stats = board_stats(&squares).unwrap();
        assert_eq!(stats.squares_sold, 1);
        assert_eq!(stats.total_revenue, dec!(3));
        assert_eq!(stats.average_sold_value, dec!(3));
    }
}
