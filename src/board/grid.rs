//! Grid geometry: winning square lookup and index/coordinate mapping.
//!
//! ## Layout
//!
//! The away team's header sequence labels the rows and the home team's labels
//! the columns:
//!
//! ```text
//!              home headers (cols)
//!            3  1  4  0  7  9  2  5  8  6
//!   away  5 [ 0][ 1][ 2] ...
//!   (rows)8 [10][11] ...
//!         .
//! ```
//!
//! `winning_square_index = away_index * 10 + home_index`. Swapping the two
//! would pay the transposed square.

use serde::Serialize;
use std::fmt;

use crate::error::CalculationError;
use crate::types::{BOARD_SIZE, TOTAL_SQUARES};

/// Result of a winning square lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinningSquare {
    pub winning_square_index: usize,
    /// Last digit of the home score
    pub home_digit: u8,
    /// Last digit of the away score
    pub away_digit: u8,
    /// Column of `home_digit` in the home headers
    pub home_index: usize,
    /// Row of `away_digit` in the away headers
    pub away_index: usize,
}

/// Row/column position of a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SquareCoordinates {
    pub index: u8,
    pub row: u8,
    pub col: u8,
}

impl fmt::Display for SquareCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Last decimal digit of a score
#[inline]
pub fn last_digit(score: u32) -> u8 {
    (score % 10) as u8
}

/// Find the winning square for a score.
///
/// Each score's last digit is looked up in its team's header sequence; the
/// first occurrence wins if a digit repeats.
///
/// # Errors
///
/// [`CalculationError::DigitNotFound`] if either digit is missing from its
/// header sequence.
///
/// # Example
///
/// ```
/// use squares_calculator::board::winning_square;
///
/// let identity: Vec<u8> = (0..10).collect();
/// let square = winning_square(14, 7, &identity, &identity).unwrap();
/// assert_eq!(square.winning_square_index, 74);
/// ```
pub fn winning_square(
    home_score: u32,
    away_score: u32,
    home_headers: &[u8],
    away_headers: &[u8],
) -> Result<WinningSquare, CalculationError> {
    let home_digit = last_digit(home_score);
    let away_digit = last_digit(away_score);

    let home_index = home_headers.iter().position(|&d| d == home_digit);
    let away_index = away_headers.iter().position(|&d| d == away_digit);

    match (home_index, away_index) {
        (Some(home_index), Some(away_index)) => Ok(WinningSquare {
            winning_square_index: away_index * BOARD_SIZE + home_index,
            home_digit,
            away_digit,
            home_index,
            away_index,
        }),
        _ => Err(CalculationError::DigitNotFound {
            home_digit,
            away_digit,
        }),
    }
}

/// Map a square index to its row and column.
///
/// # Errors
///
/// [`CalculationError::InvalidSquareIndex`] unless `0 <= index <= 99`.
pub fn square_coordinates(index: i64) -> Result<SquareCoordinates, CalculationError> {
    let square = u8::try_from(index)
        .ok()
        .filter(|&i| usize::from(i) < TOTAL_SQUARES)
        .ok_or(CalculationError::InvalidSquareIndex { index })?;

    let size = BOARD_SIZE as u8;
    Ok(SquareCoordinates {
        index: square,
        row: square / size,
        col: square % size,
    })
}

/// Inverse of [`square_coordinates`]; `None` if either axis is off the board
pub fn square_index(row: u8, col: u8) -> Option<u8> {
    let size = BOARD_SIZE as u8;
    (row < size && col < size).then(|| row * size + col)
}

// ============================================================================
// Unit Tests
// ============================================================================
