//! Board squares and header sequences.
//!
//! A board is a 10x10 grid. Rows are labelled by the away team's header
//! sequence and columns by the home team's, so square `index = row * 10 + col`.

use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// Squares per side of the board.
pub const BOARD_SIZE: usize = 10;

/// Squares on a board.
pub const TOTAL_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

// ============================================================================
// BoardSquare
// ============================================================================

/// One cell of the 10x10 grid as supplied by the host.
///
/// The calculator only reads squares; ownership and payment are recorded
/// elsewhere (on chain).
///
/// ## Example
///
/// ```
/// use rust_decimal::Decimal;
/// use squares_calculator::types::BoardSquare;
///
/// let square = BoardSquare::new(74, 4, 7, Decimal::new(1, 1)).with_owner("winner_wallet");
/// assert_eq!(square.owner(), Some("winner_wallet"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSquare {
    /// Grid index, `0..=99`
    pub index: u8,

    /// Home header digit for this column
    pub home_digit: u8,

    /// Away header digit for this row
    pub away_digit: u8,

    /// Wallet address of the buyer, if sold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Amount paid for the square, never negative
    pub paid_amount: Amount,
}

impl BoardSquare {
    /// Create an unsold square
    pub fn new(index: u8, home_digit: u8, away_digit: u8, paid_amount: Amount) -> Self {
        Self {
            index,
            home_digit,
            away_digit,
            owner: None,
            paid_amount,
        }
    }

    /// Set the owning wallet
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Owning wallet address.
    ///
    /// An empty address counts as unowned.
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref().filter(|owner| !owner.is_empty())
    }

    /// Check if the square has been bought
    pub fn is_sold(&self) -> bool {
        self.owner().is_some()
    }
}

// ============================================================================
// BoardHeaders
// ============================================================================

/// Shuffled digit labels for both axes of a board.
///
/// Each sequence is normally a permutation of `0..=9`. Repeated digits are
/// tolerated; lookups use the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardHeaders {
    /// Column labels
    pub home: Vec<u8>,
    /// Row labels
    pub away: Vec<u8>,
}

impl BoardHeaders {
    pub fn new(home: Vec<u8>, away: Vec<u8>) -> Self {
        Self { home, away }
    }

    /// Unshuffled headers, `0..=9` on both axes
    pub fn identity() -> Self {
        let digits: Vec<u8> = (0..BOARD_SIZE as u8).collect();
        Self::new(digits.clone(), digits)
    }
}

impl Default for BoardHeaders {
    fn default() -> Self {
        Self::identity()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
