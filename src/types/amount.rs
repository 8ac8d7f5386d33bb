//! Decimal amount utilities.
//!
//! ## Overview
//!
//! Every pot, rake, payout and percentage in the calculator is a
//! [`rust_decimal::Decimal`]. Amounts are denominated in the game token
//! (SOL on the reference deployment) and percentages are fractions in
//! `0..=1`.
//!
//! ## Why Decimal?
//!
//! Binary floating point cannot represent `0.1` exactly, so summing one
//! hundred `0.1` squares does not give `10.0`. Decimal arithmetic does, which
//! keeps payouts identical on every host.
//!
//! ## Examples
//!
//! ```
//! use rust_decimal::Decimal;
//! use squares_calculator::types::amount::{checked_sum, percent_of};
//!
//! let squares = vec![Decimal::new(1, 1); 100]; // 100 x 0.1
//! let pot = checked_sum(squares).unwrap();
//! assert_eq!(pot, Decimal::from(10));
//!
//! let rake = percent_of(pot, Decimal::new(5, 2)).unwrap();
//! assert_eq!(rake, Decimal::new(5, 1));
//! ```

use rust_decimal::Decimal;

/// Amount of the game token, e.g. a square price or a payout.
pub type Amount = Decimal;

/// Fraction in `0..=1`, e.g. a rake or a quarter's share of the pot.
pub type Percentage = Decimal;

// ============================================================================
// Arithmetic Functions
// ============================================================================

/// Sum a sequence of amounts.
///
/// # Returns
///
/// * `Some(Decimal)` - The sum (zero for an empty sequence)
/// * `None` - If the sum overflows
pub fn checked_sum<I>(amounts: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
}

/// Apply a fractional percentage to an amount.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use squares_calculator::types::amount::percent_of;
///
/// // 15% of 100
/// assert_eq!(percent_of(Decimal::from(100), Decimal::new(15, 2)), Some(Decimal::from(15)));
/// ```
pub fn percent_of(amount: Decimal, percentage: Decimal) -> Option<Decimal> {
    amount.checked_mul(percentage)
}

/// Divide two amounts.
///
/// Returns `None` when the divisor is zero or the quotient overflows.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use squares_calculator::types::amount::ratio;
///
/// // 25 / 0.1 = 250
/// assert_eq!(ratio(Decimal::from(25), Decimal::new(1, 1)), Some(Decimal::from(250)));
/// assert_eq!(ratio(Decimal::from(25), Decimal::ZERO), None);
/// ```
pub fn ratio(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator.is_zero() {
        return None;
    }
    numerator.checked_div(denominator)
}

// ============================================================================
// Comparison Helpers
// ============================================================================

/// `true` if |a - b| <= tolerance
pub fn approx_eq(a: Decimal, b: Decimal, tolerance: Decimal) -> bool {
    a.checked_sub(b)
        .map_or(false, |diff| diff.abs() <= tolerance)
}

/// `true` if `value` lies in `min..=max`
pub fn within(value: Decimal, min: Decimal, max: Decimal) -> bool {
    value >= min && value <= max
}

// ============================================================================
// Unit Tests
// ============================================================================
