//! Core data types for the squares calculator
//!
//! All inputs are caller-supplied value objects. The calculator reads them
//! and never mutates them.
//!
//! ## Types
//!
//! - [`BoardSquare`]: One cell of the 10x10 grid
//! - [`BoardHeaders`]: Shuffled digit labels for both axes
//! - [`Quarter`]: Payout checkpoint (Q1-Q4, FINAL)
//! - [`PayoutDistribution`]: Share of the player pot for one checkpoint
//! - [`CalculationResult`]: Envelope returned by every operation
//! - [`SettlementReceipt`]: Digest-stamped summary of a quarter payout
//!
//! ## Decimal Arithmetic
//!
//! Amounts and percentages are `rust_decimal::Decimal`; see [`amount`].

mod quarter;
mod receipt;
mod result;
mod square;
pub mod amount;

// Re-export all types at module level
pub use quarter::{
    default_payout_distribution, DistributionInput, GameScore, ParseQuarterError,
    PayoutDistribution, Quarter,
};
pub use receipt::SettlementReceipt;
pub use result::{CalculationResult, CalculationType, Metadata};
pub use square::{BoardHeaders, BoardSquare, BOARD_SIZE, TOTAL_SQUARES};
