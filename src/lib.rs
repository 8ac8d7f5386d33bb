//! # Squares Calculator
//!
//! Deterministic payout math for Football Squares boards.
//!
//! ## Architecture
//!
//! - **Types**: Input values (BoardSquare, Quarter, PayoutDistribution) and the
//!   CalculationResult envelope
//! - **Board**: Winning square lookup, coordinates, sales statistics
//! - **Engine**: Pot/rake split, quarterly payouts, winner payout, leaderboard
//!   points, game configuration validation, and the [`Calculator`] facade
//! - **Config**: House limits and logging, loaded from TOML
//!
//! ## Design Principles
//!
//! 1. **Determinism**: All operations produce identical results for identical inputs
//! 2. **No Floating Point**: Amounts use `rust_decimal::Decimal`
//! 3. **Stateless**: No operation reads or writes shared state
//! 4. **Uniform Results**: Every operation returns a [`CalculationResult`];
//!    failures never panic out to the caller
//!
//! ## Example
//!
//! ```
//! use squares_calculator::Calculator;
//!
//! let calculator = Calculator::new();
//! let identity: Vec<u8> = (0..10).collect();
//!
//! let result = calculator.winning_square(14, 7, &identity, &identity);
//! assert_eq!(result.result().unwrap().winning_square_index, 74);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: BoardSquare, Quarter, CalculationResult
pub mod types;

/// Board geometry and statistics
pub mod board;

/// Payout engine and calculator facade
pub mod engine;

/// Game and logging configuration
pub mod config;

/// Error types
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::{GameConfig, LoggingConfig};
pub use engine::{Calculator, CalculatorEvent, EventHook};
pub use error::{CalculationError, ConfigError, Error, ErrorKind, Result};
pub use types::{
    BoardHeaders, BoardSquare, CalculationResult, CalculationType, DistributionInput, GameScore,
    PayoutDistribution, Quarter,
};
