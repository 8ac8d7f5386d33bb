//! Payout engine for the squares calculator.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Same input always produces same output
//! 2. **Decimal Math**: No binary floating point in amounts
//! 3. **Synchronous Execution**: No async, no locks, no shared state
//! 4. **No Panics Escape**: Every failure is a value in the result envelope
//!
//! ## Components
//!
//! - [`payout`]: Pot/rake split, quarterly split, winner payout
//! - [`leaderboard`]: Seasonal leaderboard points
//! - [`validation`]: Game configuration rules
//! - [`calculator`]: [`Calculator`] facade returning result envelopes
//!
//! ## Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use squares_calculator::engine::Calculator;
//! use squares_calculator::types::{BoardSquare, Quarter};
//!
//! let calculator = Calculator::new();
//! let squares: Vec<BoardSquare> = (0..100u8)
//!     .map(|i| {
//!         BoardSquare::new(i, i % 10, i / 10, Decimal::new(1, 1)).with_owner(format!("w{i}"))
//!     })
//!     .collect();
//!
//! let pot = calculator.pot_distribution(&squares).into_result().unwrap();
//! assert_eq!(pot.player_pot, Decimal::new(95, 1));
//!
//! let q2 = calculator.quarter_amount(pot.player_pot, Quarter::Q2).unwrap();
//! assert_eq!(q2, Some(Decimal::new(2375, 3)));
//! ```

pub mod calculator;
pub mod leaderboard;
pub mod payout;
pub mod validation;

pub use calculator::{Calculator, CalculatorEvent, EventHook, HealthStatus, QuarterSettlement};
pub use leaderboard::{LeaderboardPoints, PlayerStats, PointsBreakdown};
pub use payout::{PotDistribution, QuarterlyPayout, QuarterlyPayouts, WinnerPayout};
pub use validation::ValidatedGameConfig;
