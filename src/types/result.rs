//! Uniform result envelope returned by every calculator operation.
//!
//! ## Shape
//!
//! In Rust the envelope is a [`Result`] plus [`Metadata`], so callers get
//! exhaustive matching on success and failure. Serialized for a host it takes
//! the flat wire form:
//!
//! ```text
//! { "success": bool,
//!   "result":  { ... },        // present iff success
//!   "error":   "message",      // present iff failure
//!   "metadata": { "calculationType": "...", "timestamp": "...", "boardId": "..." } }
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::CalculationError;

// ============================================================================
// CalculationType
// ============================================================================

/// Tag naming the operation that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationType {
    WinningSquare,
    PotDistribution,
    QuarterlyPayouts,
    WinnerPayout,
    LeaderboardPoints,
    SquareCoordinates,
    GameConfigValidation,
    BoardStats,
    QuarterSettlement,
    HealthCheck,
}

impl CalculationType {
    /// Operations reported as capabilities by the health check.
    pub const CAPABILITIES: [CalculationType; 9] = [
        CalculationType::WinningSquare,
        CalculationType::PotDistribution,
        CalculationType::QuarterlyPayouts,
        CalculationType::WinnerPayout,
        CalculationType::LeaderboardPoints,
        CalculationType::SquareCoordinates,
        CalculationType::GameConfigValidation,
        CalculationType::BoardStats,
        CalculationType::QuarterSettlement,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CalculationType::WinningSquare => "winning_square",
            CalculationType::PotDistribution => "pot_distribution",
            CalculationType::QuarterlyPayouts => "quarterly_payouts",
            CalculationType::WinnerPayout => "winner_payout",
            CalculationType::LeaderboardPoints => "leaderboard_points",
            CalculationType::SquareCoordinates => "square_coordinates",
            CalculationType::GameConfigValidation => "game_config_validation",
            CalculationType::BoardStats => "board_stats",
            CalculationType::QuarterSettlement => "quarter_settlement",
            CalculationType::HealthCheck => "health_check",
        }
    }
}

impl fmt::Display for CalculationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// Context attached to every result.
///
/// The timestamp is informational only and never feeds into a computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub calculation_type: CalculationType,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_id: Option<String>,
}

impl Metadata {
    /// Metadata stamped with the current time
    pub fn now(calculation_type: CalculationType, board_id: Option<String>) -> Self {
        Self {
            calculation_type,
            timestamp: Utc::now(),
            board_id,
        }
    }
}

// ============================================================================
// CalculationResult
// ============================================================================

/// Outcome of one calculator operation plus its metadata.
///
/// ## Example
///
/// ```
/// use squares_calculator::Calculator;
///
/// let calculator = Calculator::new();
/// let coords = calculator.square_coordinates(55);
///
/// match coords.outcome {
///     Ok(c) => assert_eq!((c.row, c.col), (5, 5)),
///     Err(e) => panic!("unexpected error: {e}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult<T> {
    pub outcome: Result<T, CalculationError>,
    pub metadata: Metadata,
}

impl<T> CalculationResult<T> {
    pub fn new(outcome: Result<T, CalculationError>, metadata: Metadata) -> Self {
        Self { outcome, metadata }
    }

    /// Check if the operation succeeded
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Payload of a successful operation
    pub fn result(&self) -> Option<&T> {
        self.outcome.as_ref().ok()
    }

    /// Error of a failed operation
    pub fn error(&self) -> Option<&CalculationError> {
        self.outcome.as_ref().err()
    }

    pub fn calculation_type(&self) -> CalculationType {
        self.metadata.calculation_type
    }

    /// Drop the metadata and keep the outcome
    pub fn into_result(self) -> Result<T, CalculationError> {
        self.outcome
    }
}

impl<T: Serialize> Serialize for CalculationResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CalculationResult", 3)?;
        state.serialize_field("success", &self.is_success())?;
        match &self.outcome {
            Ok(result) => state.serialize_field("result", result)?,
            Err(error) => state.serialize_field("error", &error.to_string())?,
        }
        state.serialize_field("metadata", &self.metadata)?;
        state.end()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
