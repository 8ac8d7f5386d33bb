//! The calculator service.
//!
//! [`Calculator`] wraps the pure functions of this crate: it supplies the
//! configured defaults, stamps results with [`Metadata`], turns any panic into
//! a failed result and reports each completed operation to an optional hook.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::board::{self, BoardStats, SquareCoordinates, WinningSquare};
use crate::config::GameConfig;
use crate::engine::leaderboard::{self, LeaderboardPoints};
use crate::engine::payout::{self, PotDistribution, QuarterlyPayouts, WinnerPayout};
use crate::engine::validation::{self, ValidatedGameConfig};
use crate::error::CalculationError;
use crate::types::{
    BoardHeaders, BoardSquare, CalculationResult, CalculationType, DistributionInput, GameScore,
    Metadata, PayoutDistribution, Quarter, SettlementReceipt,
};

/// Crate version reported by the health check.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Events
// ============================================================================

/// Lifecycle notification delivered to a [`EventHook`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculatorEvent {
    /// The hook was attached to a ready calculator
    Initialized { version: &'static str },
    /// An operation finished
    Completed {
        calculation_type: CalculationType,
        success: bool,
    },
}

/// Caller-supplied observer for calculator events.
pub type EventHook = Arc<dyn Fn(&CalculatorEvent) + Send + Sync>;

// ============================================================================
// Payloads owned by the facade
// ============================================================================

/// Self-test report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub capabilities: Vec<CalculationType>,
}

/// Everything needed to pay out one quarter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterSettlement {
    pub score: GameScore,
    pub winning_square: WinningSquare,
    pub payout: WinnerPayout,
    pub receipt: SettlementReceipt,
}

// ============================================================================
// Calculator
// ============================================================================

/// Deterministic payout calculator.
///
/// Stateless apart from its configuration: every method takes `&self`, so a
/// single instance can be shared across threads.
///
/// ## Example
///
/// ```
/// use rust_decimal::Decimal;
/// use squares_calculator::Calculator;
///
/// let calculator = Calculator::new().with_board("board-42");
///
/// let payouts = calculator.quarterly_payouts(Decimal::from(100));
/// assert!(payouts.is_success());
/// assert_eq!(payouts.metadata.board_id.as_deref(), Some("board-42"));
/// ```
#[derive(Clone)]
pub struct Calculator {
    config: GameConfig,
    board_id: Option<String>,
    hook: Option<EventHook>,
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("config", &self.config)
            .field("board_id", &self.board_id)
            .field("hook", &self.hook.is_some())
            .finish()
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator with the house defaults
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Create a calculator with custom limits and defaults
    pub fn with_config(config: GameConfig) -> Self {
        info!(version = VERSION, "calculator initialized");
        Self {
            config,
            board_id: None,
            hook: None,
        }
    }

    /// Tag every result with a board id
    pub fn with_board(mut self, board_id: impl Into<String>) -> Self {
        self.board_id = Some(board_id.into());
        self
    }

    /// Attach an event hook.
    ///
    /// The hook immediately receives [`CalculatorEvent::Initialized`]. A
    /// panicking hook is logged and otherwise ignored.
    pub fn with_hook(mut self, hook: EventHook) -> Self {
        self.hook = Some(hook);
        self.notify(&CalculatorEvent::Initialized { version: VERSION });
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board_id(&self) -> Option<&str> {
        self.board_id.as_deref()
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Winning square for a score against the board headers.
    pub fn winning_square(
        &self,
        home_score: u32,
        away_score: u32,
        home_headers: &[u8],
        away_headers: &[u8],
    ) -> CalculationResult<WinningSquare> {
        self.run(CalculationType::WinningSquare, || {
            board::winning_square(home_score, away_score, home_headers, away_headers)
        })
    }

    /// Pot split using the configured default rake.
    pub fn pot_distribution(&self, squares: &[BoardSquare]) -> CalculationResult<PotDistribution> {
        self.pot_distribution_with_rake(squares, self.config.default_rake_percentage)
    }

    pub fn pot_distribution_with_rake(
        &self,
        squares: &[BoardSquare],
        rake_percentage: Decimal,
    ) -> CalculationResult<PotDistribution> {
        self.run(CalculationType::PotDistribution, || {
            payout::pot_distribution(squares, rake_percentage)
        })
    }

    /// Player pot split using the configured default distribution.
    pub fn quarterly_payouts(&self, player_pot: Decimal) -> CalculationResult<QuarterlyPayouts> {
        self.quarterly_payouts_with(player_pot, &self.config.payout_distribution)
    }

    pub fn quarterly_payouts_with(
        &self,
        player_pot: Decimal,
        distribution: &[PayoutDistribution],
    ) -> CalculationResult<QuarterlyPayouts> {
        self.run(CalculationType::QuarterlyPayouts, || {
            payout::quarterly_payouts(player_pot, distribution, self.config.distribution_tolerance)
        })
    }

    pub fn winner_payout(
        &self,
        winning_square_index: usize,
        squares: &[BoardSquare],
        quarterly_amount: Decimal,
    ) -> CalculationResult<WinnerPayout> {
        self.run(CalculationType::WinnerPayout, || {
            payout::winner_payout(winning_square_index, squares, quarterly_amount)
        })
    }

    pub fn leaderboard_points(
        &self,
        wins: u32,
        total_winnings: Decimal,
        games_participated: u32,
    ) -> CalculationResult<LeaderboardPoints> {
        self.run(CalculationType::LeaderboardPoints, || {
            leaderboard::leaderboard_points(wins, total_winnings, games_participated)
        })
    }

    pub fn square_coordinates(&self, index: i64) -> CalculationResult<SquareCoordinates> {
        self.run(CalculationType::SquareCoordinates, || {
            board::square_coordinates(index)
        })
    }

    /// Check a proposed game against the configured limits.
    pub fn validate_game_config(
        &self,
        entry_fee: Decimal,
        rake_percentage: Decimal,
        distribution: &[DistributionInput],
    ) -> CalculationResult<ValidatedGameConfig> {
        self.run(CalculationType::GameConfigValidation, || {
            validation::validate_game_config(entry_fee, rake_percentage, distribution, &self.config)
        })
    }

    pub fn board_stats(&self, squares: &[BoardSquare]) -> CalculationResult<BoardStats> {
        self.run(CalculationType::BoardStats, || board::board_stats(squares))
    }

    /// Find the winner of a quarter and produce a settlement receipt.
    ///
    /// Combines the winning square lookup with the winner payout; fails with
    /// whichever error stops the first step that fails.
    pub fn settle_quarter(
        &self,
        score: GameScore,
        headers: &BoardHeaders,
        squares: &[BoardSquare],
        quarterly_amount: Decimal,
    ) -> CalculationResult<QuarterSettlement> {
        self.run(CalculationType::QuarterSettlement, || {
            let winning_square =
                board::winning_square(score.home, score.away, &headers.home, &headers.away)?;
            let payout = payout::winner_payout(
                winning_square.winning_square_index,
                squares,
                quarterly_amount,
            )?;
            let receipt = SettlementReceipt::new(
                self.board_id.as_deref(),
                score.quarter,
                payout.winning_square_index,
                &payout.winner_address,
                payout.payout_amount,
            );
            Ok(QuarterSettlement {
                score,
                winning_square,
                payout,
                receipt,
            })
        })
    }

    /// Amount due for one quarter under the configured distribution.
    ///
    /// `Ok(None)` means the distribution has no entry for `quarter`.
    ///
    /// # Errors
    ///
    /// Whatever [`Calculator::quarterly_payouts`] fails with, e.g. a
    /// configured distribution that does not sum to 1.0.
    pub fn quarter_amount(
        &self,
        player_pot: Decimal,
        quarter: Quarter,
    ) -> Result<Option<Decimal>, CalculationError> {
        self.quarterly_payouts(player_pot)
            .into_result()
            .map(|payouts| payouts.amount_for(quarter))
    }

    /// Run a known-answer winning square lookup.
    pub fn health_check(&self) -> CalculationResult<HealthStatus> {
        self.run(CalculationType::HealthCheck, || {
            let headers = BoardHeaders::identity();
            let known = board::winning_square(14, 7, &headers.home, &headers.away)?;
            if known.winning_square_index != 74 {
                return Err(CalculationError::Internal {
                    operation: CalculationType::HealthCheck,
                    message: format!(
                        "self-test returned square {}, expected 74",
                        known.winning_square_index
                    ),
                });
            }
            Ok(HealthStatus {
                status: "healthy".to_string(),
                version: VERSION.to_string(),
                capabilities: CalculationType::CAPABILITIES.to_vec(),
            })
        })
    }

    // ========================================================================
    // Envelope
    // ========================================================================

    /// Execute one operation, trapping panics and recording the outcome.
    fn run<T, F>(&self, calculation_type: CalculationType, operation: F) -> CalculationResult<T>
    where
        F: FnOnce() -> Result<T, CalculationError>,
    {
        let outcome = match panic::catch_unwind(AssertUnwindSafe(operation)) {
            Ok(outcome) => outcome,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!(calculation = %calculation_type, %message, "calculation panicked");
                Err(CalculationError::Internal {
                    operation: calculation_type,
                    message,
                })
            }
        };

        match &outcome {
            Ok(_) => debug!(calculation = %calculation_type, "calculation succeeded"),
            Err(err) => debug!(calculation = %calculation_type, error = %err, "calculation failed"),
        }

        self.notify(&CalculatorEvent::Completed {
            calculation_type,
            success: outcome.is_ok(),
        });

        CalculationResult::new(
            outcome,
            Metadata::now(calculation_type, self.board_id.clone()),
        )
    }

    /// Deliver an event to the hook, if any. Hook panics stop here.
    fn notify(&self, event: &CalculatorEvent) {
        let Some(hook) = &self.hook else {
            return;
        };
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| hook(event))) {
            warn!(
                ?event,
                message = %panic_message(payload.as_ref()),
                "event hook panicked"
            );
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
