//! First-class invariants for HexOust.
//!
//! Invariants are logical properties of an [`Engine`] that must hold after
//! every accepted move. They are checked in debug builds and can be tested
//! independently.

use crate::engine::Engine;
use crate::types::{Stone, TurnState};
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: a won game leaves the loser without stones.
pub struct TerminalStateConsistent;

impl Invariant<Engine> for TerminalStateConsistent {
    fn holds(engine: &Engine) -> bool {
        match engine.current_turn() {
            TurnState::Won(winner) => {
                let remaining = engine.board().count(winner.opponent());
                if remaining != 0 {
                    warn!(?winner, remaining, "Winner declared with enemy stones left");
                    return false;
                }
                true
            }
            TurnState::ToMove(_) => true,
        }
    }

    fn description() -> &'static str {
        "A won game leaves the losing color with zero stones"
    }
}

/// Invariant: once stones are down, the player waiting for their turn has
/// at least one of them.
///
/// A plain placement hands the turn to the opponent of a player who just
/// placed. A capture keeps the turn, and emptying the opponent ends the game
/// instead. Either way the waiting player cannot be wiped out while the game
/// is in progress.
pub struct WaitingPlayerHasStones;

impl Invariant<Engine> for WaitingPlayerHasStones {
    fn holds(engine: &Engine) -> bool {
        let TurnState::ToMove(mover) = engine.current_turn() else {
            return true;
        };
        let board = engine.board();
        if board.count(Stone::Red) + board.count(Stone::Blue) == 0 {
            return true;
        }

        let waiting = mover.opponent();
        let valid = board.count(waiting) > 0;
        if !valid {
            warn!(?mover, ?waiting, "Game in progress with a wiped-out player");
        }
        valid
    }

    fn description() -> &'static str {
        "A game in progress never leaves the waiting player without stones"
    }
}

/// All engine invariants.
pub type EngineInvariants = (TerminalStateConsistent, WaitingPlayerHasStones);

/// Asserts that all engine invariants hold (panics on violation in debug builds).
#[instrument(skip(engine))]
pub fn assert_invariants(engine: &Engine) {
    if let Err(violations) = EngineInvariants::check_all(engine) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        debug_assert!(false, "Invariant violation: {descriptions}");
    }
}
