//! First-class move types for HexOust.
//!
//! A submitted move is either accepted, in which case the board and turn
//! state have changed, or rejected with a reason and nothing has changed.

use crate::coordinate::HexCoordinate;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// How an accepted move was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum MoveKind {
    /// Plain placement; the turn passed to the opponent.
    #[display("placed")]
    Placed,
    /// Capture; the mover keeps the turn unless the game ended.
    #[display("captured {stones} stone(s) in {groups} group(s)")]
    Captured {
        /// Number of enemy groups removed.
        groups: usize,
        /// Number of enemy stones removed.
        stones: usize,
    },
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Rejection {
    /// The game has already been won.
    #[display("Game is already over")]
    GameOver,
    /// The coordinate is not part of the board.
    #[display("Cell {_0} is not on the board")]
    OffBoard(HexCoordinate),
    /// The cell already holds a stone.
    #[display("Cell {_0} is already occupied")]
    Occupied(HexCoordinate),
    /// No capture, and a neighbor already holds the mover's color.
    #[display("Cell {_0} touches a stone of the same color")]
    AdjacentToOwnStone(HexCoordinate),
    /// An enemy group at least as large blocked the capture, and the cell
    /// also touches the mover's own color.
    #[display("Capture blocked: group of {group_size} against enemy group of {blocking_size}")]
    CaptureBlocked {
        /// Size of the mover's group had the stone been placed.
        group_size: usize,
        /// Size of the largest adjacent enemy group.
        blocking_size: usize,
    },
}

impl std::error::Error for Rejection {}

/// Result of [`Engine::submit_move`](crate::Engine::submit_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum MoveResult {
    /// The move was played.
    #[display("accepted ({_0})")]
    Accepted(MoveKind),
    /// The move was refused; no state changed.
    #[display("rejected ({_0})")]
    Rejected(Rejection),
}

impl MoveResult {
    /// Whether the move was played.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted(_))
    }

    /// The rejection reason, if refused.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveResult::Rejected(reason) => Some(*reason),
            MoveResult::Accepted(_) => None,
        }
    }

    /// Converts to a `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<MoveKind, Rejection> {
        match self {
            MoveResult::Accepted(kind) => Ok(kind),
            MoveResult::Rejected(reason) => Err(reason),
        }
    }
}
