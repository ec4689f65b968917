//! Win detection for HexOust.
//!
//! A player wins by capturing the last enemy stone. Only a capturing move can
//! end the game, so these checks are run after captures only.

use crate::board::Board;
use crate::types::Stone;
use tracing::instrument;

/// Whether `stone` has no stones left on the board.
pub fn is_wiped_out(board: &Board, stone: Stone) -> bool {
    board.count(stone) == 0
}

/// Returns the winner after `mover` has captured, if the opponent is gone.
#[instrument(skip(board))]
pub fn check_winner(board: &Board, mover: Stone) -> Option<Stone> {
    is_wiped_out(board, mover.opponent()).then_some(mover)
}
