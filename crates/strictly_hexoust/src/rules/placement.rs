//! Non-capturing placements.

use crate::board::{Board, StoneLookup};
use crate::grid::{CellId, GridIndex};
use crate::types::Stone;
use tracing::instrument;

/// Whether any on-board neighbor of `cell` holds `stone`.
pub fn touches_own_stone(
    board: &impl StoneLookup,
    grid: &GridIndex,
    cell: CellId,
    stone: Stone,
) -> bool {
    grid.neighbor_cells(cell)
        .any(|neighbor| board.stone_at(neighbor) == Some(stone))
}

/// Whether `stone` may be placed on `cell` without capturing.
///
/// The cell must be empty and no neighbor may hold the same color. Enemy
/// neighbors are allowed.
#[instrument(skip(board, grid))]
pub fn can_place_quietly(board: &Board, grid: &GridIndex, cell: CellId, stone: Stone) -> bool {
    board.is_vacant(cell) && !touches_own_stone(board, grid, cell, stone)
}
