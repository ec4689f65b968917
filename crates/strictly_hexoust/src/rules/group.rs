//! Connected-component discovery.

use crate::board::StoneLookup;
use crate::grid::{CellId, GridIndex};
use crate::types::Stone;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};
use tracing::{instrument, trace};

/// A maximal set of same-colored cells connected through adjacency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Group {
    stone: Stone,
    cells: BTreeSet<CellId>,
}

impl Group {
    /// Color of every stone in the group.
    pub fn stone(&self) -> Stone {
        self.stone
    }

    /// Number of stones.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Never true for a discovered group; the start cell is always a member.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `cell` belongs to the group.
    pub fn contains(&self, cell: CellId) -> bool {
        self.cells.contains(&cell)
    }

    /// Member cells in ascending id order.
    pub fn cells(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells.iter().copied()
    }
}

/// Collects the group of `stone` containing `start` by breadth-first search.
///
/// # Panics
///
/// If `start` does not hold `stone`.
#[instrument(skip(board, grid))]
pub fn collect_group(
    board: &impl StoneLookup,
    grid: &GridIndex,
    start: CellId,
    stone: Stone,
) -> Group {
    assert_eq!(
        board.stone_at(start),
        Some(stone),
        "group search from {start} which does not hold {stone}"
    );

    let mut cells = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        for neighbor in grid.neighbor_cells(current) {
            if board.stone_at(neighbor) == Some(stone) && cells.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    trace!(size = cells.len(), "Group collected");
    Group { stone, cells }
}
