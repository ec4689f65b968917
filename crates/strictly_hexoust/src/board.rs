//! Per-cell occupancy storage.

use crate::grid::CellId;
use crate::types::{Occupancy, Stone};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Read access to which stone, if any, sits on a cell.
///
/// Group discovery works against this rather than [`Board`] so that a
/// placement can be evaluated before it is committed.
pub trait StoneLookup {
    /// The stone on `cell`, or `None` if it is empty.
    fn stone_at(&self, cell: CellId) -> Option<Stone>;
}

/// Occupancy of every indexed cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Occupancy>,
}

impl Board {
    /// Creates an empty board with `len` cells.
    #[instrument]
    pub fn new(len: usize) -> Self {
        Self {
            cells: vec![Occupancy::Empty; len],
        }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the board has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// What `cell` holds.
    pub fn occupancy(&self, cell: CellId) -> Occupancy {
        self.cells[cell.index()]
    }

    /// Whether `cell` holds no stone.
    pub fn is_vacant(&self, cell: CellId) -> bool {
        self.occupancy(cell).is_empty()
    }

    /// Puts `stone` on an empty cell.
    ///
    /// # Panics
    ///
    /// If the cell is already occupied.
    #[instrument(skip(self))]
    pub fn place(&mut self, cell: CellId, stone: Stone) {
        let slot = &mut self.cells[cell.index()];
        assert!(
            slot.is_empty(),
            "place on occupied cell {cell}: holds {slot:?}"
        );
        *slot = Occupancy::Occupied(stone);
        trace!("Stone placed");
    }

    /// Empties `cell` unconditionally.
    #[instrument(skip(self))]
    pub fn clear(&mut self, cell: CellId) {
        self.cells[cell.index()] = Occupancy::Empty;
    }

    /// Number of cells holding `stone`.
    pub fn count(&self, stone: Stone) -> usize {
        self.cells
            .iter()
            .filter(|occupancy| occupancy.stone() == Some(stone))
            .count()
    }

    /// Occupancy of every cell in id order.
    pub fn occupancies(&self) -> &[Occupancy] {
        &self.cells
    }
}

impl StoneLookup for Board {
    fn stone_at(&self, cell: CellId) -> Option<Stone> {
        self.occupancy(cell).stone()
    }
}
