//! Bidirectional index between coordinates and dense cell ids.

use crate::coordinate::HexCoordinate;
use crate::error::EngineError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

/// Dense identifier of a cell: its position in the construction order.
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[display("#{_0}")]
pub struct CellId(usize);

impl CellId {
    /// Position of the cell in the grid's coordinate list.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Immutable set of on-board coordinates.
///
/// Coordinates outside the set have no id and are never anyone's neighbor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridIndex {
    coordinates: Vec<HexCoordinate>,
    ids: HashMap<HexCoordinate, CellId>,
}

impl GridIndex {
    /// Indexes `coordinates` in the order given.
    ///
    /// # Errors
    ///
    /// [`EngineError::EmptyBoard`] for an empty sequence and
    /// [`EngineError::DuplicateCoordinate`] if any coordinate repeats.
    #[instrument(skip(coordinates), fields(cells = coordinates.len()))]
    pub fn new(coordinates: Vec<HexCoordinate>) -> Result<Self, EngineError> {
        if coordinates.is_empty() {
            warn!("Refusing to index an empty board");
            return Err(EngineError::EmptyBoard);
        }

        let mut ids = HashMap::with_capacity(coordinates.len());
        for (index, coordinate) in coordinates.iter().enumerate() {
            if ids.insert(*coordinate, CellId(index)).is_some() {
                warn!(%coordinate, "Duplicate coordinate in board");
                return Err(EngineError::DuplicateCoordinate {
                    coordinate: *coordinate,
                });
            }
        }

        debug!("Grid indexed");
        Ok(Self { coordinates, ids })
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Always false: construction rejects empty boards.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// The id of `coordinate`, or `None` if it is off the board.
    pub fn index_of(&self, coordinate: HexCoordinate) -> Option<CellId> {
        self.ids.get(&coordinate).copied()
    }

    /// Whether `coordinate` is on the board.
    pub fn contains(&self, coordinate: HexCoordinate) -> bool {
        self.ids.contains_key(&coordinate)
    }

    /// The coordinate of `cell`.
    ///
    /// # Panics
    ///
    /// If `cell` was not issued by this grid.
    pub fn coordinate(&self, cell: CellId) -> HexCoordinate {
        self.coordinates[cell.0]
    }

    /// All coordinates in id order.
    pub fn coordinates(&self) -> &[HexCoordinate] {
        &self.coordinates
    }

    /// All cell ids in order.
    pub fn cells(&self) -> impl Iterator<Item = CellId> + use<> {
        (0..self.coordinates.len()).map(CellId)
    }

    /// On-board coordinates adjacent to `coordinate`, in direction order.
    pub fn neighbors(&self, coordinate: HexCoordinate) -> Vec<HexCoordinate> {
        coordinate
            .adjacent()
            .filter(|neighbor| self.contains(*neighbor))
            .collect()
    }

    /// Ids of the cells adjacent to `cell`, in direction order.
    pub fn neighbor_cells(&self, cell: CellId) -> impl Iterator<Item = CellId> + '_ {
        self.coordinate(cell)
            .adjacent()
            .filter_map(|neighbor| self.index_of(neighbor))
    }
}
