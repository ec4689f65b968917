//! Serializable view of a game for presentation layers.

use crate::coordinate::HexCoordinate;
use crate::engine::Engine;
use crate::types::{Occupancy, Stone, TurnState};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

/// One cell of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct CellSnapshot {
    /// Where the cell is.
    pub coordinate: HexCoordinate,
    /// What it holds.
    pub occupancy: Occupancy,
}

/// Every cell's occupancy plus the turn state, at one moment.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Turn state when the snapshot was taken.
    turn: TurnState,
    /// Cells in grid order.
    cells: Vec<CellSnapshot>,
}

impl BoardSnapshot {
    /// Copies the current state of `engine`.
    #[instrument(skip(engine))]
    pub fn capture(engine: &Engine) -> Self {
        let cells = engine
            .grid()
            .cells()
            .map(|cell| {
                CellSnapshot::new(
                    engine.grid().coordinate(cell),
                    engine.board().occupancy(cell),
                )
            })
            .collect();
        Self {
            turn: engine.current_turn(),
            cells,
        }
    }

    /// Number of cells holding `stone`.
    pub fn count(&self, stone: Stone) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.occupancy == Occupancy::Occupied(stone))
            .count()
    }

    /// Renders the board as text, one line per `r` row.
    ///
    /// `R` and `B` mark stones and `.` an empty cell. Rows are offset by half a
    /// cell per step so adjacent cells line up as on the hex grid. Meant for
    /// compact boards: lines are padded to each cell's column.
    pub fn render(&self) -> String {
        let Some(min_x) = self.cells.iter().map(|c| column(c.coordinate)).min() else {
            return String::new();
        };

        let mut rows: BTreeMap<i32, Vec<&CellSnapshot>> = BTreeMap::new();
        for cell in &self.cells {
            rows.entry(cell.coordinate.r()).or_default().push(cell);
        }

        let mut lines = Vec::with_capacity(rows.len());
        for mut row in rows.into_values() {
            row.sort_by_key(|cell| cell.coordinate.q());
            let mut line = String::new();
            for cell in row {
                let x = usize::try_from(column(cell.coordinate) - min_x).unwrap_or_default();
                while line.len() < x {
                    line.push(' ');
                }
                line.push(symbol(cell.occupancy));
            }
            lines.push(line);
        }
        lines.join("\n")
    }
}

/// Doubled-width column of a coordinate.
fn column(coordinate: HexCoordinate) -> i64 {
    2 * i64::from(coordinate.q()) + i64::from(coordinate.r())
}

fn symbol(occupancy: Occupancy) -> char {
    match occupancy {
        Occupancy::Empty => '.',
        Occupancy::Occupied(Stone::Red) => 'R',
        Occupancy::Occupied(Stone::Blue) => 'B',
    }
}
