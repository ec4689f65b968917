//! Capturing placements.
//!
//! A stone placed next to enemy groups captures all of them when each one is
//! strictly smaller than the mover's group containing the new stone. The
//! placement is evaluated against a [`Tentative`] view, so nothing is written
//! to the board until the capture is known to be legal.

use super::group::{Group, collect_group};
use crate::board::{Board, StoneLookup};
use crate::grid::{CellId, GridIndex};
use crate::types::Stone;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// A board view with one extra stone that has not been committed.
#[derive(Debug, Clone, Copy)]
pub struct Tentative<'a, B> {
    board: &'a B,
    cell: CellId,
    stone: Stone,
}

impl<'a, B: StoneLookup> Tentative<'a, B> {
    /// Views `board` as if `stone` stood on `cell`.
    pub fn new(board: &'a B, cell: CellId, stone: Stone) -> Self {
        Self { board, cell, stone }
    }
}

impl<B: StoneLookup> StoneLookup for Tentative<'_, B> {
    fn stone_at(&self, cell: CellId) -> Option<Stone> {
        if cell == self.cell {
            Some(self.stone)
        } else {
            self.board.stone_at(cell)
        }
    }
}

/// A legal capture, ready to be committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturePlan {
    cell: CellId,
    stone: Stone,
    group_size: usize,
    captured: Vec<Group>,
}

impl CapturePlan {
    /// Cell receiving the new stone.
    pub fn cell(&self) -> CellId {
        self.cell
    }

    /// Color of the capturing stone.
    pub fn stone(&self) -> Stone {
        self.stone
    }

    /// Size of the mover's group once the stone is placed.
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Enemy groups to remove, each listed once.
    pub fn captured(&self) -> &[Group] {
        &self.captured
    }

    /// Total number of enemy stones removed.
    pub fn captured_stones(&self) -> usize {
        self.captured.iter().map(Group::len).sum()
    }

    /// Places the stone and removes every captured group.
    #[instrument(skip(self, board), fields(cell = %self.cell, stone = %self.stone))]
    pub fn apply(&self, board: &mut Board) {
        board.place(self.cell, self.stone);
        for cell in self.captured.iter().flat_map(Group::cells) {
            board.clear(cell);
        }
        debug!(removed = self.captured_stones(), "Capture applied");
    }
}

/// Result of evaluating a placement as a capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureOutcome {
    /// The placement captures the listed groups.
    Captured(CapturePlan),
    /// No enemy stone touches the mover's group.
    NoContact,
    /// An adjacent enemy group is at least as large as the mover's group.
    Blocked {
        /// Size of the mover's group including the new stone.
        group_size: usize,
        /// Size of the largest adjacent enemy group.
        blocking_size: usize,
    },
}

impl CaptureOutcome {
    /// Whether the placement is a legal capture.
    pub fn is_capture(&self) -> bool {
        matches!(self, CaptureOutcome::Captured(_))
    }
}

/// Evaluates placing `stone` on the empty `cell` as a capture.
///
/// The board is only read. Every enemy group touching any stone of the
/// mover's resulting group is considered, and a single group of equal or
/// greater size blocks the whole capture.
///
/// # Panics
///
/// If `cell` is occupied.
#[instrument(skip(board, grid))]
pub fn plan_capture(
    board: &Board,
    grid: &GridIndex,
    cell: CellId,
    stone: Stone,
) -> CaptureOutcome {
    assert!(
        board.is_vacant(cell),
        "capture evaluated on occupied cell {cell}"
    );

    let view = Tentative::new(board, cell, stone);
    let own = collect_group(&view, grid, cell, stone);
    let enemy = stone.opponent();

    let mut seen = BTreeSet::new();
    let mut enemies: Vec<Group> = Vec::new();
    for member in own.cells() {
        for neighbor in grid.neighbor_cells(member) {
            if view.stone_at(neighbor) == Some(enemy) && !seen.contains(&neighbor) {
                let group = collect_group(&view, grid, neighbor, enemy);
                seen.extend(group.cells());
                enemies.push(group);
            }
        }
    }

    let Some(blocking_size) = enemies.iter().map(Group::len).max() else {
        debug!("No enemy contact");
        return CaptureOutcome::NoContact;
    };

    if blocking_size >= own.len() {
        debug!(
            group_size = own.len(),
            blocking_size, "Capture blocked by enemy group"
        );
        return CaptureOutcome::Blocked {
            group_size: own.len(),
            blocking_size,
        };
    }

    CaptureOutcome::Captured(CapturePlan {
        cell,
        stone,
        group_size: own.len(),
        captured: enemies,
    })
}

/// Evaluates and, when legal, commits a capturing placement.
///
/// Any outcome other than [`CaptureOutcome::Captured`] leaves the board
/// exactly as it was.
#[instrument(skip(board, grid))]
pub fn attempt_capture(
    board: &mut Board,
    grid: &GridIndex,
    cell: CellId,
    stone: Stone,
) -> CaptureOutcome {
    let outcome = plan_capture(board, grid, cell, stone);
    if let CaptureOutcome::Captured(plan) = &outcome {
        plan.apply(board);
    }
    outcome
}
