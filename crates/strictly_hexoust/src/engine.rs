//! Turn controller for HexOust.
//!
//! The [`Engine`] owns the board and the turn state and is the only thing
//! that mutates them. A submitted move is first evaluated as a capture; only
//! if that fails is it tried as a plain placement. A capture keeps the turn
//! with the mover, a plain placement passes it.

use crate::action::{MoveKind, MoveResult, Rejection};
use crate::board::Board;
use crate::coordinate::HexCoordinate;
use crate::error::EngineError;
use crate::grid::{CellId, GridIndex};
use crate::invariants::assert_invariants;
use crate::observer::BoardObserver;
use crate::rules::{self, CaptureOutcome};
use crate::snapshot::BoardSnapshot;
use crate::types::{Occupancy, Stone, TurnState};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// HexOust rules engine.
pub struct Engine {
    grid: Arc<GridIndex>,
    board: Board,
    turn: TurnState,
    observers: Vec<Arc<dyn BoardObserver>>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("cells", &self.grid.len())
            .field("board", &self.board)
            .field("turn", &self.turn)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Engine {
    /// Starts a game on the given cells with `first_mover` to play.
    ///
    /// # Errors
    ///
    /// [`EngineError::EmptyBoard`] or [`EngineError::DuplicateCoordinate`].
    #[instrument(skip(coordinates), fields(cells = coordinates.len()))]
    pub fn new(coordinates: Vec<HexCoordinate>, first_mover: Stone) -> Result<Self, EngineError> {
        let grid = GridIndex::new(coordinates)?;
        Ok(Self::with_grid(Arc::new(grid), first_mover))
    }

    /// Starts a game from raw `[q, r, s]` triples.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidCoordinate`] if a triple does not sum to zero,
    /// otherwise as [`Engine::new`].
    #[instrument(skip(triples))]
    pub fn from_triples(
        triples: impl IntoIterator<Item = [i32; 3]>,
        first_mover: Stone,
    ) -> Result<Self, EngineError> {
        let coordinates = triples
            .into_iter()
            .map(HexCoordinate::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(coordinates, first_mover)
    }

    /// Starts a game on an existing, possibly shared, grid.
    #[instrument(skip(grid), fields(cells = grid.len()))]
    pub fn with_grid(grid: Arc<GridIndex>, first_mover: Stone) -> Self {
        info!(?first_mover, "New game");
        Self {
            board: Board::new(grid.len()),
            grid,
            turn: TurnState::ToMove(first_mover),
            observers: Vec::new(),
        }
    }

    /// Registers an observer notified after every accepted move.
    pub fn add_observer(&mut self, observer: impl BoardObserver + 'static) {
        self.observers.push(Arc::new(observer));
    }

    /// The cell index.
    pub fn grid(&self) -> &GridIndex {
        &self.grid
    }

    /// A shared handle to the cell index.
    pub fn shared_grid(&self) -> Arc<GridIndex> {
        Arc::clone(&self.grid)
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Whose turn it is, or who won.
    pub fn current_turn(&self) -> TurnState {
        self.turn
    }

    /// Occupancy of `coordinate`, or `None` if it is off the board.
    pub fn occupancy_of(&self, coordinate: HexCoordinate) -> Option<Occupancy> {
        self.grid
            .index_of(coordinate)
            .map(|cell| self.board.occupancy(cell))
    }

    /// On-board neighbors of `coordinate` in direction order.
    pub fn neighbors_of(&self, coordinate: HexCoordinate) -> Vec<HexCoordinate> {
        self.grid.neighbors(coordinate)
    }

    /// Number of stones of `stone` on the board.
    pub fn stone_count(&self, stone: Stone) -> usize {
        self.board.count(stone)
    }

    /// Plays the current mover's stone at `coordinate`.
    ///
    /// A rejected move leaves the board and turn state untouched and notifies
    /// no one.
    pub fn submit_move(&mut self, coordinate: HexCoordinate) -> MoveResult {
        let result = self.apply_move(coordinate);
        if result.is_accepted() {
            for observer in &self.observers {
                observer.on_board_updated();
            }
        }
        result
    }

    /// Plays a move without notifying observers.
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub(crate) fn apply_move(&mut self, coordinate: HexCoordinate) -> MoveResult {
        let result = match self.validate(coordinate) {
            Ok((cell, stone)) => self.play(cell, stone),
            Err(reason) => MoveResult::Rejected(reason),
        };

        match result {
            MoveResult::Accepted(kind) => {
                info!(%coordinate, %kind, turn = %self.turn, "Move accepted");
                assert_invariants(self);
            }
            MoveResult::Rejected(reason) => {
                debug!(%coordinate, %reason, "Move rejected");
            }
        }
        result
    }

    /// Handles to every registered observer.
    pub(crate) fn observers(&self) -> Vec<Arc<dyn BoardObserver>> {
        self.observers.clone()
    }

    /// Coordinates where the current mover would have a move accepted.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<HexCoordinate> {
        let Some(stone) = self.turn.mover() else {
            return Vec::new();
        };

        self.grid
            .cells()
            .filter(|cell| self.board.is_vacant(*cell))
            .filter(|cell| {
                rules::plan_capture(&self.board, &self.grid, *cell, stone).is_capture()
                    || rules::can_place_quietly(&self.board, &self.grid, *cell, stone)
            })
            .map(|cell| self.grid.coordinate(cell))
            .collect()
    }

    /// Serializable view of the board and turn state.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(self)
    }

    fn validate(&self, coordinate: HexCoordinate) -> Result<(CellId, Stone), Rejection> {
        let stone = self.turn.mover().ok_or(Rejection::GameOver)?;
        let cell = self
            .grid
            .index_of(coordinate)
            .ok_or(Rejection::OffBoard(coordinate))?;
        if !self.board.is_vacant(cell) {
            return Err(Rejection::Occupied(coordinate));
        }
        Ok((cell, stone))
    }

    fn play(&mut self, cell: CellId, stone: Stone) -> MoveResult {
        let blocked = match rules::attempt_capture(&mut self.board, &self.grid, cell, stone) {
            CaptureOutcome::Captured(plan) => {
                if let Some(winner) = rules::check_winner(&self.board, stone) {
                    self.turn = TurnState::Won(winner);
                }
                return MoveResult::Accepted(MoveKind::Captured {
                    groups: plan.captured().len(),
                    stones: plan.captured_stones(),
                });
            }
            CaptureOutcome::NoContact => None,
            CaptureOutcome::Blocked {
                group_size,
                blocking_size,
            } => Some(Rejection::CaptureBlocked {
                group_size,
                blocking_size,
            }),
        };

        if !rules::can_place_quietly(&self.board, &self.grid, cell, stone) {
            let coordinate = self.grid.coordinate(cell);
            return MoveResult::Rejected(
                blocked.unwrap_or(Rejection::AdjacentToOwnStone(coordinate)),
            );
        }

        self.board.place(cell, stone);
        self.turn = TurnState::ToMove(stone.opponent());
        MoveResult::Accepted(MoveKind::Placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn four() -> Engine {
        Engine::new(
            vec![
                HexCoordinate::axial(0, 0),
                HexCoordinate::axial(1, -1),
                HexCoordinate::axial(1, 0),
                HexCoordinate::axial(0, 1),
            ],
            Stone::Red,
        )
        .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let engine = four();
        assert_eq!(engine.current_turn(), TurnState::ToMove(Stone::Red));
        assert_eq!(engine.stone_count(Stone::Red), 0);
        assert_eq!(engine.legal_moves().len(), 4);
    }

    #[test]
    fn test_plain_placement_switches_turn() {
        let mut engine = four();
        let result = engine.submit_move(HexCoordinate::ORIGIN);
        assert_eq!(result, MoveResult::Accepted(MoveKind::Placed));
        assert_eq!(engine.current_turn(), TurnState::ToMove(Stone::Blue));
    }

    #[test]
    fn test_occupied_does_not_switch() {
        let mut engine = four();
        assert!(engine.submit_move(HexCoordinate::ORIGIN).is_accepted());
        let result = engine.submit_move(HexCoordinate::ORIGIN);
        assert_eq!(result.rejection(), Some(Rejection::Occupied(HexCoordinate::ORIGIN)));
        assert_eq!(engine.current_turn(), TurnState::ToMove(Stone::Blue));
    }

    #[test]
    fn test_capture_leads_to_win() {
        let mut engine = four();
        assert!(engine.submit_move(HexCoordinate::axial(0, 0)).is_accepted());
        assert!(engine.submit_move(HexCoordinate::axial(1, -1)).is_accepted());
        assert_eq!(
            engine.submit_move(HexCoordinate::axial(1, 0)),
            MoveResult::Accepted(MoveKind::Captured { groups: 1, stones: 1 })
        );
        assert_eq!(engine.current_turn(), TurnState::Won(Stone::Red));

        assert_eq!(
            engine.submit_move(HexCoordinate::axial(0, 1)).rejection(),
            Some(Rejection::GameOver)
        );
        assert!(engine.legal_moves().is_empty());
    }

    #[test]
    fn test_off_board_rejected() {
        let mut engine = four();
        let far = HexCoordinate::axial(5, -5);
        assert_eq!(
            engine.submit_move(far).rejection(),
            Some(Rejection::OffBoard(far))
        );
        assert_eq!(engine.occupancy_of(far), None);
    }

    #[test]
    fn test_observer_called_only_on_accept() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut engine = four();
        let counter = Arc::clone(&calls);
        engine.add_observer(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        engine.submit_move(HexCoordinate::ORIGIN);
        engine.submit_move(HexCoordinate::ORIGIN);
        engine.submit_move(HexCoordinate::axial(9, 0));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_from_triples_validates() {
        assert!(matches!(
            Engine::from_triples([[0, 0, 0], [1, 1, 0]], Stone::Red),
            Err(EngineError::InvalidCoordinate { .. })
        ));
        assert!(Engine::from_triples([[0, 0, 0], [1, -1, 0]], Stone::Blue).is_ok());
        assert!(matches!(
            Engine::from_triples([[i32::MAX, i32::MAX, 2]], Stone::Red),
            Err(EngineError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_cells_at_i32_limit_play_normally() {
        let edge = [i32::MAX, -i32::MAX, 0];
        let west = [i32::MAX - 1, -i32::MAX, 1];
        let mut engine = Engine::from_triples([edge, west], Stone::Red).unwrap();
        let edge = HexCoordinate::try_from(edge).unwrap();
        let west = HexCoordinate::try_from(west).unwrap();

        assert_eq!(engine.neighbors_of(edge), vec![west]);
        assert_eq!(
            engine.submit_move(edge),
            MoveResult::Accepted(MoveKind::Placed)
        );
        assert_eq!(
            engine.submit_move(west),
            MoveResult::Accepted(MoveKind::Placed)
        );
        assert_eq!(engine.current_turn(), TurnState::ToMove(Stone::Red));
        assert!(engine.legal_moves().is_empty());
    }
}
