//! Thread-safe handle to an engine.

use crate::action::MoveResult;
use crate::coordinate::HexCoordinate;
use crate::engine::Engine;
use crate::observer::BoardObserver;
use crate::snapshot::BoardSnapshot;
use crate::types::{Occupancy, TurnState};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, instrument};

/// Cloneable handle serializing all access to one [`Engine`].
///
/// Every call holds the lock for its whole duration, so no reader ever sees
/// a move half applied. Observers are notified after the lock is released and
/// may query the handle again; by then another caller may have moved.
#[derive(Debug, Clone)]
pub struct SharedEngine {
    engine: Arc<Mutex<Engine>>,
}

impl SharedEngine {
    /// Wraps `engine`.
    #[instrument(skip(engine))]
    pub fn new(engine: Engine) -> Self {
        debug!("Sharing engine");
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Engine> {
        // Engine state is never left inconsistent across a panic in submit_move.
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Plays the current mover's stone at `coordinate` as one critical section.
    #[instrument(skip(self))]
    pub fn submit_move(&self, coordinate: HexCoordinate) -> MoveResult {
        let (result, observers) = {
            let mut engine = self.lock();
            let result = engine.apply_move(coordinate);
            let observers = if result.is_accepted() {
                engine.observers()
            } else {
                Vec::new()
            };
            (result, observers)
        };

        for observer in observers {
            observer.on_board_updated();
        }
        result
    }

    /// Registers an observer notified after every accepted move.
    pub fn add_observer(&self, observer: impl BoardObserver + 'static) {
        self.lock().add_observer(observer);
    }

    /// Whose turn it is, or who won.
    pub fn current_turn(&self) -> TurnState {
        self.lock().current_turn()
    }

    /// Occupancy of `coordinate`, or `None` if it is off the board.
    pub fn occupancy_of(&self, coordinate: HexCoordinate) -> Option<Occupancy> {
        self.lock().occupancy_of(coordinate)
    }

    /// Consistent snapshot of the board and turn state.
    pub fn snapshot(&self) -> BoardSnapshot {
        self.lock().snapshot()
    }

    /// Runs `f` with exclusive access to the engine.
    ///
    /// Moves submitted inside `f` notify observers while the lock is held.
    pub fn with_engine<T>(&self, f: impl FnOnce(&mut Engine) -> T) -> T {
        f(&mut self.lock())
    }
}

impl From<Engine> for SharedEngine {
    fn from(engine: Engine) -> Self {
        Self::new(engine)
    }
}
