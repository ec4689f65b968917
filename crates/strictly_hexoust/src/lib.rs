//! Strictly HexOust - rules engine for a hexagonal capture game
//!
//! Two players, Red and Blue, take turns placing stones on a hex grid. A
//! plain placement may not touch a stone of the mover's own color. A
//! placement that joins a group strictly larger than every enemy group it
//! touches captures those groups instead, and the mover plays again. Taking
//! the last enemy stone wins.
//!
//! # Architecture
//!
//! - **Grid**: coordinates, dense cell ids and adjacency
//! - **Board**: one occupancy per cell
//! - **Rules**: group discovery, captures, plain placements, win detection
//! - **Engine**: turn controller and the only mutator of game state
//! - **SharedEngine**: mutex-guarded handle for concurrent callers
//!
//! # Example
//!
//! ```
//! use strictly_hexoust::{Engine, HexCoordinate, Stone, TurnState, layout};
//!
//! let mut engine = Engine::new(layout::hexagon(1).unwrap(), Stone::Red).unwrap();
//! assert!(engine.submit_move(HexCoordinate::ORIGIN).is_accepted());
//! assert_eq!(engine.current_turn(), TurnState::ToMove(Stone::Blue));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod coordinate;
mod engine;
mod error;
mod grid;
mod observer;
mod shared;
mod snapshot;
mod types;

pub mod invariants;
pub mod layout;
pub mod rules;

// Crate-level exports - Geometry
pub use coordinate::{CoordinateError, Direction, HexCoordinate};
pub use grid::{CellId, GridIndex};

// Crate-level exports - Game state
pub use board::{Board, StoneLookup};
pub use types::{Occupancy, Stone, TurnState};

// Crate-level exports - Moves
pub use action::{MoveKind, MoveResult, Rejection};

// Crate-level exports - Engine
pub use engine::Engine;
pub use error::EngineError;
pub use observer::BoardObserver;
pub use shared::SharedEngine;
pub use snapshot::{BoardSnapshot, CellSnapshot};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};
