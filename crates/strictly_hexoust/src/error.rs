//! Engine construction errors.

use crate::coordinate::{CoordinateError, HexCoordinate};
use derive_more::{Display, Error, From};

/// Error building a board or engine.
///
/// Move legality never surfaces here: rejected moves are reported through
/// [`MoveResult`](crate::MoveResult).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum EngineError {
    /// A supplied coordinate violates `q + r + s = 0`.
    #[display("{source}")]
    #[from]
    InvalidCoordinate {
        /// The underlying coordinate error.
        source: CoordinateError,
    },

    /// No coordinates were supplied.
    #[display("Board must contain at least one cell")]
    EmptyBoard,

    /// The same coordinate was supplied twice.
    #[display("Coordinate {coordinate} appears more than once")]
    DuplicateCoordinate {
        /// The repeated coordinate.
        coordinate: HexCoordinate,
    },

    /// A generated board would exceed the supported size.
    #[display("Board radius {radius} exceeds the maximum of {max}")]
    RadiusTooLarge {
        /// The requested radius.
        radius: u32,
        /// The largest supported radius.
        max: u32,
    },
}
