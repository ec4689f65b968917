//! Cube coordinates for the hexagonal grid.
//!
//! A cell is addressed by `(q, r, s)` with `q + r + s = 0`. The six unit
//! directions define adjacency; their order is fixed so that anything
//! derived from a neighbor walk is reproducible.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A validated cube coordinate.
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[display("({q}, {r}, {s})")]
#[serde(try_from = "[i32; 3]", into = "[i32; 3]")]
pub struct HexCoordinate {
    q: i32,
    r: i32,
    s: i32,
}

impl HexCoordinate {
    /// The center of the board.
    pub const ORIGIN: HexCoordinate = HexCoordinate { q: 0, r: 0, s: 0 };

    /// Creates a coordinate, failing unless `q + r + s == 0`.
    #[instrument]
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self, CoordinateError> {
        if i64::from(q) + i64::from(r) + i64::from(s) != 0 {
            return Err(CoordinateError::NotOnPlane { q, r, s });
        }
        Ok(Self { q, r, s })
    }

    /// Creates a coordinate from its axial part, deriving `s`.
    ///
    /// # Panics
    ///
    /// If `-q - r` does not fit in an `i32`.
    pub const fn axial(q: i32, r: i32) -> Self {
        let s = match q.checked_neg() {
            Some(neg) => neg.checked_sub(r),
            None => None,
        };
        match s {
            Some(s) => Self { q, r, s },
            None => panic!("axial coordinate out of range"),
        }
    }

    /// The q component.
    pub const fn q(&self) -> i32 {
        self.q
    }

    /// The r component.
    pub const fn r(&self) -> i32 {
        self.r
    }

    /// The s component.
    pub const fn s(&self) -> i32 {
        self.s
    }

    /// The adjacent coordinate one step in `direction`.
    ///
    /// The result may lie outside any particular board; callers resolve it
    /// through a [`GridIndex`](crate::GridIndex). `None` when the step leaves
    /// the `i32` range, which no board can contain.
    pub fn neighbor(self, direction: Direction) -> Option<Self> {
        let (dq, dr, ds) = direction.offset();
        Some(Self {
            q: self.q.checked_add(dq)?,
            r: self.r.checked_add(dr)?,
            s: self.s.checked_add(ds)?,
        })
    }

    /// Adjacent coordinates in direction order.
    ///
    /// Six of them, except at the very edge of the `i32` range.
    pub fn adjacent(self) -> impl Iterator<Item = HexCoordinate> {
        Direction::iter().filter_map(move |d| self.neighbor(d))
    }

    /// Hex distance between two coordinates.
    pub fn distance(self, other: HexCoordinate) -> u64 {
        let delta = |a: i32, b: i32| (i64::from(a) - i64::from(b)).unsigned_abs();
        (delta(self.q, other.q) + delta(self.r, other.r) + delta(self.s, other.s)) / 2
    }

    /// Whether `other` is exactly one unit step away.
    pub fn is_adjacent(self, other: HexCoordinate) -> bool {
        self.distance(other) == 1
    }
}

impl TryFrom<[i32; 3]> for HexCoordinate {
    type Error = CoordinateError;

    fn try_from([q, r, s]: [i32; 3]) -> Result<Self, Self::Error> {
        Self::new(q, r, s)
    }
}

impl From<HexCoordinate> for [i32; 3] {
    fn from(coord: HexCoordinate) -> Self {
        [coord.q, coord.r, coord.s]
    }
}

impl FromStr for HexCoordinate {
    type Err = CoordinateError;

    /// Parses `"q,r,s"`, tolerating whitespace and surrounding parentheses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let parts = trimmed
            .split(',')
            .map(|part| part.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| CoordinateError::Unparsable(s.to_string()))?;

        match parts.as_slice() {
            [q, r, s] => Self::new(*q, *r, *s),
            _ => Err(CoordinateError::Unparsable(s.to_string())),
        }
    }
}

/// One of the six unit steps between adjacent cells.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Direction {
    /// (+1, 0, -1)
    East,
    /// (+1, -1, 0)
    NorthEast,
    /// (0, -1, +1)
    NorthWest,
    /// (-1, 0, +1)
    West,
    /// (-1, +1, 0)
    SouthWest,
    /// (0, +1, -1)
    SouthEast,
}

impl Direction {
    /// The cube offset `(dq, dr, ds)` of this direction.
    pub const fn offset(self) -> (i32, i32, i32) {
        match self {
            Direction::East => (1, 0, -1),
            Direction::NorthEast => (1, -1, 0),
            Direction::NorthWest => (0, -1, 1),
            Direction::West => (-1, 0, 1),
            Direction::SouthWest => (-1, 1, 0),
            Direction::SouthEast => (0, 1, -1),
        }
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::NorthEast => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::West => Direction::East,
            Direction::SouthWest => Direction::NorthEast,
            Direction::SouthEast => Direction::NorthWest,
        }
    }
}

/// Error building a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CoordinateError {
    /// The components do not sum to zero.
    #[display("Invalid coordinate ({q}, {r}, {s}): q + r + s must be 0")]
    NotOnPlane {
        /// q component.
        q: i32,
        /// r component.
        r: i32,
        /// s component.
        s: i32,
    },

    /// The text is not a `q,r,s` triple of integers.
    #[display("Cannot parse {_0:?} as a q,r,s coordinate")]
    Unparsable(String),
}

impl std::error::Error for CoordinateError {}
