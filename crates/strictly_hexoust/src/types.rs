//! Core domain types for HexOust.

use serde::{Deserialize, Serialize};

/// Stone color, one per player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Stone {
    /// Red stones (moves first by default).
    Red,
    /// Blue stones.
    Blue,
}

impl Stone {
    /// Returns the opposing color.
    pub fn opponent(self) -> Self {
        match self {
            Stone::Red => Stone::Blue,
            Stone::Blue => Stone::Red,
        }
    }
}

/// What a single cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occupancy {
    /// No stone.
    #[default]
    Empty,
    /// A stone of the given color.
    Occupied(Stone),
}

impl Occupancy {
    /// The stone in this cell, if any.
    pub fn stone(self) -> Option<Stone> {
        match self {
            Occupancy::Empty => None,
            Occupancy::Occupied(stone) => Some(stone),
        }
    }

    /// Whether the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Occupancy::Empty
    }
}

/// Whose turn it is, or who has won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnState {
    /// The given color moves next.
    ToMove(Stone),
    /// The given color captured the last enemy stone. Terminal.
    Won(Stone),
}

impl TurnState {
    /// Whether the game is over.
    pub fn is_terminal(self) -> bool {
        matches!(self, TurnState::Won(_))
    }

    /// The color to move, or `None` once the game is over.
    pub fn mover(self) -> Option<Stone> {
        match self {
            TurnState::ToMove(stone) => Some(stone),
            TurnState::Won(_) => None,
        }
    }

    /// The winning color, if the game is over.
    pub fn winner(self) -> Option<Stone> {
        match self {
            TurnState::Won(stone) => Some(stone),
            TurnState::ToMove(_) => None,
        }
    }
}

impl std::fmt::Display for TurnState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnState::ToMove(Stone::Red) => write!(f, "Player Red's Turn"),
            TurnState::ToMove(Stone::Blue) => write!(f, "Player Blue's Turn"),
            TurnState::Won(Stone::Red) => write!(f, "Red Wins!"),
            TurnState::Won(Stone::Blue) => write!(f, "Blue Wins!"),
        }
    }
}
