//! Board positions with index conversions.

use crate::types::Board;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the board.
///
/// The nine variants name the cells of the grid; [`Position::to_index`]
/// maps them onto row-major indices 0-8. Using an enum rather than a
/// bare index makes out-of-range positions unrepresentable, so board
/// access never needs a bounds check.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// Returns a display label for this position.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts the position to its row-major board index (0-8).
    #[instrument]
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates a position from a row-major board index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Position::TopLeft),
            1 => Some(Position::TopCenter),
            2 => Some(Position::TopRight),
            3 => Some(Position::MiddleLeft),
            4 => Some(Position::Center),
            5 => Some(Position::MiddleRight),
            6 => Some(Position::BottomLeft),
            7 => Some(Position::BottomCenter),
            8 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// Returns the zero-based row of this position.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Returns the zero-based column of this position.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// All nine positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Filters positions by board state, returning only empty squares.
    ///
    /// The position set is static; which positions are playable is a
    /// runtime property of the board being filtered.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        <Position as strum::IntoEnumIterator>::iter()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
