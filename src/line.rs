//! The eight winning lines of the grid.

use crate::position::Position;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One of the eight lines that end the game when uniformly owned.
///
/// [`Line::ALL`] fixes the order the win detector examines lines in:
/// rows top to bottom, then columns left to right, then the two
/// diagonals. The order is part of the rules contract because it breaks
/// ties when a single move completes more than one line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, strum::EnumIter,
)]
pub enum Line {
    /// Indices 0, 1, 2.
    TopRow,
    /// Indices 3, 4, 5.
    MiddleRow,
    /// Indices 6, 7, 8.
    BottomRow,
    /// Indices 0, 3, 6.
    LeftColumn,
    /// Indices 1, 4, 7.
    MiddleColumn,
    /// Indices 2, 5, 8.
    RightColumn,
    /// Indices 0, 4, 8.
    Diagonal,
    /// Indices 2, 4, 6.
    AntiDiagonal,
}

impl Line {
    /// All eight lines in evaluation order.
    pub const ALL: [Line; 8] = [
        Line::TopRow,
        Line::MiddleRow,
        Line::BottomRow,
        Line::LeftColumn,
        Line::MiddleColumn,
        Line::RightColumn,
        Line::Diagonal,
        Line::AntiDiagonal,
    ];

    /// Returns the three positions forming this line.
    pub fn positions(self) -> [Position; 3] {
        match self {
            Line::TopRow => [Position::TopLeft, Position::TopCenter, Position::TopRight],
            Line::MiddleRow => [Position::MiddleLeft, Position::Center, Position::MiddleRight],
            Line::BottomRow => [
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
            Line::LeftColumn => [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
            Line::MiddleColumn => [
                Position::TopCenter,
                Position::Center,
                Position::BottomCenter,
            ],
            Line::RightColumn => [
                Position::TopRight,
                Position::MiddleRight,
                Position::BottomRight,
            ],
            Line::Diagonal => [Position::TopLeft, Position::Center, Position::BottomRight],
            Line::AntiDiagonal => [Position::TopRight, Position::Center, Position::BottomLeft],
        }
    }

    /// Returns the three row-major board indices forming this line.
    pub fn indices(self) -> [usize; 3] {
        let [a, b, c] = self.positions();
        [a.to_index(), b.to_index(), c.to_index()]
    }

    /// Checks whether the line passes through the given position.
    pub fn contains(self, position: Position) -> bool {
        self.positions().contains(&position)
    }

    /// Returns a display label for this line.
    pub fn label(&self) -> &'static str {
        match self {
            Line::TopRow => "top row",
            Line::MiddleRow => "middle row",
            Line::BottomRow => "bottom row",
            Line::LeftColumn => "left column",
            Line::MiddleColumn => "middle column",
            Line::RightColumn => "right column",
            Line::Diagonal => "diagonal",
            Line::AntiDiagonal => "anti-diagonal",
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
