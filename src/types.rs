//! Core domain types: players, squares, and the 3x3 board.

use crate::position::Position;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A player: X or O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Player {
    /// Player X, who always moves first.
    X,
    /// Player O, who always moves second.
    O,
}

impl Player {
    /// Returns the opposing player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark symbol used in board renderings.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Square {
    /// No mark has been placed here.
    Empty,
    /// The square holds the given player's mark.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Checks whether the square is unoccupied.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

/// The 3x3 board in row-major order: indices 0-2 form the top row,
/// 3-5 the middle row, 6-8 the bottom row.
///
/// A board is a plain value. It carries no turn or history information
/// and makes no legality claims about how its marks were placed; the
/// rules functions evaluate any snapshot, reachable or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from nine squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Returns the square at the given position.
    pub fn get(&self, position: Position) -> Square {
        self.squares[position.to_index()]
    }

    /// Places a square value at the given position.
    ///
    /// Infallible: [`Position`] makes out-of-bounds indices
    /// unrepresentable, and overwriting is a board-level non-concern
    /// (occupancy is enforced by the turn machine, not the container).
    pub fn set(&mut self, position: Position, square: Square) {
        self.squares[position.to_index()] = square;
    }

    /// Checks whether the square at the given position is unoccupied.
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position).is_empty()
    }

    /// Returns all nine squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Checks whether every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|square| !square.is_empty())
    }

    /// Renders the board as a three-line grid with `.` for empty squares.
    pub fn display(&self) -> String {
        let mut grid = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => '.',
                    Square::Occupied(player) => player.symbol(),
                };
                grid.push(symbol);
                if col < 2 {
                    grid.push('|');
                }
            }
            if row < 2 {
                grid.push_str("\n-+-+-\n");
            }
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Reasons a textual board snapshot fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The snapshot does not contain exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    InvalidLength(usize),
    /// The snapshot contains a symbol other than `X`, `O`, or `.`.
    #[display("Invalid square symbol {:?} at index {}", _1, _0)]
    InvalidSymbol(usize, char),
}

impl std::error::Error for BoardError {}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine `X`/`O`/`.` symbols in row-major order.
    ///
    /// Whitespace is ignored, so `"XOX XOO OX."` and a three-line grid
    /// both parse.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != 9 {
            return Err(BoardError::InvalidLength(symbols.len()));
        }
        let mut squares = [Square::Empty; 9];
        for (index, symbol) in symbols.into_iter().enumerate() {
            squares[index] = match symbol {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                '.' => Square::Empty,
                other => return Err(BoardError::InvalidSymbol(index, other)),
            };
        }
        Ok(Self { squares })
    }
}
