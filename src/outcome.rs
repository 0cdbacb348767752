//! Rules verdicts: wins, draws, and games still in play.

use crate::line::Line;
use crate::types::Player;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A detected three-in-a-row: who won and along which line.
///
/// The line is carried so callers can highlight the winning squares
/// without re-deriving them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Win {
    /// The player owning all three squares.
    pub player: Player,
    /// The completed line.
    pub line: Line,
}

impl Win {
    /// Creates a new win report.
    pub fn new(player: Player, line: Line) -> Self {
        Self { player, line }
    }

    /// Returns the winning player.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the completed line.
    pub fn line(&self) -> Line {
        self.line
    }
}

impl std::fmt::Display for Win {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wins on the {}", self.player, self.line)
    }
}

/// The verdict for a board snapshot.
///
/// Winner detection takes priority over draw detection: a board with a
/// completed line is a win even if no other line is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Outcome {
    /// A player completed a line.
    Winner(Win),
    /// Dead position: no line remains winnable by either player.
    Draw,
    /// Play continues.
    InProgress,
}

impl Outcome {
    /// Returns the winning player, if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(win) => Some(win.player),
            _ => None,
        }
    }

    /// Returns the completed line, if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::Winner(win) => Some(win.line),
            _ => None,
        }
    }

    /// Checks whether the verdict is a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Checks whether the game is over, by win or by draw.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(win) => write!(f, "Winner: {}", win.player),
            Outcome::Draw => write!(f, "It's a Draw!"),
            Outcome::InProgress => write!(f, "In progress"),
        }
    }
}
