//! Serializable game wrapper for typestate phases.
//!
//! Typestate phases are distinct types, so a shell that holds "the
//! game" across a whole session needs one type that can be any phase,
//! serialized, and restored. [`AnyGame`] is that surface. Restored
//! snapshots are untrusted: [`AnyGame::apply`] replays the stored move
//! log through the contract layer and cross-checks it against the
//! stored board before accepting a new move.

use crate::action::{Move, MoveError};
use crate::line::Line;
use crate::outcome::{Outcome, Win};
use crate::position::Position;
use crate::typestate::{GameDrawn, GameInProgress, GameTransition, GameWon};
use crate::types::{Board, Player};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A game in any phase, fit for serialization and shells.
///
/// The variants mirror the typestate phases one to one. Compared with
/// the phase types this surface is lossy in guarantees (a variant can
/// be built or deserialized in an inconsistent shape), which is why
/// [`AnyGame::apply`] re-validates before trusting a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub enum AnyGame {
    /// Game in progress.
    InProgress {
        /// The board state.
        board: Board,
        /// Current player to move.
        to_move: Player,
        /// Move history.
        history: Vec<Move>,
    },
    /// Game ended with a winner.
    Won {
        /// The board state.
        board: Board,
        /// The win report: winner and completed line.
        win: Win,
        /// Move history.
        history: Vec<Move>,
    },
    /// Game ended in a draw.
    Drawn {
        /// The board state.
        board: Board,
        /// Move history.
        history: Vec<Move>,
    },
}

// ─────────────────────────────────────────────────────────────
//  Phase conversions
// ─────────────────────────────────────────────────────────────

impl From<GameInProgress> for AnyGame {
    fn from(game: GameInProgress) -> Self {
        AnyGame::InProgress {
            board: game.board,
            to_move: game.to_move,
            history: game.history,
        }
    }
}

impl From<GameWon> for AnyGame {
    fn from(game: GameWon) -> Self {
        AnyGame::Won {
            board: game.board,
            win: game.win,
            history: game.history,
        }
    }
}

impl From<GameDrawn> for AnyGame {
    fn from(game: GameDrawn) -> Self {
        AnyGame::Drawn {
            board: game.board,
            history: game.history,
        }
    }
}

impl From<GameTransition> for AnyGame {
    fn from(transition: GameTransition) -> Self {
        match transition {
            GameTransition::InProgress(game) => game.into(),
            GameTransition::Won(game) => game.into(),
            GameTransition::Drawn(game) => game.into(),
        }
    }
}

impl AnyGame {
    /// Creates a fresh game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        GameInProgress::new().into()
    }

    /// Returns the board for any game phase.
    pub fn board(&self) -> &Board {
        match self {
            AnyGame::InProgress { board, .. } => board,
            AnyGame::Won { board, .. } => board,
            AnyGame::Drawn { board, .. } => board,
        }
    }

    /// Returns the move history for any game phase.
    pub fn history(&self) -> &[Move] {
        match self {
            AnyGame::InProgress { history, .. } => history,
            AnyGame::Won { history, .. } => history,
            AnyGame::Drawn { history, .. } => history,
        }
    }

    /// Returns the verdict for the current phase.
    pub fn outcome(&self) -> Outcome {
        match self {
            AnyGame::InProgress { .. } => Outcome::InProgress,
            AnyGame::Won { win, .. } => Outcome::Winner(*win),
            AnyGame::Drawn { .. } => Outcome::Draw,
        }
    }

    /// Returns the winner, if the game is won.
    pub fn winner(&self) -> Option<Player> {
        match self {
            AnyGame::Won { win, .. } => Some(win.player),
            _ => None,
        }
    }

    /// Returns the completed line, if the game is won.
    ///
    /// Shells use this to highlight the three winning squares.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            AnyGame::Won { win, .. } => Some(win.line),
            _ => None,
        }
    }

    /// Returns the current player to move, if the game is in progress.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            AnyGame::InProgress { to_move, .. } => Some(*to_move),
            _ => None,
        }
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        !matches!(self, AnyGame::InProgress { .. })
    }

    /// Returns a status line for display.
    pub fn status_string(&self) -> String {
        match self {
            AnyGame::InProgress { to_move, .. } => format!("Next player: {}", to_move),
            AnyGame::Won { win, .. } => format!("Winner: {}", win.player),
            AnyGame::Drawn { .. } => "It's a Draw!".to_string(),
        }
    }

    /// Applies a move at the given position for the player to move.
    ///
    /// The player is implicit: whoever `to_move` names plays. On
    /// success the next state is returned; on rejection the caller
    /// keeps the state it already holds, so an invalid move is a no-op
    /// with a diagnostic attached.
    ///
    /// The stored move log is replayed through the contract layer and
    /// compared against the stored board first, so corrupted or
    /// hand-edited snapshots are rejected rather than trusted.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game has ended,
    /// [`MoveError::SquareOccupied`] for an occupied square, and
    /// [`MoveError::InvariantViolation`] for snapshots whose board and
    /// move log disagree.
    #[instrument(skip(self))]
    pub fn apply(&self, position: Position) -> Result<Self, MoveError> {
        match self {
            AnyGame::InProgress {
                board,
                to_move,
                history,
            } => {
                debug!(
                    move_count = history.len(),
                    "Replaying move log with contract validation"
                );
                let game = match GameInProgress::replay(history)? {
                    GameTransition::InProgress(game) => game,
                    // The stored log already finishes the game; the
                    // snapshot's phase claim is false.
                    _ => {
                        warn!("Snapshot log reaches a finished game");
                        return Err(MoveError::GameOver);
                    }
                };
                if game.board() != board || game.to_move() != *to_move {
                    warn!("Snapshot board disagrees with its move log");
                    return Err(MoveError::InvariantViolation(
                        "snapshot board disagrees with its move log".to_string(),
                    ));
                }

                match game.make_move(Move::new(*to_move, position)) {
                    Ok(transition) => Ok(transition.into()),
                    Err(error) => {
                        warn!(%error, "Move rejected");
                        Err(error)
                    }
                }
            }
            AnyGame::Won { .. } | AnyGame::Drawn { .. } => Err(MoveError::GameOver),
        }
    }

    /// Abandons the current game and starts a fresh one.
    ///
    /// Available in every phase and always succeeds.
    #[instrument(skip(self))]
    pub fn reset(self) -> Self {
        Self::new()
    }

    /// Serializes the game to a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    #[instrument(skip(self))]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Restores a game from a JSON snapshot.
    ///
    /// Only the shape is validated here; consistency of the snapshot
    /// is enforced by the next [`AnyGame::apply`].
    ///
    /// # Errors
    ///
    /// Propagates parse failures.
    #[instrument(skip(snapshot))]
    pub fn from_json(snapshot: &str) -> serde_json::Result<Self> {
        serde_json::from_str(snapshot)
    }
}

impl Default for AnyGame {
    fn default() -> Self {
        Self::new()
    }
}
