//! Phase-specific typestate structs for the turn machine.
//!
//! Each phase is its own distinct type with phase-specific fields.
//! This encodes facts at compile time: a [`GameWon`] ALWAYS holds its
//! [`Win`], never an `Option`, and only [`GameInProgress`] exposes
//! `make_move`. The terminal phases accept nothing but `reset`.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::line::Line;
use crate::outcome::{Outcome, Win};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress, the only phase that accepts moves.
///
/// A fresh game starts with an empty board and X to move; X always
/// moves first.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Player,
}

impl GameInProgress {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            to_move: Player::X,
        }
    }

    /// Makes a move, consuming self and transitioning to the next phase.
    ///
    /// After the mark lands, win detection runs first and liveness
    /// second: a move that completes a line wins even if it also kills
    /// the last live line, and a move that leaves no line live for
    /// either player draws the game with empty squares still on the
    /// board.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always ([`crate::LegalMove`])
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// [`MoveError::SquareOccupied`] or [`MoveError::WrongPlayer`] when
    /// a precondition fails; the move has no effect. Callers that need
    /// to keep playing after a rejection hold a clone, or go through
    /// [`crate::AnyGame::apply`] which does so internally.
    #[instrument(skip(self))]
    pub fn make_move(self, action: Move) -> Result<GameTransition, MoveError> {
        MoveContract::pre(&self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.board.set(action.position, Square::Occupied(action.player));
        game.history.push(action);

        if let Some(win) = rules::check_winner(&game.board) {
            return Ok(GameTransition::Won(GameWon {
                board: game.board,
                history: game.history,
                win,
            }));
        }

        if !rules::has_live_line(&game.board) {
            return Ok(GameTransition::Drawn(GameDrawn {
                board: game.board,
                history: game.history,
            }));
        }

        game.to_move = game.to_move.opponent();

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        Ok(GameTransition::InProgress(game))
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the playable positions.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Replays a move sequence from the opening position.
    ///
    /// Every move passes through the same contract checks as live play.
    ///
    /// # Errors
    ///
    /// Any rejected move aborts the replay. Moves submitted after the
    /// game has finished are rejected with [`MoveError::GameOver`]
    /// rather than silently dropped, so an accepted log is exactly a
    /// legal game.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<GameTransition, MoveError> {
        let mut game = GameInProgress::new();

        let mut remaining = moves.iter();
        while let Some(action) = remaining.next() {
            match game.make_move(*action)? {
                GameTransition::InProgress(next) => game = next,
                finished => {
                    if remaining.next().is_some() {
                        return Err(MoveError::GameOver);
                    }
                    return Ok(finished);
                }
            }
        }

        Ok(GameTransition::InProgress(game))
    }

    /// Abandons this game and starts a fresh one.
    #[instrument(skip(self))]
    pub fn reset(self) -> GameInProgress {
        GameInProgress::new()
    }

    /// Builds a game directly from raw parts, bypassing the contract
    /// layer. Exists so tests and proof harnesses can construct states
    /// the turn machine itself would refuse.
    #[cfg(any(test, kani))]
    pub(crate) fn from_parts(board: Board, history: Vec<Move>, to_move: Player) -> Self {
        Self {
            board,
            history,
            to_move,
        }
    }
}

impl Default for GameInProgress {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Won Phase
// ─────────────────────────────────────────────────────────────

/// Game ended with a winner.
///
/// The win report is ALWAYS present, so the winner and winning line
/// are total accessors rather than `Option`s.
#[derive(Debug, Clone)]
pub struct GameWon {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) win: Win,
}

impl GameWon {
    /// Returns the winning player.
    pub fn winner(&self) -> Player {
        self.win.player
    }

    /// Returns the completed line, for callers that highlight it.
    pub fn winning_line(&self) -> Line {
        self.win.line
    }

    /// Returns the full win report.
    pub fn win(&self) -> Win {
        self.win
    }

    /// Returns the final board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Starts a fresh game.
    #[instrument(skip(self))]
    pub fn reset(self) -> GameInProgress {
        GameInProgress::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Drawn Phase
// ─────────────────────────────────────────────────────────────

/// Game ended in a draw.
///
/// Draws are declared when the position dies, so the final board may
/// still hold empty squares.
#[derive(Debug, Clone)]
pub struct GameDrawn {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
}

impl GameDrawn {
    /// Returns the final board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Starts a fresh game.
    #[instrument(skip(self))]
    pub fn reset(self) -> GameInProgress {
        GameInProgress::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move: the phase the game landed in.
#[derive(Debug)]
pub enum GameTransition {
    /// Game continues with the other player to move.
    InProgress(GameInProgress),
    /// The move completed a line.
    Won(GameWon),
    /// The move left a dead position.
    Drawn(GameDrawn),
}

impl GameTransition {
    /// Returns the verdict for the phase the game landed in.
    pub fn outcome(&self) -> Outcome {
        match self {
            GameTransition::InProgress(_) => Outcome::InProgress,
            GameTransition::Won(game) => Outcome::Winner(game.win),
            GameTransition::Drawn(_) => Outcome::Draw,
        }
    }

    /// Returns the board of the phase the game landed in.
    pub fn board(&self) -> &Board {
        match self {
            GameTransition::InProgress(game) => game.board(),
            GameTransition::Won(game) => game.board(),
            GameTransition::Drawn(game) => game.board(),
        }
    }
}
