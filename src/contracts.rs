//! Contract-based validation for move transitions.
//!
//! Contracts define correctness through preconditions and postconditions,
//! formalizing Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveError};
use crate::invariants::{InProgressInvariants, InvariantSet};
use crate::typestate::GameInProgress;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} must hold before applying the action
/// - Postcondition: {Q(before, after)} must hold after applying the action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves aimed at occupied squares.
    #[instrument(skip(game))]
    pub fn check(action: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if !game.board().is_empty(action.position) {
            Err(MoveError::SquareOccupied(action.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the acting player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects out-of-turn moves.
    #[instrument(skip(game))]
    pub fn check(action: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if action.player != game.to_move() {
            Err(MoveError::WrongPlayer(action.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a move is legal if the square is empty and
/// it is the player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(action: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        SquareIsEmpty::check(action, game)?;
        PlayersTurn::check(action, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: the square is empty and it is the player's turn.
/// Postconditions: the full in-progress invariant set still holds.
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        InProgressInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|violation| violation.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
