//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::typestate::GameInProgress;
use crate::types::{Board, Square};

/// Invariant: board squares are monotonic (never overwritten).
///
/// Once a square transitions from empty to occupied it never changes.
/// Verified by replaying the move history onto a fresh board and
/// comparing the result against the live board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameInProgress> for MonotonicBoardInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let mut reconstructed = Board::new();

        for action in game.history() {
            // Square must be empty before placing
            if reconstructed.get(action.position) != Square::Empty {
                return false;
            }

            reconstructed.set(action.position, Square::Occupied(action.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
