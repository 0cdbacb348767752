//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::typestate::GameInProgress;
use crate::types::Player;

/// Invariant: players alternate turns, X first.
///
/// The move history must read X, O, X, O, ... and the player to move
/// must match the history's parity.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();

        if history.is_empty() {
            return game.to_move() == Player::X;
        }

        // First move must be X
        if history[0].player != Player::X {
            return false;
        }

        // Check alternation
        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        // Current to_move must match history parity
        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
