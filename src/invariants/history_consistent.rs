//! History consistency invariant: history length matches occupied squares.

use super::Invariant;
use crate::typestate::GameInProgress;
use crate::types::Square;

/// Invariant: history length equals the number of occupied squares.
///
/// Every move in history corresponds to exactly one occupied square.
/// No moves are missing, no squares are filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameInProgress> for HistoryConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let history_len = game.history().len();

        let occupied_count = game
            .board()
            .squares()
            .iter()
            .filter(|square| **square != Square::Empty)
            .count();

        history_len == occupied_count
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}
