//! No standing winner invariant: wins leave the in-progress phase.

use super::Invariant;
use crate::rules;
use crate::typestate::GameInProgress;

/// Invariant: an in-progress board holds no completed line.
///
/// The move that completes a line transitions the game out of the
/// in-progress phase in the same step, so a standing winner can never
/// be observed while moves are still being accepted. A snapshot that
/// violates this was built or mutated outside the turn machine.
pub struct NoStandingWinnerInvariant;

impl Invariant<GameInProgress> for NoStandingWinnerInvariant {
    fn holds(game: &GameInProgress) -> bool {
        rules::check_winner(game.board()).is_none()
    }

    fn description() -> &'static str {
        "In-progress boards hold no completed line"
    }
}
