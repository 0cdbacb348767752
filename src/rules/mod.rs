//! Pure rules for evaluating board snapshots.
//!
//! This module contains pure functions over [`Board`] values. Rules are
//! separated from board storage and from the turn machine so any
//! snapshot can be evaluated, whether it came from live play, a
//! serialized game, or a hand-built test fixture.

pub mod draw;
pub mod win;

pub use draw::{has_live_line, line_is_live_for};
pub use win::check_winner;

use crate::outcome::Outcome;
use crate::types::Board;
use tracing::instrument;

/// Evaluates a board snapshot to a verdict.
///
/// Win detection runs first; liveness is only consulted when no line is
/// complete. A board with no winner and no live line is a draw even
/// while empty squares remain.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(win) = check_winner(board) {
        return Outcome::Winner(win);
    }
    if !has_live_line(board) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Line;
    use crate::outcome::Win;
    use crate::types::Player;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_winner_reported_with_line() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        assert_eq!(
            evaluate(&board),
            Outcome::Winner(Win::new(Player::X, Line::TopRow))
        );
    }

    #[test]
    fn test_dead_position_is_draw() {
        let board: Board = "XOX XOO OX.".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_winner_is_a_win() {
        // Fullness never outranks a completed line.
        let board: Board = "XXX OOX OXO".parse().unwrap();
        assert!(board.is_full());
        assert_eq!(
            evaluate(&board),
            Outcome::Winner(Win::new(Player::X, Line::TopRow))
        );
    }
}
