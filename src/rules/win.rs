//! Win detection logic.

use crate::line::Line;
use crate::outcome::Win;
use crate::types::{Board, Square};
use tracing::instrument;

/// Checks the board for a completed line.
///
/// Lines are examined in [`Line::ALL`] order: rows top to bottom,
/// columns left to right, diagonal, anti-diagonal. When a board holds
/// more than one completed line the first in that order is reported;
/// the tie-break is deterministic and part of the rules contract.
///
/// Returns `Some(win)` naming the player and the line, `None` if no
/// line is uniformly owned.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Win> {
    for line in Line::ALL {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(Win::new(player, line)),
                Square::Empty => None,
            };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Player;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), Some(Win::new(Player::X, Line::TopRow)));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));
        assert_eq!(
            check_winner(&board),
            Some(Win::new(Player::O, Line::Diagonal))
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_wins_tie_break() {
        // Top row and left column complete simultaneously; rows come
        // first in evaluation order.
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert_eq!(check_winner(&board), Some(Win::new(Player::X, Line::TopRow)));
    }
}
