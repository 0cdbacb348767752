//! Draw detection logic.
//!
//! A draw is declared as soon as the position is dead, not only when
//! the board fills: once every line carries marks from both players,
//! the remaining empty squares cannot change the result.

use crate::line::Line;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Checks whether a line is still winnable by the given player.
///
/// A line is live for a player exactly when it holds no opposing mark:
/// every square on it is empty or already the player's own.
#[instrument]
pub fn line_is_live_for(board: &Board, line: Line, player: Player) -> bool {
    line.positions().into_iter().all(|pos| match board.get(pos) {
        Square::Empty => true,
        Square::Occupied(owner) => owner == player,
    })
}

/// Checks whether any line is still winnable by either player.
///
/// Returns `false` only for dead positions. A board that already holds
/// a completed line trivially reports `true` (the winner's own line is
/// live), so callers check for a winner first; [`super::evaluate`]
/// encodes that order.
#[instrument]
pub fn has_live_line(board: &Board) -> bool {
    [Player::X, Player::O].into_iter().any(|player| {
        Line::ALL
            .into_iter()
            .any(|line| line_is_live_for(board, line, player))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_empty_board_is_live() {
        let board = Board::new();
        assert!(has_live_line(&board));
        assert!(line_is_live_for(&board, Line::TopRow, Player::X));
        assert!(line_is_live_for(&board, Line::TopRow, Player::O));
    }

    #[test]
    fn test_own_marks_keep_line_live() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert!(line_is_live_for(&board, Line::TopRow, Player::X));
        assert!(!line_is_live_for(&board, Line::TopRow, Player::O));
    }

    #[test]
    fn test_dead_position_before_board_fills() {
        // X O X / X O O / O X . with index 8 still empty. Every line
        // holds marks from both players, so nobody can win.
        let board: Board = "XOX XOO OX.".parse().unwrap();
        assert!(!board.is_full());
        assert!(!has_live_line(&board));
    }

    #[test]
    fn test_full_mixed_board_is_dead() {
        let board: Board = "XOX XOO OXX".parse().unwrap();
        assert!(board.is_full());
        assert!(!has_live_line(&board));
    }

    #[test]
    fn test_winning_board_reports_live() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert!(has_live_line(&board));
    }

    #[test]
    fn test_single_open_line_keeps_game_alive() {
        // Only the anti-diagonal is still open, for O through index 2.
        let board: Board = "XO. XOO OXX".parse().unwrap();
        assert!(line_is_live_for(&board, Line::AntiDiagonal, Player::O));
        assert!(!line_is_live_for(&board, Line::AntiDiagonal, Player::X));
        assert!(!line_is_live_for(&board, Line::TopRow, Player::X));
        assert!(has_live_line(&board));
    }
}
