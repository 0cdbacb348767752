//! Kani arbitrary implementations for the engine's types.
//!
//! These implementations let Kani explore all possible values of our
//! types during model checking, including states normal construction
//! would never produce.

#[cfg(kani)]
use crate::{Board, GameInProgress, Move, Player, Position, Square};

#[cfg(kani)]
impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Position {
    fn any() -> Self {
        let index: usize = kani::any();
        kani::assume(index < 9);
        Position::ALL[index]
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Square {
    fn any() -> Self {
        if kani::any() {
            Square::Empty
        } else {
            Square::Occupied(kani::any())
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Move {
    fn any() -> Self {
        Move::new(kani::any(), kani::any())
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Board {
    fn any() -> Self {
        let squares: [Square; 9] = kani::any();
        Board::from_squares(squares)
    }
}

#[cfg(kani)]
impl kani::Arbitrary for GameInProgress {
    fn any() -> Self {
        let board: Board = kani::any();
        let to_move: Player = kani::any();

        let history_len: usize = kani::any();
        kani::assume(history_len <= 9);

        let mut history = Vec::with_capacity(history_len);
        for _ in 0..history_len {
            history.push(kani::any());
        }

        // Bypasses normal construction so Kani can explore states the
        // turn machine would never reach on its own.
        GameInProgress::from_parts(board, history, to_move)
    }
}
