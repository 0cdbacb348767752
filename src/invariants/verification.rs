//! Formal verification of invariants using the Kani model checker.
//!
//! These proof harnesses verify rules properties for all possible
//! board snapshots, and invariant preservation for all games the turn
//! machine can actually produce (bounded).

#[cfg(kani)]
mod proofs {
    use crate::{
        Board, GameInProgress, GameTransition, InProgressInvariants, InvariantSet, Move, Square,
        check_winner, has_live_line,
    };

    /// Prove: a reported win names a line uniformly owned by the winner.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_winner_owns_line() {
        let board: Board = kani::any();

        if let Some(win) = check_winner(&board) {
            for pos in win.line.positions() {
                assert!(
                    board.get(pos) == Square::Occupied(win.player),
                    "winning line must be uniformly owned"
                );
            }
        }
    }

    /// Prove: placing a mark never revives a dead position.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_dead_positions_stay_dead() {
        let mut board: Board = kani::any();
        kani::assume(!has_live_line(&board));

        let action: Move = kani::any();
        kani::assume(board.is_empty(action.position));
        board.set(action.position, Square::Occupied(action.player));

        assert!(
            !has_live_line(&board),
            "marks only add opposition, never remove it"
        );
    }

    /// Prove: the turn machine preserves the in-progress invariant set.
    ///
    /// Inductive step: from any state satisfying the invariants, an
    /// accepted move yields a state satisfying them again.
    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_make_move_preserves_invariants() {
        let game: GameInProgress = kani::any();
        kani::assume(game.history().len() <= 4);
        kani::assume(InProgressInvariants::check_all(&game).is_ok());

        let action: Move = kani::any();
        if let Ok(GameTransition::InProgress(next)) = game.make_move(action) {
            assert!(
                InProgressInvariants::check_all(&next).is_ok(),
                "accepted moves preserve every invariant"
            );
        }
    }
}
