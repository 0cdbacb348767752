//! Tests for the typestate turn machine.

use oxo::{
    GameInProgress, GameTransition, Line, Move, MoveError, Outcome, Player, Position, Win,
    check_winner, has_live_line,
};

fn in_progress(transition: GameTransition) -> GameInProgress {
    match transition {
        GameTransition::InProgress(game) => game,
        other => panic!("Expected in-progress game, got {:?}", other.outcome()),
    }
}

/// Plays a position sequence from a fresh game, alternating players.
fn play(positions: &[Position]) -> GameTransition {
    let mut game = GameInProgress::new();
    let last = positions.len() - 1;
    for (index, position) in positions.iter().enumerate() {
        let action = Move::new(game.to_move(), *position);
        let transition = game.make_move(action).expect("Valid move");
        if index == last {
            return transition;
        }
        game = in_progress(transition);
    }
    unreachable!("positions must not be empty");
}

#[test]
fn test_new_game_starts_with_x() {
    let game = GameInProgress::new();
    assert_eq!(game.to_move(), Player::X);
    assert!(game.history().is_empty());
    assert!(game.board().squares().iter().all(|square| square.is_empty()));
}

#[test]
fn test_moves_alternate_players() {
    let game = GameInProgress::new();
    let game = in_progress(
        game.make_move(Move::new(Player::X, Position::Center))
            .expect("Valid move"),
    );
    assert_eq!(game.to_move(), Player::O);

    let game = in_progress(
        game.make_move(Move::new(Player::O, Position::TopLeft))
            .expect("Valid move"),
    );
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_occupied_square_rejected() {
    let game = GameInProgress::new();
    let game = in_progress(
        game.make_move(Move::new(Player::X, Position::Center))
            .expect("Valid move"),
    );

    let result = game.make_move(Move::new(Player::O, Position::Center));
    assert!(matches!(
        result,
        Err(MoveError::SquareOccupied(Position::Center))
    ));
}

#[test]
fn test_wrong_player_rejected() {
    let game = GameInProgress::new();
    let result = game.make_move(Move::new(Player::O, Position::Center));
    assert!(matches!(result, Err(MoveError::WrongPlayer(Player::O))));
}

#[test]
fn test_rejected_move_leaves_clone_untouched() {
    let game = GameInProgress::new();
    let game = in_progress(
        game.make_move(Move::new(Player::X, Position::Center))
            .expect("Valid move"),
    );

    let keep = game.clone();
    let result = game.make_move(Move::new(Player::O, Position::Center));
    assert!(result.is_err());

    // The retained state is unchanged and still playable.
    assert_eq!(keep.history().len(), 1);
    let game = in_progress(
        keep.make_move(Move::new(Player::O, Position::TopLeft))
            .expect("Valid move"),
    );
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_completing_a_line_wins() {
    // X takes the top row; O answers in the middle row.
    let transition = play(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::MiddleRight,
        Position::TopRight,
    ]);

    match transition {
        GameTransition::Won(game) => {
            assert_eq!(game.winner(), Player::X);
            assert_eq!(game.winning_line(), Line::TopRow);
            assert_eq!(game.win(), Win::new(Player::X, Line::TopRow));
            assert_eq!(game.history().len(), 5);
            assert!(!game.board().is_full());
        }
        other => panic!("Expected win, got {:?}", other.outcome()),
    }
}

#[test]
fn test_win_on_final_square_beats_draw() {
    // The ninth move both fills the board and completes the left
    // column; the win is reported, not a draw.
    let transition = play(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::TopRight,
        Position::BottomCenter,
        Position::BottomRight,
        Position::BottomLeft,
    ]);

    match transition {
        GameTransition::Won(game) => {
            assert_eq!(game.winner(), Player::X);
            assert_eq!(game.winning_line(), Line::LeftColumn);
            assert!(game.board().is_full());
        }
        other => panic!("Expected win, got {:?}", other.outcome()),
    }
}

#[test]
fn test_full_board_without_winner_is_drawn() {
    // A full game where the last open line dies only on the ninth
    // move: X O X / X O O / O X X.
    let transition = play(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::Center,
        Position::BottomCenter,
        Position::MiddleRight,
        Position::BottomRight,
        Position::BottomLeft,
        Position::TopRight,
    ]);

    match transition {
        GameTransition::Drawn(game) => {
            assert!(game.board().is_full());
            assert_eq!(game.history().len(), 9);
            assert_eq!(check_winner(game.board()), None);
        }
        other => panic!("Expected draw, got {:?}", other.outcome()),
    }
}

#[test]
fn test_dead_position_draws_before_board_fills() {
    // After eight moves every line carries both players' marks while
    // the bottom-right square is still empty; the game ends there.
    let transition = play(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::Center,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
    ]);

    match transition {
        GameTransition::Drawn(game) => {
            assert!(!game.board().is_full());
            assert_eq!(game.history().len(), 8);
            assert!(game.board().is_empty(Position::BottomRight));
            assert!(!has_live_line(game.board()));
        }
        other => panic!("Expected draw, got {:?}", other.outcome()),
    }
}

#[test]
fn test_double_win_through_legal_play_reports_first_line() {
    // X's final move at top-left completes the top row and the left
    // column at once; rows come first in evaluation order.
    let transition = play(&[
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
        Position::MiddleRight,
        Position::MiddleLeft,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
        Position::TopLeft,
    ]);

    match transition {
        GameTransition::Won(game) => {
            assert_eq!(game.winner(), Player::X);
            assert_eq!(game.winning_line(), Line::TopRow);
        }
        other => panic!("Expected win, got {:?}", other.outcome()),
    }
}

#[test]
fn test_valid_moves_shrink_as_board_fills() {
    let game = GameInProgress::new();
    assert_eq!(game.valid_moves().len(), 9);

    let game = in_progress(
        game.make_move(Move::new(Player::X, Position::Center))
            .expect("Valid move"),
    );
    let moves = game.valid_moves();
    assert_eq!(moves.len(), 8);
    assert!(!moves.contains(&Position::Center));
}

#[test]
fn test_replay_reaches_same_state() {
    let moves = vec![
        Move::new(Player::X, Position::Center),
        Move::new(Player::O, Position::TopLeft),
        Move::new(Player::X, Position::BottomRight),
        Move::new(Player::O, Position::TopRight),
        Move::new(Player::X, Position::BottomLeft),
    ];

    let game = in_progress(GameInProgress::replay(&moves).expect("Valid replay"));
    assert_eq!(game.history(), &moves[..]);
    assert_eq!(game.to_move(), Player::O);
}

#[test]
fn test_replay_rejects_illegal_logs() {
    // Doubled player
    let doubled = vec![
        Move::new(Player::X, Position::Center),
        Move::new(Player::X, Position::TopLeft),
    ];
    assert!(matches!(
        GameInProgress::replay(&doubled),
        Err(MoveError::WrongPlayer(Player::X))
    ));

    // Occupied square
    let occupied = vec![
        Move::new(Player::X, Position::Center),
        Move::new(Player::O, Position::Center),
    ];
    assert!(matches!(
        GameInProgress::replay(&occupied),
        Err(MoveError::SquareOccupied(Position::Center))
    ));
}

#[test]
fn test_replay_rejects_moves_after_game_ends() {
    let mut moves = vec![
        Move::new(Player::X, Position::TopLeft),
        Move::new(Player::O, Position::Center),
        Move::new(Player::X, Position::TopCenter),
        Move::new(Player::O, Position::MiddleRight),
        Move::new(Player::X, Position::TopRight),
    ];

    // The five-move log is a clean win...
    match GameInProgress::replay(&moves).expect("Valid replay") {
        GameTransition::Won(game) => assert_eq!(game.winner(), Player::X),
        other => panic!("Expected win, got {:?}", other.outcome()),
    }

    // ...but a sixth move after the win poisons the whole log.
    moves.push(Move::new(Player::O, Position::BottomLeft));
    assert!(matches!(
        GameInProgress::replay(&moves),
        Err(MoveError::GameOver)
    ));
}

#[test]
fn test_reset_from_any_phase_starts_fresh() {
    // From in-progress
    let game = GameInProgress::new();
    let game = in_progress(
        game.make_move(Move::new(Player::X, Position::Center))
            .expect("Valid move"),
    );
    let fresh = game.reset();
    assert_eq!(fresh.to_move(), Player::X);
    assert!(fresh.history().is_empty());

    // From a win
    let transition = play(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::MiddleRight,
        Position::TopRight,
    ]);
    if let GameTransition::Won(game) = transition {
        let fresh = game.reset();
        assert_eq!(fresh.to_move(), Player::X);
        assert_eq!(fresh.valid_moves().len(), 9);
    } else {
        panic!("Expected win");
    }

    // From a draw
    let transition = play(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::Center,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
    ]);
    if let GameTransition::Drawn(game) = transition {
        let fresh = game.reset();
        assert!(fresh.board().squares().iter().all(|square| square.is_empty()));
    } else {
        panic!("Expected draw");
    }
}

#[test]
fn test_transition_outcome_matches_phase() {
    let game = GameInProgress::new();
    let transition = game
        .make_move(Move::new(Player::X, Position::Center))
        .expect("Valid move");
    assert_eq!(transition.outcome(), Outcome::InProgress);

    let transition = play(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::MiddleRight,
        Position::TopRight,
    ]);
    assert_eq!(
        transition.outcome(),
        Outcome::Winner(Win::new(Player::X, Line::TopRow))
    );
    assert_eq!(transition.outcome().winning_line(), Some(Line::TopRow));
}
