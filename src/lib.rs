//! Pure tic-tac-toe rules engine with a typestate turn machine.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over board snapshots — win detection
//!   ([`check_winner`]) and dead-position draw detection
//!   ([`has_live_line`]), combined by [`evaluate`]
//! - **Turn machine**: one struct per phase ([`GameInProgress`],
//!   [`GameWon`], [`GameDrawn`]); moves consume the current phase and
//!   return the next, and illegal moves are rejected without effect
//! - **Contracts and invariants**: preconditions gate every move,
//!   postconditions re-check the invariant set in debug builds, and
//!   Kani proof harnesses cover the rules for all boards
//! - **Shell boundary**: [`AnyGame`] erases the phase into one
//!   serializable enum and re-validates restored snapshots by replay
//!
//! Draws are declared as soon as no line remains winnable by either
//! player, not only when the board fills.
//!
//! # Example
//!
//! ```
//! use oxo::{AnyGame, Line, Position};
//!
//! let game = AnyGame::new();
//! let game = game.apply(Position::TopLeft)?; // X
//! let game = game.apply(Position::Center)?; // O
//! let game = game.apply(Position::TopCenter)?; // X
//! let game = game.apply(Position::BottomLeft)?; // O
//! let game = game.apply(Position::TopRight)?; // X completes the top row
//!
//! assert_eq!(game.status_string(), "Winner: X");
//! assert_eq!(game.winning_line(), Some(Line::TopRow));
//! # Ok::<(), oxo::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod invariants;
mod kani_support;
mod line;
mod outcome;
mod position;
mod rules;
mod typestate;
mod types;
mod wrapper;

// Crate-level exports - Core types
pub use line::Line;
pub use position::Position;
pub use types::{Board, BoardError, Player, Square};

// Crate-level exports - Rules
pub use outcome::{Outcome, Win};
pub use rules::{check_winner, evaluate, has_live_line, line_is_live_for};

// Crate-level exports - Actions
pub use action::{Move, MoveError};

// Crate-level exports - Turn machine
pub use typestate::{GameDrawn, GameInProgress, GameTransition, GameWon};

// Crate-level exports - Contracts
pub use contracts::{Contract, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty};

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, InProgressInvariants, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant, NoStandingWinnerInvariant,
};

// Crate-level exports - Shell boundary
pub use wrapper::AnyGame;
