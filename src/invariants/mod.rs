//! First-class game invariants.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently, checked as postconditions
//! in debug builds, and serve as documentation of system guarantees.

mod verification;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if every invariant holds, or `Err` with one
    /// violation per failing invariant.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 4-tuples
impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if !I4::holds(state) {
            violations.push(InvariantViolation::new(I4::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// Implement InvariantSet for 3-tuples
impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;
pub mod no_standing_winner;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use no_standing_winner::NoStandingWinnerInvariant;

/// All invariants of an in-progress game as a composable set.
pub type InProgressInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    NoStandingWinnerInvariant,
);
