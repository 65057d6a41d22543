//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold after every placement.
//! They are testable independently and serve as documentation of the
//! guarantees [`GameState`](crate::GameState) makes.

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
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod cursor_in_bounds;
pub mod rooted_history;
pub mod single_cell_delta;

pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use rooted_history::RootedHistoryInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;

/// All move history invariants as a composable set.
pub type HistoryInvariants = (
    RootedHistoryInvariant,
    SingleCellDeltaInvariant,
    CursorInBoundsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, MoveRecord, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(HistoryInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut game =
            GameState::replay(&[Position::TopLeft, Position::Center, Position::TopRight]);
        game.jump_to(1).expect("move 1 exists");
        game.activate_cell(Position::BottomRight);
        assert!(HistoryInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let bogus = MoveRecord::new(Default::default(), Position::Center);
        let game = GameState::from_parts(vec![bogus.clone(), bogus], 5);
        let violations = HistoryInvariants::check_all(&game).expect_err("corrupted state");
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (RootedHistoryInvariant, CursorInBoundsInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
