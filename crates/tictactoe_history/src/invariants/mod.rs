//! First-class invariants for game history.
//!
//! Invariants are logical properties that must hold after every move.
//! [`GameState::apply_move`](crate::GameState::apply_move) checks them in
//! debug builds, and they can be tested independently.

mod alternating_turn;
mod cursor_in_bounds;
mod monotonic_history;
mod starts_empty;

pub use alternating_turn::AlternatingTurnInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use monotonic_history::MonotonicHistoryInvariant;
pub use starts_empty::StartsEmptyInvariant;

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
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// Every history invariant as one set.
pub type HistoryInvariants = (
    StartsEmptyInvariant,
    MonotonicHistoryInvariant,
    AlternatingTurnInvariant,
    CursorInBoundsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Mark, Position, Snapshot};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(HistoryInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut game = GameState::replay(&[0, 4, 8, 2]).unwrap();
        game.jump_to(1).unwrap();
        game.apply_move(6).unwrap();
        assert!(HistoryInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let start = Snapshot::new().with_mark(Position::Center, Mark::O);
        let game = GameState::from_parts(vec![start], 3);

        let violations = HistoryInvariants::check_all(&game).unwrap_err();
        let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
        assert_eq!(
            descriptions,
            [
                StartsEmptyInvariant::description(),
                AlternatingTurnInvariant::description(),
                CursorInBoundsInvariant::description(),
            ]
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (StartsEmptyInvariant, CursorInBoundsInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
