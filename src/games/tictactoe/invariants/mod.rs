//! First-class invariants for a game session.
//!
//! Invariants are logical properties that must hold after every mutation.
//! They are testable independently and serve as documentation of system
//! guarantees.

mod derived_outcome;
mod turn_parity;

pub use derived_outcome::DerivedOutcomeInvariant;
pub use turn_parity::TurnParityInvariant;

use super::GameSession;
use tracing::{instrument, warn};

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
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

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

/// All session invariants as a composable set.
pub type SessionInvariants = (TurnParityInvariant, DerivedOutcomeInvariant);

/// Checks all session invariants; panics on violation in debug builds.
#[instrument(skip(session))]
pub(super) fn assert_invariants(session: &GameSession) {
    if let Err(violations) = SessionInvariants::check_all(session) {
        for violation in &violations {
            warn!(description = %violation.description, "Session invariant violated");
        }
        debug_assert!(violations.is_empty(), "Session invariants violated: {violations:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        let session = GameSession::new();
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_a_game() {
        let mut session = GameSession::new();
        for cell in [0, 3, 1, 4, 2] {
            let _ = session.apply_move(cell);
            assert!(SessionInvariants::check_all(&session).is_ok());
        }
        session.restart();
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut session = GameSession::new();
        let _ = session.apply_move(4);
        // Corrupt the turn indicator behind the session's back.
        session.turn = session.turn.opponent();

        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, TurnParityInvariant::description());
    }
}
