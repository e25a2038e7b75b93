//! Derived outcome invariant: the stored outcome is never hand-set.

use super::super::{GameSession, rules};
use super::Invariant;

/// Invariant: the session's outcome equals the outcome computed from its board.
pub struct DerivedOutcomeInvariant;

impl Invariant<GameSession> for DerivedOutcomeInvariant {
    fn holds(session: &GameSession) -> bool {
        *session.outcome() == rules::compute_outcome(session.board())
    }

    fn description() -> &'static str {
        "Outcome is derived from the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Outcome;

    #[test]
    fn test_detects_stale_outcome() {
        let mut session = GameSession::new();
        let _ = session.apply_move(0);
        assert!(DerivedOutcomeInvariant::holds(&session));

        session.outcome = Outcome::Draw;
        assert!(!DerivedOutcomeInvariant::holds(&session));
    }
}
