//! Turn parity invariant: X moves on even counts, O on odd.

use super::super::{GameSession, PlayerId};
use super::Invariant;

/// Invariant: the turn indicator follows the number of filled squares.
///
/// X always moves first and every accepted move flips the turn, including
/// the move that ends the game.
pub struct TurnParityInvariant;

impl Invariant<GameSession> for TurnParityInvariant {
    fn holds(session: &GameSession) -> bool {
        let expected = if session.board().filled() % 2 == 0 {
            PlayerId::X
        } else {
            PlayerId::O
        };
        session.turn() == expected
    }

    fn description() -> &'static str {
        "Turn indicator matches filled-square parity (X on even, O on odd)"
    }
}
