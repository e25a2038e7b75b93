//! Read-only views of a session for presentation layers.

use super::types::{Board, Marker, Outcome, Player, PlayerId};
use derive_getters::Getters;
use serde::Serialize;

/// Everything a presentation layer reads to render one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameSnapshot {
    /// The board.
    board: Board,
    /// Whose marker the next accepted move places.
    turn: PlayerId,
    /// Derived result.
    outcome: Outcome,
    /// Both players, X first.
    players: [Player; 2],
    /// Offered glyphs per player, X first.
    #[getter(skip)]
    marker_choices: [&'static [&'static str]; 2],
}

impl GameSnapshot {
    pub(super) fn new(board: Board, turn: PlayerId, outcome: Outcome, players: [Player; 2]) -> Self {
        Self {
            board,
            turn,
            outcome,
            players,
            marker_choices: [PlayerId::X.marker_choices(), PlayerId::O.marker_choices()],
        }
    }

    /// Display name of the player to move.
    pub fn current_player(&self) -> String {
        self.turn.to_string()
    }

    /// Returns one player's view.
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id as usize]
    }

    /// Glyphs offered to one player's selector.
    pub fn marker_choices(&self, id: PlayerId) -> &'static [&'static str] {
        self.marker_choices[id as usize]
    }

    /// The status line shown under the board.
    pub fn status_line(&self) -> String {
        match EndNotice::from_outcome(&self.outcome) {
            Some(notice) => notice.to_string(),
            None => format!("Current player: {}", self.current_player()),
        }
    }
}

/// One-time notice raised when a game reaches a terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum EndNotice {
    /// A line was completed.
    #[display("Winner: {_0}")]
    Winner(Marker),
    /// The board filled with no line.
    #[display("Game Over - It's a draw!")]
    Draw,
}

impl EndNotice {
    /// Notice for a terminal outcome; `None` while in progress.
    pub fn from_outcome(outcome: &Outcome) -> Option<Self> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Won(marker) => Some(EndNotice::Winner(marker.clone())),
            Outcome::Draw => Some(EndNotice::Draw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_text() {
        assert_eq!(EndNotice::Winner("🩷".into()).to_string(), "Winner: 🩷");
        assert_eq!(EndNotice::Draw.to_string(), "Game Over - It's a draw!");
    }

    #[test]
    fn test_snapshot_carries_marker_choices() {
        let snapshot = GameSnapshot::new(
            Board::new(),
            PlayerId::X,
            Outcome::InProgress,
            [
                Player::new(PlayerId::X, "👑".into()),
                Player::new(PlayerId::O, "🩶".into()),
            ],
        );
        assert_eq!(snapshot.marker_choices(PlayerId::X), ["🩷", "🐷", "🌷", "👑"]);
        assert_eq!(snapshot.marker_choices(PlayerId::O), ["🩶", "🐰", "🌪️", "💍"]);
    }

    #[test]
    fn test_no_notice_in_progress() {
        assert_eq!(EndNotice::from_outcome(&Outcome::InProgress), None);
    }
}
