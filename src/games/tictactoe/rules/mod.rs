//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]; nothing here mutates state.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use super::{Board, Outcome};
use tracing::instrument;

/// Derives the outcome of a board.
///
/// A completed line wins even on a full board; otherwise a full board is a
/// draw and anything else is still in progress.
#[instrument(skip(board), ret)]
pub fn compute_outcome(board: &Board) -> Outcome {
    if let Some(marker) = check_winner(board) {
        Outcome::Won(marker.clone())
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Marker, Position};
    use super::*;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(compute_outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_win_on_full_board_is_win() {
        let mut board = Board::new();
        for (pos, glyph) in Position::ALL
            .into_iter()
            .zip(["🩷", "🩷", "🩷", "🩶", "🩶", "🩷", "🩶", "🩷", "🩶"])
        {
            board.place(pos, glyph.into());
        }
        assert_eq!(compute_outcome(&board), Outcome::Won(Marker::from("🩷")));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        for (pos, glyph) in Position::ALL
            .into_iter()
            .zip(["🩷", "🩶", "🩷", "🩶", "🩷", "🩷", "🩶", "🩷", "🩶"])
        {
            board.place(pos, glyph.into());
        }
        assert_eq!(compute_outcome(&board), Outcome::Draw);
    }

    #[test]
    fn test_outcome_is_idempotent() {
        let mut board = Board::new();
        board.place(Position::Center, "🐷".into());
        assert_eq!(compute_outcome(&board), compute_outcome(&board));
    }
}
