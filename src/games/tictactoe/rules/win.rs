//! Win detection logic for tic-tac-toe.

use super::super::{Board, Marker, Position};
use tracing::instrument;

/// The eight winning triples, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the marker of the first completed line, if any.
///
/// Lines are compared by glyph, so two squares played by different players
/// that happen to share a glyph count as the same marker.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<&Marker> {
    LINES.iter().find_map(|&[a, b, c]| {
        let marker = board.get(a).marker()?;
        (board.get(b).marker() == Some(marker) && board.get(c).marker() == Some(marker))
            .then_some(marker)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(usize, &str)]) -> Board {
        let mut board = Board::new();
        for &(i, glyph) in cells {
            board.place(Position::ALL[i], glyph.into());
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.place(pos, "👑".into());
            }
            assert_eq!(check_winner(&board), Some(&Marker::from("👑")), "{line:?}");
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_with(&[(0, "🩷"), (1, "🩷"), (2, "🩶")]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_incomplete_line_does_not_win() {
        let board = board_with(&[(2, "🐰"), (4, "🐰")]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Column 0 completes; row 2 is mixed.
        let board = board_with(&[
            (0, "🌷"),
            (3, "🌷"),
            (6, "🌷"),
            (7, "💍"),
            (8, "💍"),
        ]);
        assert_eq!(check_winner(&board), Some(&Marker::from("🌷")));

        // Two disjoint rows complete; the upper one is reported.
        let board = board_with(&[
            (0, "💍"),
            (1, "💍"),
            (2, "💍"),
            (6, "🌷"),
            (7, "🌷"),
            (8, "🌷"),
        ]);
        assert_eq!(check_winner(&board), Some(&Marker::from("💍")));
    }
}
