//! Tests for outcome computation.

use emoji_tictactoe::games::tictactoe::rules::{LINES, check_winner, is_full};
use emoji_tictactoe::{GameSession, Outcome, compute_outcome};

#[test]
fn test_lines_cover_rows_columns_diagonals_in_order() {
    let indices: Vec<[usize; 3]> = LINES
        .iter()
        .map(|line| line.map(|pos| pos.to_index()))
        .collect();
    assert_eq!(
        indices,
        vec![
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ]
    );
}

#[test]
fn test_outcome_along_every_prefix() {
    let cells = [4, 0, 8, 2, 1, 7, 6, 3, 5];
    let mut session = GameSession::new();
    for &cell in &cells {
        let _ = session.apply_move(cell);
        let board = session.board();
        let outcome = compute_outcome(board);

        // Exactly one of the three, and stable across calls.
        assert_eq!(outcome, compute_outcome(board));
        match &outcome {
            Outcome::Won(marker) => assert_eq!(check_winner(board), Some(marker)),
            Outcome::Draw => assert!(is_full(board) && check_winner(board).is_none()),
            Outcome::InProgress => assert!(!is_full(board) && check_winner(board).is_none()),
        }
        assert_eq!(*session.outcome(), outcome);
    }
}
