//! Win detection logic for N×N tic-tac-toe.

use crate::types::{Board, Cell};
use std::collections::HashSet;
use tracing::instrument;

/// Checks whether the move just played at `(row, col)` wins.
///
/// Four lines are examined every time: row `row`, column `col`, the main
/// diagonal and the anti-diagonal. The diagonals are checked even when
/// `(row, col)` is not on them. A line wins when all of its cells hold the
/// same non-empty value.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_win(board: &Board, row: usize, col: usize) -> bool {
    let size = board.size();
    let mut row_values = HashSet::new();
    let mut col_values = HashSet::new();
    let mut diagonal_values = HashSet::new();
    let mut anti_diagonal_values = HashSet::new();

    for i in 0..size {
        row_values.insert(board.get(row, i));
        col_values.insert(board.get(i, col));
        diagonal_values.insert(board.get(i, i));
        anti_diagonal_values.insert(board.get(i, size - 1 - i));
    }

    [
        row_values,
        col_values,
        diagonal_values,
        anti_diagonal_values,
    ]
    .iter()
    .any(is_winning_line)
}

/// A line wins when it holds exactly one distinct, occupied value.
fn is_winning_line(values: &HashSet<Option<Cell>>) -> bool {
    values.len() == 1 && values.iter().all(|v| matches!(v, Some(Cell::Occupied(_))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    fn board_with(size: usize, marks: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new(size);
        for &(row, col, player) in marks {
            board.set(row, col, Cell::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3);
        assert!(!check_win(&board, 1, 1));
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(3, &[(0, 0, Player::X), (0, 1, Player::X), (0, 2, Player::X)]);
        assert!(check_win(&board, 0, 2));
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(
            4,
            &[
                (0, 2, Player::O),
                (1, 2, Player::O),
                (2, 2, Player::O),
                (3, 2, Player::O),
            ],
        );
        assert!(check_win(&board, 3, 2));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(
            4,
            &[
                (0, 3, Player::X),
                (1, 2, Player::X),
                (2, 1, Player::X),
                (3, 0, Player::X),
            ],
        );
        assert!(check_win(&board, 2, 1));
    }

    #[test]
    fn test_diagonals_checked_for_off_diagonal_move() {
        // (0, 1) is on neither diagonal, yet a complete main diagonal still counts.
        let board = board_with(
            3,
            &[
                (0, 0, Player::O),
                (1, 1, Player::O),
                (2, 2, Player::O),
                (0, 1, Player::X),
            ],
        );
        assert!(check_win(&board, 0, 1));
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_with(3, &[(0, 0, Player::X), (0, 1, Player::O), (0, 2, Player::X)]);
        assert!(!check_win(&board, 0, 2));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(5, &[(2, 0, Player::X), (2, 1, Player::X), (2, 2, Player::X)]);
        assert!(!check_win(&board, 2, 2));
    }
}
