//! Draw detection logic for N×N tic-tac-toe.

use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Player};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(3)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(3);
        board.set(1, 1, Cell::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(4);
        for row in 0..4 {
            for col in 0..4 {
                board.set(row, col, Cell::Occupied(Player::O));
            }
        }
        assert!(is_full(&board));
    }
}
