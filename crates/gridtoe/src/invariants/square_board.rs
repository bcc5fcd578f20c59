//! Board shape invariant.

use super::Invariant;
use crate::types::MIN_BOARD_SIZE;
use crate::GameState;

/// Invariant: the board is N×N with N at least 3.
pub struct SquareBoardInvariant;

impl Invariant<GameState> for SquareBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let size = state.size();
        size >= MIN_BOARD_SIZE && state.board().cells().len() == size * size
    }

    fn description() -> &'static str {
        "Board is square with side of at least 3"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_board_holds() {
        assert!(SquareBoardInvariant::holds(&GameState::new(1)));
        assert!(SquareBoardInvariant::holds(&GameState::new(9)));
    }
}
