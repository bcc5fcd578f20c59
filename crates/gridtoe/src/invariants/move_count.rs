//! Move counter invariant: the counter matches the occupied cells.

use super::Invariant;
use crate::GameState;

/// Invariant: `move_count` equals the number of occupied cells.
///
/// Every accepted move fills exactly one cell and bumps the counter once.
pub struct MoveCountInvariant;

impl Invariant<GameState> for MoveCountInvariant {
    fn holds(state: &GameState) -> bool {
        state.move_count() == state.board().occupied_count()
    }

    fn description() -> &'static str {
        "Move count matches number of occupied cells"
    }
}
