//! Turn order invariant: X and O take turns, X first.

use super::Invariant;
use crate::types::Player;
use crate::{GameState, GameStatus};

/// Invariant: X has as many marks as O, or one more.
///
/// While the game is in progress the player to move is the one the mark
/// counts call for: X when the counts are equal, O otherwise.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let xs = state.board().marks_of(Player::X);
        let os = state.board().marks_of(Player::O);
        let balanced = xs == os || xs == os + 1;

        if state.status() != GameStatus::InProgress {
            return balanced;
        }

        let expected = if xs == os { Player::X } else { Player::O };
        balanced && state.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate with X moving first"
    }
}
