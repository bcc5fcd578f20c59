//! The move transition.

use super::{check_win, is_full};
use crate::state::{GameState, GameStatus, MoveResult, Rejection};
use crate::types::Cell;
use tracing::{debug, instrument};

/// Places the current player's mark at `(row, col)`, consuming the state
/// and returning the next one.
///
/// Moves on a finished game, off the board or onto an occupied cell come
/// back as [`MoveResult::Rejected`] with the state untouched. Score and
/// history are not touched here; see [`crate::Engine`].
#[instrument(skip(state), fields(player = ?state.current_player(), move_count = state.move_count()))]
pub fn apply_move(mut state: GameState, row: usize, col: usize) -> (GameState, MoveResult) {
    if let Some(rejection) = validate(&state, row, col) {
        debug!(%rejection, "Move rejected");
        return (state, MoveResult::Rejected(rejection));
    }

    let player = state.current_player();
    state.board_mut().set(row, col, Cell::Occupied(player));
    state.count_move();

    if check_win(state.board(), row, col) {
        state.set_status(GameStatus::Won(player));
        return (state, MoveResult::Won(player));
    }

    if is_full(state.board()) {
        state.set_status(GameStatus::Draw);
        return (state, MoveResult::Draw);
    }

    state.pass_turn();
    (state, MoveResult::Continued)
}

fn validate(state: &GameState, row: usize, col: usize) -> Option<Rejection> {
    if state.status().is_terminal() {
        return Some(Rejection::GameOver);
    }
    match state.board().get(row, col) {
        None => Some(Rejection::OutOfBounds(row, col)),
        Some(Cell::Occupied(_)) => Some(Rejection::Occupied(row, col)),
        Some(Cell::Empty) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    fn play(moves: &[(usize, usize)]) -> (GameState, MoveResult) {
        let mut state = GameState::new(3);
        let mut last = MoveResult::Continued;
        for &(row, col) in moves {
            let (next, result) = apply_move(state, row, col);
            state = next;
            last = result;
        }
        (state, last)
    }

    #[test]
    fn test_move_passes_turn() {
        let (state, result) = play(&[(1, 1)]);
        assert_eq!(result, MoveResult::Continued);
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.move_count(), 1);
        assert_eq!(state.board().get(1, 1), Some(Cell::Occupied(Player::X)));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let (state, _) = play(&[(1, 1)]);
        let before = state.clone();
        let (after, result) = apply_move(state, 1, 1);
        assert_eq!(result, MoveResult::Rejected(Rejection::Occupied(1, 1)));
        assert_eq!(after, before);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let state = GameState::new(3);
        let (after, result) = apply_move(state.clone(), 3, 0);
        assert_eq!(result, MoveResult::Rejected(Rejection::OutOfBounds(3, 0)));
        assert_eq!(after, state);
    }

    #[test]
    fn test_winning_move_keeps_player() {
        let (state, result) = play(&[(0, 0), (1, 0), (0, 1), (2, 0), (0, 2)]);
        assert_eq!(result, MoveResult::Won(Player::X));
        assert_eq!(state.status(), GameStatus::Won(Player::X));
        assert_eq!(state.current_player(), Player::X);
    }

    #[test]
    fn test_terminal_state_rejects() {
        let (state, _) = play(&[(0, 0), (1, 0), (0, 1), (2, 0), (0, 2)]);
        let before = state.clone();
        let (after, result) = apply_move(state, 2, 2);
        assert_eq!(result, MoveResult::Rejected(Rejection::GameOver));
        assert_eq!(after, before);
    }
}
