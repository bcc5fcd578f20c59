//! Game state and move outcomes.

use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The coordinates fall outside the board.
    #[display("Cell ({}, {}) is off the board", _0, _1)]
    OutOfBounds(usize, usize),
    /// The cell already holds a mark.
    #[display("Cell ({}, {}) is already occupied", _0, _1)]
    Occupied(usize, usize),
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

/// Result of applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The move was ignored; the state is unchanged.
    Rejected(Rejection),
    /// The mark was placed and the other player is up.
    Continued,
    /// The mark completed a line.
    Won(Player),
    /// The mark filled the last cell without completing a line.
    Draw,
}

impl MoveResult {
    /// Returns true if the move was ignored.
    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveResult::Rejected(_))
    }
}

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player whose mark goes down next.
    current_player: Player,
    /// Number of marks placed so far.
    move_count: usize,
    /// Game status.
    status: GameStatus,
}

impl GameState {
    /// Starts a game on an empty `size`×`size` board with X to move.
    ///
    /// Sizes below 3 are clamped to 3, sizes above
    /// [`MAX_BOARD_SIZE`](crate::MAX_BOARD_SIZE) to that maximum.
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            current_player: Player::X,
            move_count: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the number of marks placed so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn count_move(&mut self) {
        self.move_count += 1;
    }

    pub(crate) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(crate::types::MIN_BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_serializes_board_with_size_squared_cells() {
        let state = GameState::new(4);
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["board"]["size"], 4);
        assert_eq!(json["board"]["cells"].as_array().unwrap().len(), 16);
        assert_eq!(json["current_player"], "X");
        assert_eq!(json["move_count"], 0);
    }
}
