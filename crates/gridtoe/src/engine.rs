//! Session-level game engine: the current game plus score and history.

use crate::history::{HistoryLog, Outcome};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules;
use crate::score::Score;
use crate::state::{GameState, MoveResult};
use tracing::{debug, info, instrument};

/// Owns the current [`GameState`], the running [`Score`] and the
/// [`HistoryLog`], and is the only way to change them.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    state: GameState,
    score: Score,
    history: HistoryLog,
}

impl Engine {
    /// Creates an engine with a fresh `size`×`size` game and a previously
    /// loaded score.
    #[instrument(skip(score), fields(x_wins = score.x, o_wins = score.o))]
    pub fn new(size: usize, score: Score) -> Self {
        let state = GameState::new(size);
        info!(size = state.size(), "Engine created");
        Self {
            state,
            score,
            history: HistoryLog::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the running score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Returns the results of completed games.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Replaces the current game with an empty `size`×`size` board.
    ///
    /// Score and history are kept.
    #[instrument(skip(self))]
    pub fn new_game(&mut self, size: usize) -> &GameState {
        self.state = GameState::new(size);
        info!(size = self.state.size(), "New game started");
        &self.state
    }

    /// Plays the current player's mark at `(row, col)`.
    ///
    /// A win adds one to the winner's score; a win or draw appends to the
    /// history. Rejected moves change nothing.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> MoveResult {
        let state = std::mem::take(&mut self.state);
        let (state, result) = rules::apply_move(state, row, col);
        self.state = state;

        match result {
            MoveResult::Rejected(_) => return result,
            MoveResult::Continued => {
                debug!(next = %self.state.current_player(), "Move accepted");
            }
            MoveResult::Won(player) => {
                self.score.record_win(player);
                self.history.push(Outcome::Won(player));
                info!(%player, x_wins = self.score.x, o_wins = self.score.o, "Game won");
            }
            MoveResult::Draw => {
                self.history.push(Outcome::Draw);
                info!(moves = self.state.move_count(), "Game drawn");
            }
        }

        debug_assert!(
            GameInvariants::check_all(&self.state).is_ok(),
            "game state invariants violated after move at ({row}, {col})"
        );
        result
    }

    /// Sets both win counts back to zero and returns the new score.
    #[instrument(skip(self))]
    pub fn reset_score(&mut self) -> Score {
        self.score = Score::new();
        info!("Score reset");
        self.score
    }
}
