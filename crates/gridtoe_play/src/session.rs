//! A play session: the engine plus score persistence.

use crate::store::{BlobStore, ScoreRepository, StoreError};
use gridtoe::{Engine, GameState, HistoryLog, MoveResult, Score};
use tracing::{info, instrument, warn};

/// Couples an [`Engine`] with the repository its score is saved to.
///
/// The engine finishes each move before anything is written; a failed write
/// never changes game state. The most recent failure is kept until taken.
#[derive(Debug)]
pub struct PlaySession<S> {
    engine: Engine,
    repository: ScoreRepository<S>,
    save_error: Option<StoreError>,
}

impl<S: BlobStore> PlaySession<S> {
    /// Starts a session on a `size`×`size` board with the stored score.
    #[instrument(skip(repository))]
    pub fn new(size: usize, repository: ScoreRepository<S>) -> Self {
        let score = repository.load_score();
        info!(x_wins = score.x, o_wins = score.o, "Session started");
        Self {
            engine: Engine::new(size, score),
            repository,
            save_error: None,
        }
    }

    /// Returns the engine for read-only rendering.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    /// Returns the running score.
    pub fn score(&self) -> &Score {
        self.engine.score()
    }

    /// Returns the results of games finished this session.
    pub fn history(&self) -> &HistoryLog {
        self.engine.history()
    }

    /// Plays a move; a win is saved right away.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> MoveResult {
        let result = self.engine.apply_move(row, col);
        if let MoveResult::Won(_) = result {
            self.persist();
        }
        result
    }

    /// Starts a new game, keeping score and history.
    ///
    /// The store is not re-read; the in-memory score is already the latest
    /// one this session saved.
    #[instrument(skip(self))]
    pub fn new_game(&mut self, size: usize) -> &GameState {
        self.engine.new_game(size)
    }

    /// Zeroes the score and saves it.
    #[instrument(skip(self))]
    pub fn reset_score(&mut self) -> Score {
        let score = self.engine.reset_score();
        self.persist();
        score
    }

    /// Returns the last save failure, if any, clearing it.
    pub fn take_save_error(&mut self) -> Option<StoreError> {
        self.save_error.take()
    }

    fn persist(&mut self) {
        if let Err(e) = self.repository.save_score(self.engine.score()) {
            warn!(error = %e, "Failed to save score");
            self.save_error = Some(e);
        }
    }
}
