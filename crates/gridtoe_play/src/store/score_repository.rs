//! Score persistence on top of a blob store.

use super::{BlobStore, StoreError};
use gridtoe::Score;
use tracing::{debug, info, instrument, warn};

/// Key the score is stored under unless configured otherwise.
pub const DEFAULT_SCORE_KEY: &str = "ticTacToeScore";

/// Loads and saves the running [`Score`] as a JSON blob under one key.
#[derive(Debug, Clone)]
pub struct ScoreRepository<S> {
    store: S,
    key: String,
}

impl<S: BlobStore> ScoreRepository<S> {
    /// Creates a repository using [`DEFAULT_SCORE_KEY`].
    #[instrument(skip(store))]
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_SCORE_KEY)
    }

    /// Creates a repository using a custom key.
    #[instrument(skip(store, key), fields(key = %key.as_ref()))]
    pub fn with_key(store: S, key: impl AsRef<str>) -> Self {
        Self {
            store,
            key: key.as_ref().to_string(),
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads the stored score.
    ///
    /// Missing, unreadable or malformed data yields a zero score.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn load_score(&self) -> Score {
        let blob = match self.store.get(&self.key) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                debug!("No stored score, starting from zero");
                return Score::new();
            }
            Err(e) => {
                warn!(error = %e, "Could not read stored score, starting from zero");
                return Score::new();
            }
        };

        match serde_json::from_str::<Score>(&blob) {
            Ok(score) => {
                info!(x_wins = score.x, o_wins = score.o, "Score loaded");
                score
            }
            Err(e) => {
                warn!(error = %e, "Stored score is corrupt, starting from zero");
                Score::new()
            }
        }
    }

    /// Saves `score`, replacing the stored one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the blob cannot be written.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn save_score(&self, score: &Score) -> Result<(), StoreError> {
        let blob = serde_json::to_string(score)?;
        self.store.set(&self.key, &blob)?;
        debug!(x_wins = score.x, o_wins = score.o, "Score saved");
        Ok(())
    }
}
