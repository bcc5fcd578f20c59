//! Results of completed games.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// Player won the game.
    #[display("{} wins", _0)]
    Won(Player),
    /// Game ended in a draw.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::Draw => None,
        }
    }
}

/// Append-only log of game results for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vec<Outcome>,
}

impl HistoryLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result.
    pub fn push(&mut self, outcome: Outcome) {
        self.entries.push(outcome);
    }

    /// All results, oldest first.
    pub fn entries(&self) -> &[Outcome] {
        &self.entries
    }

    /// Iterates over results, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Outcome> {
        self.entries.iter()
    }

    /// Number of completed games.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no game has finished yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_labels() {
        assert_eq!(Outcome::Won(Player::X).to_string(), "X wins");
        assert_eq!(Outcome::Won(Player::O).to_string(), "O wins");
        assert_eq!(Outcome::Draw.to_string(), "Draw");
    }

    #[test]
    fn test_log_keeps_order() {
        let mut log = HistoryLog::new();
        log.push(Outcome::Draw);
        log.push(Outcome::Won(Player::O));
        assert_eq!(log.entries(), &[Outcome::Draw, Outcome::Won(Player::O)]);
        assert_eq!(log.len(), 2);
    }
}
