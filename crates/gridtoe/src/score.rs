//! Win counts that outlive individual games.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Number of games each player has won.
///
/// Serializes as `{"X": n, "O": n}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Wins for X.
    #[serde(rename = "X")]
    pub x: u32,
    /// Wins for O.
    #[serde(rename = "O")]
    pub o: u32,
}

impl Score {
    /// Creates a score with both counts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of wins for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Adds one win for `player`.
    pub fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x = self.x.saturating_add(1),
            Player::O => self.o = self.o.saturating_add(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_win_touches_one_player() {
        let mut score = Score::new();
        score.record_win(Player::O);
        assert_eq!(score.wins(Player::O), 1);
        assert_eq!(score.wins(Player::X), 0);
    }

    #[test]
    fn test_serialized_keys() {
        let score = Score { x: 2, o: 5 };
        let json = serde_json::to_string(&score).unwrap();
        assert_eq!(json, r#"{"X":2,"O":5}"#);
        let back: Score = serde_json::from_str(r#"{"O":1,"X":4}"#).unwrap();
        assert_eq!(back, Score { x: 4, o: 1 });
    }
}
