//! Pure N×N tic-tac-toe engine.
//!
//! The engine owns one game at a time plus the running score and the list
//! of finished games. It does no I/O: hosts render [`GameState`], feed
//! coordinates to [`Engine::apply_move`], and persist [`Score`] however
//! they like.
//!
//! # Example
//!
//! ```
//! use gridtoe::{Engine, MoveResult, Player, Score};
//!
//! let mut engine = Engine::new(3, Score::new());
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (2, 0)] {
//!     engine.apply_move(row, col);
//! }
//! assert_eq!(engine.apply_move(0, 2), MoveResult::Won(Player::X));
//! assert_eq!(engine.score().x, 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod history;
pub mod invariants;
pub mod rules;
mod score;
mod state;
mod types;

pub use engine::Engine;
pub use history::{HistoryLog, Outcome};
pub use rules::{apply_move, check_win, is_full};
pub use score::Score;
pub use state::{GameState, GameStatus, MoveResult, Rejection};
pub use types::{Board, Cell, MAX_BOARD_SIZE, MIN_BOARD_SIZE, Player, clamp_board_size, parse_board_size};
