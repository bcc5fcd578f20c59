//! Game rules for N×N tic-tac-toe.
//!
//! This module contains pure functions for evaluating and advancing game
//! state. Rules are separated from board storage so the engine, the
//! invariants and tests can share them.

pub mod draw;
pub mod play;
pub mod win;

pub use draw::is_full;
pub use play::apply_move;
pub use win::check_win;
