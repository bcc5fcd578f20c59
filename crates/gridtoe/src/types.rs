//! Core domain types for N×N tic-tac-toe.

use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;
use tracing::instrument;

/// Smallest board the engine will build.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest board the engine will build.
pub const MAX_BOARD_SIZE: usize = 100;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

/// Clamps a requested board size into `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
pub fn clamp_board_size(size: usize) -> usize {
    size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE)
}

/// Parses a user-entered board size.
///
/// Anything that is not a number, or is smaller than [`MIN_BOARD_SIZE`],
/// yields [`MIN_BOARD_SIZE`]. Numbers above [`MAX_BOARD_SIZE`], however
/// many digits, yield [`MAX_BOARD_SIZE`].
#[instrument]
pub fn parse_board_size(input: &str) -> usize {
    match input.trim().parse::<i64>() {
        Ok(n) if n < MIN_BOARD_SIZE as i64 => MIN_BOARD_SIZE,
        Ok(n) => usize::try_from(n).map_or(MAX_BOARD_SIZE, clamp_board_size),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => MAX_BOARD_SIZE,
        Err(_) => MIN_BOARD_SIZE,
    }
}

/// Square N×N board, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board. Sizes outside
    /// `MIN_BOARD_SIZE..=MAX_BOARD_SIZE` are clamped.
    pub fn new(size: usize) -> Self {
        let size = clamp_board_size(size);
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Checks if a cell is in bounds and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Number of cells holding the given player's mark.
    pub fn marks_of(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Places a mark without any rule checks.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = cell;
        }
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells render as `.`; rows and columns are labelled from 1.
    pub fn display(&self) -> String {
        let width = self.size.to_string().len();
        let mut result = format!("{:width$} ", "");
        for col in 0..self.size {
            result.push_str(&format!(" {:>width$}", col + 1));
        }
        for row in 0..self.size {
            result.push('\n');
            result.push_str(&format!("{:>width$} ", row + 1));
            for col in 0..self.size {
                let symbol = match self.cells[row * self.size + col] {
                    Cell::Empty => ".".to_string(),
                    Cell::Occupied(player) => player.to_string(),
                };
                result.push_str(&format!(" {:>width$}", symbol));
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(MIN_BOARD_SIZE)
    }
}
