//! Core domain types for the game.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A player's mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Mark {
    /// Mark X (moves first).
    #[display("X")]
    X,
    /// Mark O (moves second).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The single-character string form used as the leaderboard key.
    pub fn as_str(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl std::str::FromStr for Mark {
    type Err = MarkParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(Mark::X),
            "O" => Ok(Mark::O),
            _ => Err(MarkParseError),
        }
    }
}

/// Error returned when a string is not a valid mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("not a valid mark (expected \"X\" or \"O\")")]
pub struct MarkParseError;

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Unoccupied cell.
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

/// 3x3 board, cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at `pos` (0-8), or `None` out of bounds.
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Gets the mark occupying `pos`, if any.
    pub fn mark_at(&self, pos: usize) -> Option<Mark> {
        match self.get(pos) {
            Some(Square::Occupied(mark)) => Some(mark),
            _ => None,
        }
    }

    /// Checks whether the cell at `pos` is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Writes `mark` into `pos`. Callers validate bounds and occupancy first.
    pub(crate) fn place(&mut self, pos: usize, mark: Mark) {
        self.squares[pos] = Square::Occupied(mark);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Projection of a board plus turn flag into the game's visible status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; the contained mark plays next.
    NextTurn(Mark),
    /// The contained mark completed a winning triple.
    Won(Mark),
    /// Every cell is occupied with no winner.
    Draw,
}

/// Reasons a move is rejected. The frontend ignores these silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Cell index is not in 0-8.
    #[display("cell index out of bounds")]
    OutOfBounds,
    /// Cell already holds a mark.
    #[display("cell is already occupied")]
    Occupied,
    /// The board already has a winner or is full.
    #[display("game is already over")]
    GameOver,
}
