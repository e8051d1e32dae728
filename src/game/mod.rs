//! Tic-tac-toe board, rules, and status projection.

mod rules;
mod types;

pub use rules::{Game, winner};
pub use types::{Board, GameStatus, Mark, MarkParseError, MoveError, Square};
