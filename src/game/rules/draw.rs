//! Draw detection.

use super::super::types::{Board, Square};
use tracing::instrument;

/// Checks whether every cell is occupied.
///
/// A full board with no winner is a draw.
#[instrument]
pub(crate) fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
