//! Win detection.

use super::super::types::{Board, Mark};
use tracing::instrument;

/// The 8 winning triples: 3 rows, 3 columns, 2 diagonals, in fixed
/// enumeration order.
pub(crate) const TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the mark holding a completed triple, if any.
///
/// When several triples are complete, the first in enumeration order wins.
/// Two triples held by different marks cannot arise under alternating play;
/// the scan asserts that instead of trusting it.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    let mut found = None;
    for [a, b, c] in TRIPLES {
        if let Some(mark) = board.mark_at(a) {
            if board.mark_at(b) == Some(mark) && board.mark_at(c) == Some(mark) {
                debug_assert!(
                    found.is_none() || found == Some(mark),
                    "conflicting winning triples on one board"
                );
                found.get_or_insert(mark);
            }
        }
    }
    found
}
