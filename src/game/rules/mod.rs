//! Game engine: move validation and status projection.

mod draw;
mod win;

pub use win::winner;

pub(crate) use draw::is_full;

use super::types::{Board, GameStatus, Mark, MoveError};
use tracing::instrument;

/// One game session: a board plus the mark that plays next.
///
/// A pure value type with no I/O. A fresh `Game` is the only reset
/// mechanism; no frontend path restarts a session in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Mark,
}

impl Game {
    /// Creates a new game with an empty board; X moves first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that plays next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Projects the current status: next turn, winner, or draw.
    pub fn status(&self) -> GameStatus {
        if let Some(mark) = winner(&self.board) {
            GameStatus::Won(mark)
        } else if is_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::NextTurn(self.to_move)
        }
    }

    /// Places the current mark at `pos` (0-8) and flips the turn flag.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] when `pos` is out of bounds, the cell is
    /// occupied, or the game is already over. The game state is unchanged
    /// on rejection.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: usize) -> Result<(), MoveError> {
        if !matches!(self.status(), GameStatus::NextTurn(_)) {
            return Err(MoveError::GameOver);
        }
        if pos >= 9 {
            return Err(MoveError::OutOfBounds);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied);
        }

        self.board.place(pos, self.to_move);
        self.to_move = self.to_move.opponent();
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_moves_first() {
        assert_eq!(Game::new().to_move(), Mark::X);
    }

    #[test]
    fn accepted_move_flips_turn() {
        let mut game = Game::new();
        game.play(4).unwrap();
        assert_eq!(game.to_move(), Mark::O);
        assert_eq!(game.board().mark_at(4), Some(Mark::X));
    }

    #[test]
    fn occupied_cell_is_rejected_unchanged() {
        let mut game = Game::new();
        game.play(0).unwrap();
        let before = game.clone();
        assert_eq!(game.play(0), Err(MoveError::Occupied));
        assert_eq!(game, before);
    }

    #[test]
    fn out_of_bounds_is_rejected_unchanged() {
        let mut game = Game::new();
        let before = game.clone();
        assert_eq!(game.play(9), Err(MoveError::OutOfBounds));
        assert_eq!(game, before);
    }

    #[test]
    fn moves_after_a_win_are_rejected() {
        let mut game = Game::new();
        for pos in [0, 3, 1, 4, 2] {
            game.play(pos).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Won(Mark::X));
        let before = game.clone();
        assert_eq!(game.play(5), Err(MoveError::GameOver));
        assert_eq!(game, before);
    }

    #[test]
    fn full_board_without_winner_is_a_draw() {
        let mut game = Game::new();
        for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.play(pos).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Draw);
    }

    #[test]
    fn status_reports_next_mark_while_in_progress() {
        let mut game = Game::new();
        assert_eq!(game.status(), GameStatus::NextTurn(Mark::X));
        game.play(8).unwrap();
        assert_eq!(game.status(), GameStatus::NextTurn(Mark::O));
    }
}
