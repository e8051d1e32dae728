//! Application state and the move → record → re-read flow.

use tracing::{debug, warn};

use crate::db::{LeaderboardEntry, LeaderboardStore, StoreError};
use crate::game::{Game, GameStatus, Mark};

/// Frontend state: the game session, the store handle, and the last
/// standings snapshot.
#[derive(Debug)]
pub struct App {
    game: Game,
    store: LeaderboardStore,
    standings: Vec<LeaderboardEntry>,
    cursor: usize,
}

impl App {
    /// Creates the application over an opened store, loading the initial
    /// standings.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the initial standings cannot be read.
    pub fn new(mut store: LeaderboardStore) -> Result<Self, StoreError> {
        let standings = store.read_all()?;
        Ok(Self {
            game: Game::new(),
            store,
            standings,
            cursor: 4,
        })
    }

    /// Returns the game session.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the last standings snapshot.
    pub fn standings(&self) -> &[LeaderboardEntry] {
        &self.standings
    }

    /// Returns the cursor cell (0-8).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor to `pos`.
    pub fn set_cursor(&mut self, pos: usize) {
        debug_assert!(pos < 9);
        self.cursor = pos;
    }

    /// Places the current mark at the cursor cell.
    pub fn place_at_cursor(&mut self) {
        self.place(self.cursor);
    }

    /// Places the current mark at `pos`.
    ///
    /// An illegal move is a silent no-op, indistinguishable from a missed
    /// click. A move that completes a winning triple records exactly one
    /// win for that mark and refreshes the standings from a full re-read.
    pub fn place(&mut self, pos: usize) {
        match self.game.play(pos) {
            Err(reason) => debug!(pos, %reason, "Move ignored"),
            Ok(()) => {
                if let GameStatus::Won(mark) = self.game.status() {
                    self.record_win(mark);
                }
            }
        }
    }

    /// A failed write or re-read leaves the standings stale; the game
    /// itself carries on.
    fn record_win(&mut self, mark: Mark) {
        if let Err(error) = self.store.record_win(mark) {
            warn!(%error, "Win not recorded");
            return;
        }
        match self.store.read_all() {
            Ok(standings) => self.standings = standings,
            Err(error) => warn!(%error, "Standings not refreshed"),
        }
    }
}
