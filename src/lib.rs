//! ninecell - terminal tic-tac-toe with a persisted win-count leaderboard
//!
//! # Architecture
//!
//! - **Game**: pure board/rules engine (move validation, win and draw
//!   detection, status projection)
//! - **Db**: SQLite-backed leaderboard store keyed by player mark
//! - **Tui**: ratatui frontend wiring input → game → store → redraw
//! - **Peer**: inert connection-negotiation scaffolding, wired to nothing
//!
//! # Example
//!
//! ```no_run
//! use ninecell::{Game, GameStatus, LeaderboardStore, Mark};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut store = LeaderboardStore::open("ninecell.db")?;
//! let mut game = Game::new();
//! for pos in [0, 3, 1, 4, 2] {
//!     game.play(pos)?;
//! }
//! if let GameStatus::Won(mark) = game.status() {
//!     store.record_win(mark)?;
//! }
//! assert_eq!(game.status(), GameStatus::Won(Mark::X));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod db;
mod game;
mod peer;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Game engine
pub use game::{Board, Game, GameStatus, Mark, MarkParseError, MoveError, Square, winner};

// Crate-level exports - Leaderboard store
pub use db::{LeaderboardEntry, LeaderboardStore, StoreError};

// Crate-level exports - Terminal frontend
pub use tui::{App, run as run_tui};

// Crate-level exports - Peer negotiation scaffolding
pub use peer::{
    DEFAULT_STUN_SERVER, IceCandidate, MediaTracks, PeerError, PeerSession, SdpKind,
    SessionDescription, SignalMessage, SignalSink,
};
