//! Persistence layer for the win-count leaderboard.

mod error;
mod models;
mod schema;
mod store;

pub use error::StoreError;
pub use models::LeaderboardEntry;
pub use store::LeaderboardStore;
