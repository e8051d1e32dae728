//! Leaderboard store error types.

use derive_more::{Display, Error};

/// Faults raised by the leaderboard store.
#[derive(Debug, Clone, Display, Error)]
pub enum StoreError {
    /// The database could not be opened or its schema prepared.
    #[display("leaderboard store unavailable: {_0}")]
    Unavailable(#[error(not(source))] String),
    /// A lower-level fault occurred while reading entries.
    #[display("leaderboard read failed: {_0}")]
    Read(#[error(not(source))] String),
    /// A lower-level fault occurred while writing an entry.
    #[display("leaderboard write failed: {_0}")]
    Write(#[error(not(source))] String),
}

impl From<diesel::ConnectionError> for StoreError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::Unavailable(err.to_string())
    }
}
