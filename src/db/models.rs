//! Leaderboard database models.

use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::db::{StoreError, schema};
use crate::game::Mark;

/// One leaderboard row: a player mark and its win count.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable, Getters, new)]
#[diesel(table_name = schema::leaderboard)]
pub struct LeaderboardEntry {
    player: String,
    wins: i32,
}

impl LeaderboardEntry {
    /// Parses the stored player key back into a [`Mark`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the stored key is not a valid mark.
    pub fn mark(&self) -> Result<Mark, StoreError> {
        self.player
            .parse()
            .map_err(|_| StoreError::Read(format!("invalid player key: '{}'", self.player)))
    }
}
