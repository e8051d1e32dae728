//! Durable win-counter store backed by SQLite.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::db::{LeaderboardEntry, StoreError, schema};
use crate::game::Mark;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Open handle to the leaderboard table.
///
/// Constructed once and passed into the frontend; it owns the connection
/// for the life of the process rather than reconnecting per call.
pub struct LeaderboardStore {
    conn: SqliteConnection,
}

impl std::fmt::Debug for LeaderboardStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeaderboardStore").finish_non_exhaustive()
    }
}

impl LeaderboardStore {
    /// Opens the store at `db_path`, creating the table on first use.
    ///
    /// Use `":memory:"` for an in-memory database (useful for tests).
    /// Opening an already-initialized database is a no-op for the schema.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the database cannot be opened
    /// or the schema cannot be prepared.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn open(db_path: &str) -> Result<Self, StoreError> {
        info!(path = %db_path, "Opening leaderboard store");
        let mut conn = SqliteConnection::establish(db_path)?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::Unavailable(format!("schema setup failed: {e}")))?;
        Ok(Self { conn })
    }

    /// Returns every entry, best standing first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] on a lower-level fault.
    #[instrument(skip(self))]
    pub fn read_all(&mut self) -> Result<Vec<LeaderboardEntry>, StoreError> {
        use schema::leaderboard::dsl;

        let entries = dsl::leaderboard
            .order((dsl::wins.desc(), dsl::player.asc()))
            .load::<LeaderboardEntry>(&mut self.conn)
            .map_err(|e| StoreError::Read(e.to_string()))?;

        debug!(count = entries.len(), "Leaderboard loaded");
        Ok(entries)
    }

    /// Increments the win count for `mark` by exactly one, creating the
    /// entry on a first win.
    ///
    /// The read-increment-write runs inside a single transaction so that
    /// no increment can be lost to an interleaved writer.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] on a lower-level fault.
    #[instrument(skip(self), fields(mark = %mark))]
    pub fn record_win(&mut self, mark: Mark) -> Result<LeaderboardEntry, StoreError> {
        use schema::leaderboard::dsl;

        let updated = self
            .conn
            .transaction::<LeaderboardEntry, diesel::result::Error, _>(|conn| {
                let current = dsl::leaderboard
                    .filter(dsl::player.eq(mark.as_str()))
                    .first::<LeaderboardEntry>(conn)
                    .optional()?
                    .unwrap_or_else(|| LeaderboardEntry::new(mark.as_str().to_string(), 0));

                let next = LeaderboardEntry::new(current.player().clone(), current.wins() + 1);

                diesel::insert_into(dsl::leaderboard)
                    .values(&next)
                    .on_conflict(dsl::player)
                    .do_update()
                    .set(dsl::wins.eq(*next.wins()))
                    .execute(conn)?;

                Ok(next)
            })
            .map_err(|e| StoreError::Write(e.to_string()))?;

        info!(player = %updated.player(), wins = updated.wins(), "Win recorded");
        Ok(updated)
    }
}
