//! Snapshot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the full habit collection as one JSON document under a fixed
//!   key-value entry.
//! - Recover silently from absent or malformed persisted state.
//!
//! # Invariants
//! - `load_habits` never fails on bad data: unparseable snapshots and
//!   individually invalid records degrade to warn-logged omissions.
//! - `save_habits` replaces the whole document atomically via upsert.

use crate::db::DbError;
use crate::model::habit::Habit;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed namespace key for the habit collection snapshot.
pub const HABITS_SNAPSHOT_KEY: &str = "habits";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for snapshot load/save operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize snapshot: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the one-key habit snapshot.
pub trait SnapshotRepository {
    /// Loads the habit collection, falling back to empty on absent or
    /// malformed state.
    fn load_habits(&self) -> RepoResult<Vec<Habit>>;
    /// Persists the full habit collection under the fixed snapshot key.
    fn save_habits(&self, habits: &[Habit]) -> RepoResult<()>;
}

/// SQLite-backed snapshot repository.
pub struct SqliteSnapshotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SnapshotRepository for SqliteSnapshotRepository<'_> {
    fn load_habits(&self) -> RepoResult<Vec<Habit>> {
        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM snapshots WHERE key = ?1;",
                [HABITS_SNAPSHOT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(raw) = value else {
            return Ok(Vec::new());
        };

        Ok(parse_snapshot(&raw))
    }

    fn save_habits(&self, habits: &[Habit]) -> RepoResult<()> {
        let document = serde_json::to_string(habits).map_err(RepoError::Serialize)?;

        self.conn.execute(
            "INSERT INTO snapshots (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![HABITS_SNAPSHOT_KEY, document],
        )?;

        Ok(())
    }
}

/// Parses a persisted snapshot document, degrading to empty on bad shape.
///
/// Records that parse but violate habit invariants are dropped one by one
/// so a single corrupt row cannot take the whole collection down with it.
fn parse_snapshot(raw: &str) -> Vec<Habit> {
    let habits: Vec<Habit> = match serde_json::from_str(raw) {
        Ok(habits) => habits,
        Err(err) => {
            warn!(
                "event=snapshot_load module=repo status=recovered \
                 error_code=malformed_snapshot error={err}"
            );
            return Vec::new();
        }
    };

    habits
        .into_iter()
        .filter(|habit| match habit.validate() {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    "event=snapshot_load module=repo status=recovered \
                     error_code=invalid_record habit_id={} error={err}",
                    habit.id
                );
                false
            }
        })
        .collect()
}
