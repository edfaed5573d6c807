//! Snapshot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the full todo collection as one serialized snapshot row.
//! - Recover from missing or malformed snapshots without failing callers.
//!
//! # Invariants
//! - `save_snapshot` fully overwrites the prior snapshot.
//! - `load_snapshot` treats missing or corrupt payloads as "no prior data"
//!   and logs a recovery warning instead of erroring.

use crate::db::DbError;
use crate::db::migrations::latest_version;
use crate::model::todo::TodoItem;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key the todo snapshot is stored under.
pub const SNAPSHOT_KEY: &str = "todos";

/// Result type for snapshot repository APIs.
pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for snapshot persistence.
#[derive(Debug)]
pub enum RepoError {
    /// Storage-layer failure.
    Db(DbError),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        /// Schema version this binary requires.
        expected_version: u32,
        /// Schema version found on the connection.
        actual_version: u32,
    },
    /// Snapshot payload could not be serialized for writing.
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "snapshot repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::Serialize(err) => write!(f, "failed to serialize snapshot: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
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

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Persistence contract for the todo snapshot.
pub trait SnapshotRepository {
    /// Loads the stored collection; missing or corrupt snapshots yield empty.
    fn load_snapshot(&self) -> RepoResult<Vec<TodoItem>>;
    /// Overwrites the stored snapshot with the full collection.
    fn save_snapshot(&self, todos: &[TodoItem]) -> RepoResult<()>;
}

/// SQLite-backed snapshot repository.
pub struct SqliteSnapshotRepository<'conn> {
    conn: &'conn Connection,
    key: &'static str,
}

impl<'conn> SqliteSnapshotRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// # Errors
    /// - Returns `UninitializedConnection` when the connection's
    ///   `user_version` does not match the latest migration.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let actual_version: u32 = conn
            .query_row("PRAGMA user_version;", [], |row| row.get(0))
            .map_err(DbError::from)?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        Ok(Self {
            conn,
            key: SNAPSHOT_KEY,
        })
    }
}

impl SnapshotRepository for SqliteSnapshotRepository<'_> {
    fn load_snapshot(&self) -> RepoResult<Vec<TodoItem>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM snapshots WHERE key = ?1;",
                [self.key],
                |row| row.get(0),
            )
            .optional()
            .map_err(DbError::from)?;

        let Some(raw) = raw else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<TodoItem>>(&raw) {
            Ok(todos) => Ok(todos),
            Err(err) => {
                // Malformed snapshots count as "no prior data" so the store
                // always comes up usable. The recovery is logged rather than
                // silent; see DESIGN.md.
                warn!(
                    "event=snapshot_load module=repo status=recovered key={} error={err}",
                    self.key
                );
                Ok(Vec::new())
            }
        }
    }

    fn save_snapshot(&self, todos: &[TodoItem]) -> RepoResult<()> {
        let payload = serde_json::to_string(todos)?;
        self.conn.execute(
            "INSERT INTO snapshots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![self.key, payload],
        )?;
        Ok(())
    }
}
