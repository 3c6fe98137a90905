use crate::{
    domain::Task,
    error::Result,
    storage::{decode_tasks, encode_tasks, Storage},
};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::debug;

/// SQLite-backed key/value storage. The collection is one row in `key_value`.
pub struct SqliteStorage {
    connection: Connection,
    key: String,
}

impl SqliteStorage {
    /// Opens (or creates) the database at `database_path`
    pub fn new(database_path: impl AsRef<Path>, key: impl Into<String>) -> Result<Self> {
        Self::with_connection(Connection::open(database_path)?, key)
    }

    /// Opens a private in-memory database
    pub fn in_memory(key: impl Into<String>) -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?, key)
    }

    fn with_connection(connection: Connection, key: impl Into<String>) -> Result<Self> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS key_value (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        Ok(Self {
            connection,
            key: key.into(),
        })
    }
}

impl Storage for SqliteStorage {
    fn read(&self) -> Result<Option<Vec<Task>>> {
        let raw: Option<String> = self
            .connection
            .query_row(
                "SELECT value FROM key_value WHERE key = ?1",
                params![self.key],
                |row| row.get(0),
            )
            .optional()?;

        raw.as_deref().map(decode_tasks).transpose()
    }

    fn write(&mut self, tasks: &[Task]) -> Result<()> {
        let raw = encode_tasks(tasks)?;
        self.connection.execute(
            "INSERT INTO key_value (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![self.key, raw],
        )?;
        debug!("Stored {} tasks in sqlite under {}", tasks.len(), self.key);
        Ok(())
    }
}
