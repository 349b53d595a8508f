/// SQLite implementation of the habit storage interface
///
/// This module provides the concrete SQLite implementation for storing
/// and retrieving habit data. It handles all SQL queries and data conversion.

use std::path::Path;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use crate::domain::{HabitId, Periodicity};
use crate::storage::{migrations, HabitRow, HabitStore, StorageError};

/// SQLite-based storage implementation
///
/// This struct holds a connection to the SQLite database and implements
/// all the storage operations defined in the HabitStore trait. The
/// connection is opened once and lives for the lifetime of the process.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SQLite storage instance backed by a file
    ///
    /// This opens the database file and runs any necessary migrations
    /// to ensure the schema is up to date.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self, StorageError> {
        let conn = Connection::open(db_path.as_ref())
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        let store = Self::from_connection(conn)?;
        tracing::info!("SQLite storage initialized at: {:?}", db_path.as_ref());
        Ok(store)
    }

    /// Create a storage instance over an in-memory database (tests)
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, StorageError> {
        // Completion rows must reference an existing habit
        conn.execute("PRAGMA foreign_keys = ON", [])
            .map_err(|e| StorageError::Connection(format!("Failed to enable foreign keys: {}", e)))?;

        migrations::initialize_database(&conn)?;

        Ok(Self { conn })
    }

    /// Helper to parse an RFC 3339 timestamp column
    fn parse_timestamp(column: usize, value: &str) -> Result<DateTime<Utc>, rusqlite::Error> {
        DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| rusqlite::Error::InvalidColumnType(
                column, "Invalid datetime".to_string(), rusqlite::types::Type::Text,
            ))
    }

    /// Helper to parse the periodicity column
    fn parse_periodicity(column: usize, value: &str) -> Result<Periodicity, rusqlite::Error> {
        value.parse::<Periodicity>().map_err(|_| {
            rusqlite::Error::InvalidColumnType(
                column, "Invalid periodicity".to_string(), rusqlite::types::Type::Text,
            )
        })
    }
}

impl HabitStore for SqliteStore {
    /// Idempotently create the schema; safe to call repeatedly
    fn ensure_schema(&self) -> Result<(), StorageError> {
        migrations::initialize_database(&self.conn)
    }

    /// Insert a new habit row, surfacing DuplicateHabit on name collisions
    fn insert_habit(
        &self,
        name: &str,
        periodicity: Periodicity,
        created_at: DateTime<Utc>,
    ) -> Result<HabitId, StorageError> {
        let result = self.conn.execute(
            "INSERT INTO habits (name, periodicity, created_at) VALUES (?1, ?2, ?3)",
            params![name, periodicity.as_str(), created_at.to_rfc3339()],
        );

        match result {
            Ok(_) => {
                let id = HabitId(self.conn.last_insert_rowid());
                tracing::debug!("Created habit: {} ({})", name, id);
                Ok(id)
            }
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                Err(StorageError::DuplicateHabit { name: name.to_string() })
            }
            Err(e) => Err(StorageError::Query(e)),
        }
    }

    /// Insert a habit only if the name is free; duplicates are ignored
    fn insert_habit_if_absent(
        &self,
        name: &str,
        periodicity: Periodicity,
        created_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO habits (name, periodicity, created_at) VALUES (?1, ?2, ?3)",
            params![name, periodicity.as_str(), created_at.to_rfc3339()],
        )?;

        if inserted > 0 {
            tracing::debug!("Seeded habit: {}", name);
        }
        Ok(())
    }

    /// Append a completion row; the foreign key must resolve
    fn record_completion(
        &self,
        habit_id: HabitId,
        completed_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        let result = self.conn.execute(
            "INSERT INTO completions (habit_id, completed_at) VALUES (?1, ?2)",
            params![habit_id.as_i64(), completed_at.to_rfc3339()],
        );

        match result {
            Ok(_) => {
                tracing::debug!("Recorded completion for habit {}", habit_id);
                Ok(())
            }
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
            {
                Err(StorageError::UnknownHabitId { habit_id })
            }
            Err(e) => Err(StorageError::Query(e)),
        }
    }

    /// All habit rows, in insertion order
    fn list_habits(&self) -> Result<Vec<HabitRow>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, periodicity, created_at FROM habits ORDER BY id",
        )?;

        let habit_iter = stmt.query_map([], |row| {
            let periodicity_str: String = row.get(2)?;
            let periodicity = Self::parse_periodicity(2, &periodicity_str)?;

            let created_at_str: String = row.get(3)?;
            let created_at = Self::parse_timestamp(3, &created_at_str)?;

            Ok(HabitRow {
                id: HabitId(row.get(0)?),
                name: row.get(1)?,
                periodicity,
                created_at,
            })
        })?;

        let mut habits = Vec::new();
        for habit in habit_iter {
            habits.push(habit?);
        }

        Ok(habits)
    }

    /// All completion timestamps for one habit, in storage order
    fn list_completions(&self, habit_id: HabitId) -> Result<Vec<DateTime<Utc>>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT completed_at FROM completions WHERE habit_id = ?1",
        )?;

        let ts_iter = stmt.query_map(params![habit_id.as_i64()], |row| {
            let completed_at_str: String = row.get(0)?;
            Self::parse_timestamp(0, &completed_at_str)
        })?;

        let mut completions = Vec::new();
        for ts in ts_iter {
            completions.push(ts?);
        }

        Ok(completions)
    }

    /// Look up a habit id by its unique name
    fn find_habit_id_by_name(&self, name: &str) -> Result<Option<HabitId>, StorageError> {
        let result = self.conn.query_row(
            "SELECT id FROM habits WHERE name = ?1",
            params![name],
            |row| row.get::<_, i64>(0),
        );

        match result {
            Ok(id) => Ok(Some(HabitId(id))),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StorageError::Query(e)),
        }
    }
}
