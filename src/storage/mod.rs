/// Storage layer for persisting habit data
///
/// This module handles all database operations using SQLite. It provides
/// a clean interface for storing and retrieving habits and completions.

pub mod sqlite;
pub mod migrations;

// Re-export the main storage types
pub use sqlite::*;

use chrono::{DateTime, Utc};
use thiserror::Error;
use crate::domain::{HabitId, Periodicity};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("A habit named '{name}' already exists")]
    DuplicateHabit { name: String },

    #[error("No habit with id {habit_id} exists")]
    UnknownHabitId { habit_id: HabitId },

    #[error("Corrupt row: {0}")]
    CorruptRow(String),

    #[error("Migration error: {0}")]
    Migration(String),
}

/// A raw habit row as returned by the storage layer
///
/// Completions are fetched separately with `list_completions`; the registry
/// joins the two when building in-memory Habit entities.
#[derive(Debug, Clone, PartialEq)]
pub struct HabitRow {
    pub id: HabitId,
    pub name: String,
    pub periodicity: Periodicity,
    pub created_at: DateTime<Utc>,
}

/// Trait defining the storage interface for habits
///
/// This trait allows swapping SQLite for another backend while keeping the
/// registry unchanged. Every write commits before the call returns.
pub trait HabitStore {
    /// Idempotently create the habit and completion tables if absent
    fn ensure_schema(&self) -> Result<(), StorageError>;

    /// Insert a new habit row; fails with DuplicateHabit if the name exists
    fn insert_habit(
        &self,
        name: &str,
        periodicity: Periodicity,
        created_at: DateTime<Utc>,
    ) -> Result<HabitId, StorageError>;

    /// Insert a habit row only if the name is not already taken
    ///
    /// Used for seeding the predefined habits; never fails on duplicates.
    fn insert_habit_if_absent(
        &self,
        name: &str,
        periodicity: Periodicity,
        created_at: DateTime<Utc>,
    ) -> Result<(), StorageError>;

    /// Append a completion row referencing an existing habit
    fn record_completion(
        &self,
        habit_id: HabitId,
        completed_at: DateTime<Utc>,
    ) -> Result<(), StorageError>;

    /// All habit rows, in insertion order
    fn list_habits(&self) -> Result<Vec<HabitRow>, StorageError>;

    /// All completion timestamps for one habit, in storage order
    ///
    /// Storage order is not guaranteed sorted; callers sort if they need to.
    fn list_completions(&self, habit_id: HabitId) -> Result<Vec<DateTime<Utc>>, StorageError>;

    /// Look up a habit id by its unique name
    fn find_habit_id_by_name(&self, name: &str) -> Result<Option<HabitId>, StorageError>;
}
