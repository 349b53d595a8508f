/// Habit registry: the in-memory catalog of tracked habits
///
/// The registry mediates every habit operation against the storage layer.
/// Writes go to storage first (the source of truth) and are mirrored into
/// memory only after they commit, so a failed write never leaves memory
/// ahead of disk.

use chrono::Utc;
use thiserror::Error;

use crate::domain::{DomainError, Habit, Periodicity};
use crate::storage::{HabitStore, StorageError};

/// The habits every fresh database starts with
///
/// Seeding uses insert-if-absent semantics, so initializing a registry twice
/// against the same store never duplicates these rows.
const PREDEFINED_HABITS: [(&str, Periodicity); 5] = [
    ("Morning Exercise", Periodicity::Daily),
    ("Read a Book", Periodicity::Daily),
    ("Weekly Meditation", Periodicity::Weekly),
    ("Call Family", Periodicity::Weekly),
    ("Budget Review", Periodicity::Monthly),
];

/// Errors that can occur during registry operations
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Habit '{name}' does not exist")]
    HabitNotFound { name: String },
}

/// In-memory view of all habits, synchronized with a HabitStore
pub struct HabitRegistry<S: HabitStore> {
    store: S,
    habits: Vec<Habit>,
}

impl<S: HabitStore> HabitRegistry<S> {
    /// Build a registry over a store
    ///
    /// Ensures the schema exists, seeds the predefined habits, then loads
    /// every habit row together with its completion timestamps into memory.
    pub fn new(store: S) -> Result<Self, RegistryError> {
        store.ensure_schema()?;

        for (name, periodicity) in PREDEFINED_HABITS {
            store.insert_habit_if_absent(name, periodicity, Utc::now())?;
        }

        let mut habits = Vec::new();
        for row in store.list_habits()? {
            let completions = store.list_completions(row.id)?;
            habits.push(Habit::from_existing(
                row.id,
                row.name,
                row.periodicity,
                row.created_at,
                completions,
            ));
        }

        tracing::info!("Registry loaded with {} habits", habits.len());
        Ok(Self { store, habits })
    }

    /// Create a new habit
    ///
    /// Creating a habit whose name already exists is a silent no-op, not an
    /// error. Otherwise the habit is persisted and appended to memory.
    pub fn create_habit(&mut self, name: &str, periodicity: Periodicity) -> Result<(), RegistryError> {
        if self.habits.iter().any(|habit| habit.name == name) {
            tracing::debug!("Habit '{}' already exists, skipping creation", name);
            return Ok(());
        }

        // Validate before touching storage: a rejected name must not persist
        Habit::validate_name(name)?;

        let created_at = Utc::now();
        let id = self.store.insert_habit(name, periodicity, created_at)?;
        self.habits.push(Habit::new(id, name.to_string(), periodicity, created_at)?);

        Ok(())
    }

    /// Record a completion for the named habit at the current time
    ///
    /// Fails with HabitNotFound if no habit has that name.
    pub fn mark_completed(&mut self, name: &str) -> Result<(), RegistryError> {
        let habit_id = self
            .store
            .find_habit_id_by_name(name)?
            .ok_or_else(|| RegistryError::HabitNotFound { name: name.to_string() })?;

        let completed_at = Utc::now();
        self.store.record_completion(habit_id, completed_at)?;

        if let Some(habit) = self.habits.iter_mut().find(|habit| habit.id == habit_id) {
            habit.complete(completed_at);
        }

        Ok(())
    }

    /// Read-only view of every tracked habit
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Access the underlying store (useful for testing)
    pub fn store(&self) -> &S {
        &self.store
    }
}
