/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a recurring
/// activity the user wants to track, along with its validation rules.

use chrono::{DateTime, Utc};
use crate::domain::{DomainError, HabitId, Periodicity};

/// A habit represents something the user wants to do regularly
///
/// Each habit has a unique name, a periodicity (daily, weekly, or monthly)
/// and an append-only history of completion timestamps. Completions are never
/// deleted; the history only grows.
#[derive(Debug, Clone, PartialEq)]
pub struct Habit {
    /// Unique identifier assigned by the storage layer
    pub id: HabitId,
    /// Display name, unique across the registry (e.g., "Morning Exercise")
    pub name: String,
    /// How often this habit should be performed
    pub periodicity: Periodicity,
    /// When this habit was created
    pub created_at: DateTime<Utc>,
    /// Every recorded completion, in the order they were loaded or appended
    pub completion_dates: Vec<DateTime<Utc>>,
}

impl Habit {
    /// Create a new habit with validation
    ///
    /// The completion history starts empty; the id comes from the storage
    /// layer once the habit row has been inserted.
    pub fn new(
        id: HabitId,
        name: String,
        periodicity: Periodicity,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;

        Ok(Self {
            id,
            name,
            periodicity,
            created_at,
            completion_dates: Vec::new(),
        })
    }

    /// Create a habit from existing data (used when loading from the database)
    ///
    /// This constructor assumes data is already validated and is mainly used
    /// by the registry when loading habits and their completions.
    pub fn from_existing(
        id: HabitId,
        name: String,
        periodicity: Periodicity,
        created_at: DateTime<Utc>,
        completion_dates: Vec<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            periodicity,
            created_at,
            completion_dates,
        }
    }

    /// Append a completion timestamp to the in-memory history
    ///
    /// The registry calls this after the completion row has been persisted,
    /// keeping memory consistent with the store.
    pub fn complete(&mut self, completed_at: DateTime<Utc>) {
        self.completion_dates.push(completed_at);
    }

    /// Total number of recorded completions
    ///
    /// The `analytics` command reports this count as both the "current" and
    /// "longest" streak. It is NOT a consecutive-day streak; the real
    /// algorithm lives in `analytics::longest_streak`. The two are kept
    /// under distinct names so they cannot be confused.
    pub fn completion_count(&self) -> usize {
        self.completion_dates.len()
    }

    /// Validate habit name according to business rules
    ///
    /// The registry calls this before persisting anything, so a rejected
    /// name never reaches storage.
    pub(crate) fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string()
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be longer than 100 characters".to_string()
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_valid_habit() {
        let habit = Habit::new(
            HabitId(1),
            "Morning Exercise".to_string(),
            Periodicity::Daily,
            Utc::now(),
        );

        assert!(habit.is_ok());
        let habit = habit.unwrap();
        assert_eq!(habit.name, "Morning Exercise");
        assert_eq!(habit.periodicity, Periodicity::Daily);
        assert!(habit.completion_dates.is_empty());
    }

    #[test]
    fn test_invalid_habit_name() {
        let result = Habit::new(
            HabitId(1),
            "   ".to_string(),
            Periodicity::Daily,
            Utc::now(),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_overlong_habit_name() {
        let result = Habit::new(
            HabitId(1),
            "x".repeat(101),
            Periodicity::Weekly,
            Utc::now(),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_completion_count_is_raw_count() {
        let mut habit = Habit::new(
            HabitId(1),
            "Read a Book".to_string(),
            Periodicity::Daily,
            Utc::now(),
        )
        .unwrap();

        assert_eq!(habit.completion_count(), 0);

        // Three completions with a gap still count as 3; this is the naive
        // per-entity number, not a consecutive-day streak.
        habit.complete(Utc::now());
        habit.complete(Utc::now() - chrono::Duration::days(5));
        habit.complete(Utc::now() - chrono::Duration::days(10));
        assert_eq!(habit.completion_count(), 3);
    }
}
