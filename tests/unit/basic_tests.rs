/// Basic unit tests to verify core functionality
use habit_tracker_cli::*;
use tempfile::NamedTempFile;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_habit_creation() {
        let habit = Habit::new(
            HabitId(1),
            "Test Habit".to_string(),
            Periodicity::Daily,
            Utc::now(),
        );

        assert!(habit.is_ok());
        let habit = habit.unwrap();
        assert_eq!(habit.name, "Test Habit");
        assert_eq!(habit.completion_count(), 0);
    }

    #[test]
    fn test_habit_completion_tracking() {
        let mut habit = Habit::new(
            HabitId(1),
            "Test Habit".to_string(),
            Periodicity::Daily,
            Utc::now(),
        )
        .unwrap();

        habit.complete(Utc::now());
        assert_eq!(habit.completion_count(), 1);
    }

    #[test]
    fn test_storage_creation() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteStore::new(temp_file.path());
        assert!(storage.is_ok());
    }

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let storage = SqliteStore::in_memory().expect("Failed to open in-memory store");
        storage.ensure_schema().expect("First ensure_schema failed");
        storage.ensure_schema().expect("Repeated ensure_schema failed");
    }

    #[test]
    fn test_analyzer_matches_known_example() {
        // Jan 1, Jan 2, Jan 4 has one two-day run
        let dates = [
            Utc.with_ymd_and_hms(2023, 1, 1, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2023, 1, 2, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2023, 1, 4, 10, 0, 0).unwrap(),
        ];
        assert_eq!(analytics::longest_streak(&dates), 2);
    }
}
