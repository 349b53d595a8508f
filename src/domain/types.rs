/// Core types used throughout the domain layer
///
/// This module defines the Periodicity enum and the HabitId newtype that are
/// shared by the Habit entity, the storage layer, and the analytics functions.

use std::fmt;
use std::str::FromStr;
use clap::ValueEnum;

/// Unique identifier for a habit
///
/// This wraps the SQLite integer rowid to provide type safety - you can't
/// accidentally pass a raw row count where a habit ID is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HabitId(pub i64);

impl HabitId {
    /// Get the raw integer value (used by the storage layer)
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How often a habit is intended to be performed
///
/// The periodicity is descriptive metadata on the habit; streak calculation
/// currently counts calendar-day adjacency for every periodicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Periodicity {
    /// Every single day
    Daily,
    /// Once per week
    Weekly,
    /// Once per month
    Monthly,
}

impl Periodicity {
    /// Canonical lowercase name, used for database storage and display
    pub fn as_str(&self) -> &'static str {
        match self {
            Periodicity::Daily => "daily",
            Periodicity::Weekly => "weekly",
            Periodicity::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Periodicity {
    type Err = crate::domain::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Periodicity::Daily),
            "weekly" => Ok(Periodicity::Weekly),
            "monthly" => Ok(Periodicity::Monthly),
            other => Err(crate::domain::DomainError::InvalidPeriodicity(
                format!("Invalid periodicity '{}'. Valid options: daily, weekly, monthly", other)
            )),
        }
    }
}
