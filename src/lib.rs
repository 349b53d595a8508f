/// Public library interface for the habit tracker CLI
///
/// The binary is a thin wrapper around this library; tests drive the
/// storage, registry, and analytics layers through these exports.

pub mod domain;
pub mod storage;
pub mod registry;
pub mod analytics;
pub mod commands;

// Re-export the types most callers need
pub use domain::{DomainError, Habit, HabitId, Periodicity};
pub use registry::{HabitRegistry, RegistryError};
pub use storage::{HabitRow, HabitStore, SqliteStore, StorageError};
