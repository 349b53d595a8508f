/// Handler for the `create` subcommand

use crate::domain::Periodicity;
use crate::registry::{HabitRegistry, RegistryError};
use crate::storage::HabitStore;

/// Create a new habit
///
/// Duplicate names are silently skipped; the periodicity has already been
/// validated by the argument parser.
pub fn create<S: HabitStore>(
    registry: &mut HabitRegistry<S>,
    name: &str,
    periodicity: Periodicity,
) -> Result<(), RegistryError> {
    registry.create_habit(name, periodicity)
}
