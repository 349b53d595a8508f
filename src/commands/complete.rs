/// Handler for the `complete` subcommand

use crate::registry::{HabitRegistry, RegistryError};
use crate::storage::HabitStore;

/// Mark the named habit as completed at the current time
///
/// An unknown name is a hard failure surfaced to the user.
pub fn complete<S: HabitStore>(
    registry: &mut HabitRegistry<S>,
    name: &str,
) -> Result<(), RegistryError> {
    registry.mark_completed(name)
}
