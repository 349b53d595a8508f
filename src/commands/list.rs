/// Handler for the `list` subcommand

use std::io::Write;
use crate::registry::HabitRegistry;
use crate::storage::HabitStore;

/// Print every habit's name and periodicity, one per line
pub fn list<S: HabitStore>(registry: &HabitRegistry<S>, out: &mut impl Write) -> std::io::Result<()> {
    if registry.habits().is_empty() {
        writeln!(out, "No habits found.")?;
        return Ok(());
    }

    for habit in registry.habits() {
        writeln!(out, "Habit: {}, Periodicity: {}", habit.name, habit.periodicity)?;
    }

    Ok(())
}
