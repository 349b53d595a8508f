/// Handler for the `analytics` subcommand

use std::io::Write;
use crate::registry::HabitRegistry;
use crate::storage::HabitStore;

/// Print per-habit streak summaries
///
/// Both columns report `Habit::completion_count()`, the entity's naive
/// self-reported number. The consecutive-day algorithm in the analytics
/// module is deliberately not wired in here; see DESIGN.md.
pub fn analytics<S: HabitStore>(
    registry: &HabitRegistry<S>,
    out: &mut impl Write,
) -> std::io::Result<()> {
    for habit in registry.habits() {
        writeln!(
            out,
            "Habit: {}, Current Streak: {}, Longest Streak: {}",
            habit.name,
            habit.completion_count(),
            habit.completion_count(),
        )?;
    }

    Ok(())
}
