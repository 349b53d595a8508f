/// Streak analytics over habit completion histories
///
/// These are pure functions with no storage dependency: they operate on
/// habits already loaded into memory. The central piece is `longest_streak`,
/// which detects the longest run of completions on consecutive calendar days.

use chrono::{DateTime, Utc};
use crate::domain::{Habit, Periodicity};

/// Length of the longest run of completions on consecutive calendar days
///
/// Exact duplicate instants are collapsed before scanning; two completions
/// on the same day at different times are kept and compared at calendar-date
/// granularity. A zero-day step resets the running counter without inflating
/// the total, so a same-day pair never doubles a streak (and mid-run it
/// restarts the count from that day). Input order does not matter.
///
/// Gaps are measured in calendar days regardless of the habit's periodicity,
/// so weekly and monthly habits will rarely score above 1. That limitation
/// is deliberate; see DESIGN.md.
pub fn longest_streak(dates: &[DateTime<Utc>]) -> u32 {
    if dates.is_empty() {
        return 0;
    }

    let mut sorted = dates.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut best = 0u32;
    let mut run = 1u32;

    for pair in sorted.windows(2) {
        // Calendar-date difference, not elapsed time: 23:00 followed by
        // 01:00 the next day is one day apart.
        let day_gap = (pair[1].date_naive() - pair[0].date_naive()).num_days();

        if day_gap == 1 {
            run += 1;
        } else {
            best = best.max(run);
            run = 1;
        }
    }

    best.max(run)
}

/// Habits whose periodicity equals the given value, in input order
pub fn filter_by_periodicity(habits: &[Habit], periodicity: Periodicity) -> Vec<&Habit> {
    habits
        .iter()
        .filter(|habit| habit.periodicity == periodicity)
        .collect()
}

/// Longest streak for the first habit with the given name, or 0 if absent
pub fn longest_streak_for_habit(habits: &[Habit], name: &str) -> u32 {
    habits
        .iter()
        .find(|habit| habit.name == name)
        .map(|habit| longest_streak(&habit.completion_dates))
        .unwrap_or(0)
}

/// The best streak achieved by any habit, or 0 if there are none
pub fn longest_streak_across_all(habits: &[Habit]) -> u32 {
    habits
        .iter()
        .map(|habit| longest_streak(&habit.completion_dates))
        .max()
        .unwrap_or(0)
}
