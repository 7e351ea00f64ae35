//! Plain-text presentation of schedules.
//!
//! Formatting is pure: the same schedule always renders to the same text.

use std::fmt;

use crate::models::{Schedule, StaffingWarning};

const HEAVY_RULE_WIDTH: usize = 70;
const LIGHT_RULE_WIDTH: usize = 40;

/// Placeholder printed for a slot with no one assigned.
pub const EMPTY_SLOT: &str = "(none)";

/// Displays a schedule as a table, one block per day.
pub struct ScheduleTable<'a>(pub &'a Schedule);

impl fmt::Display for ScheduleTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(HEAVY_RULE_WIDTH);
        let light = "-".repeat(LIGHT_RULE_WIDTH);

        writeln!(f, "\n{heavy}")?;
        writeln!(f, "WEEKLY EMPLOYEE SCHEDULE")?;
        writeln!(f, "{heavy}")?;

        let mut current_day = None;
        for (day, shift, names) in self.0.iter() {
            if current_day != Some(day) {
                writeln!(f, "\n{}:", day)?;
                writeln!(f, "{light}")?;
                current_day = Some(day);
            }
            if names.is_empty() {
                writeln!(f, "  {:<12} : {}", shift.label(), EMPTY_SLOT)?;
            } else {
                writeln!(f, "  {:<12} : {}", shift.label(), names.join(", "))?;
            }
        }

        writeln!(f, "\n{heavy}")
    }
}

/// Renders the weekly schedule as a table, one block per day.
///
/// # Example
///
/// ```
/// use shift_scheduler::models::Schedule;
/// use shift_scheduler::render::format_schedule;
///
/// let text = format_schedule(&Schedule::new());
/// assert!(text.contains("WEEKLY EMPLOYEE SCHEDULE"));
/// assert!(text.contains("  Morning      : (none)"));
/// ```
pub fn format_schedule(schedule: &Schedule) -> String {
    ScheduleTable(schedule).to_string()
}

struct WarningList<'a>(&'a [StaffingWarning]);

impl fmt::Display for WarningList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Understaffed shifts ({}):", self.0.len())?;
        for warning in self.0 {
            writeln!(
                f,
                "  - {} {}: {} of {} assigned",
                warning.day,
                warning.shift.label(),
                warning.assigned,
                warning.required
            )?;
        }
        Ok(())
    }
}

/// Renders the understaffed slots, or an empty string when there are none.
pub fn format_warnings(warnings: &[StaffingWarning]) -> String {
    if warnings.is_empty() {
        return String::new();
    }
    WarningList(warnings).to_string()
}
