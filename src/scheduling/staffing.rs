//! Staffing checks on a finished schedule.

use crate::models::{Schedule, StaffingWarning};

/// Lists every slot of `schedule` holding fewer than `minimum` employees,
/// in week order.
///
/// # Example
///
/// ```
/// use shift_scheduler::models::Schedule;
/// use shift_scheduler::scheduling::staffing_warnings;
///
/// let warnings = staffing_warnings(&Schedule::new(), 2);
/// assert_eq!(warnings.len(), 21);
/// assert!(warnings.iter().all(|w| w.assigned == 0 && w.required == 2));
/// ```
pub fn staffing_warnings(schedule: &Schedule, minimum: usize) -> Vec<StaffingWarning> {
    schedule
        .iter()
        .filter(|(_, _, names)| names.len() < minimum)
        .map(|(day, shift, names)| StaffingWarning {
            day,
            shift,
            assigned: names.len(),
            required: minimum,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, ShiftType};

    #[test]
    fn test_zero_minimum_never_warns() {
        assert!(staffing_warnings(&Schedule::new(), 0).is_empty());
    }

    #[test]
    fn test_only_short_slots_are_reported() {
        let mut schedule = Schedule::new();
        for day in Day::ALL {
            for shift in ShiftType::ALL {
                schedule.push(day, shift, "Alice");
                schedule.push(day, shift, "Bob");
            }
        }
        assert!(staffing_warnings(&schedule, 2).is_empty());

        let warnings = staffing_warnings(&schedule, 3);
        assert_eq!(warnings.len(), 21);
        assert_eq!(warnings[0].day, Day::Monday);
        assert_eq!(warnings[0].shift, ShiftType::Morning);
        assert_eq!(warnings[0].shortfall(), 1);
    }
}
