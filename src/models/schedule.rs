//! The weekly schedule container.
//!
//! A [`Schedule`] is a fixed 7 × 3 grid of name lists indexed by
//! `(Day, ShiftType)`. Iteration always runs Monday to Sunday and, within a
//! day, morning, afternoon, evening.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::{Day, ShiftType};

/// Employees assigned to each shift of each day of the week.
///
/// Names within a slot are kept in assignment order. Only the scheduling
/// module can mutate a schedule; callers receive it read-only.
///
/// # Example
///
/// ```
/// use shift_scheduler::models::{Day, Schedule, ShiftType};
///
/// let schedule = Schedule::new();
/// assert!(schedule.slot(Day::Monday, ShiftType::Morning).is_empty());
/// assert_eq!(schedule.iter().count(), 21);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    slots: [[Vec<String>; ShiftType::COUNT]; Day::COUNT],
}

impl Schedule {
    /// Creates a schedule with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Names assigned to `shift` on `day`, in assignment order.
    pub fn slot(&self, day: Day, shift: ShiftType) -> &[String] {
        &self.slots[day.index()][shift.index()]
    }

    /// Number of employees assigned to `shift` on `day`.
    pub fn count(&self, day: Day, shift: ShiftType) -> usize {
        self.slot(day, shift).len()
    }

    pub(crate) fn push(&mut self, day: Day, shift: ShiftType, name: &str) {
        self.slots[day.index()][shift.index()].push(name.to_string());
    }

    /// Iterates over every slot in week order.
    pub fn iter(&self) -> impl Iterator<Item = (Day, ShiftType, &[String])> + '_ {
        Day::ALL.into_iter().flat_map(move |day| {
            ShiftType::ALL
                .into_iter()
                .map(move |shift| (day, shift, self.slot(day, shift)))
        })
    }

    /// The shift `name` works on `day`, if any.
    pub fn shift_of(&self, name: &str, day: Day) -> Option<ShiftType> {
        ShiftType::ALL
            .into_iter()
            .find(|shift| self.slot(day, *shift).iter().any(|n| n == name))
    }

    /// Number of days on which `name` works at least one shift.
    pub fn days_worked(&self, name: &str) -> usize {
        Day::ALL
            .into_iter()
            .filter(|day| self.shift_of(name, *day).is_some())
            .count()
    }

    /// Total number of placements across the week.
    pub fn total_assignments(&self) -> usize {
        self.iter().map(|(_, _, names)| names.len()).sum()
    }

    /// Returns true if no one is assigned anywhere.
    pub fn is_empty(&self) -> bool {
        self.total_assignments() == 0
    }
}

struct DaySlots<'a>(&'a [Vec<String>; ShiftType::COUNT]);

impl Serialize for DaySlots<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ShiftType::COUNT))?;
        for shift in ShiftType::ALL {
            map.serialize_entry(&shift, &self.0[shift.index()])?;
        }
        map.end()
    }
}

impl Serialize for Schedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Day::COUNT))?;
        for day in Day::ALL {
            map.serialize_entry(&day, &DaySlots(&self.slots[day.index()]))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut schedule = Schedule::new();
        schedule.push(Day::Monday, ShiftType::Morning, "Alice");
        schedule.push(Day::Monday, ShiftType::Morning, "Dave");
        schedule.push(Day::Monday, ShiftType::Evening, "Carol");
        schedule.push(Day::Sunday, ShiftType::Afternoon, "Alice");
        schedule
    }

    #[test]
    fn test_new_schedule_is_empty() {
        let schedule = Schedule::new();
        assert!(schedule.is_empty());
        assert!(schedule.iter().all(|(_, _, names)| names.is_empty()));
    }

    #[test]
    fn test_slot_keeps_assignment_order() {
        let schedule = sample_schedule();
        assert_eq!(
            schedule.slot(Day::Monday, ShiftType::Morning),
            ["Alice".to_string(), "Dave".to_string()]
        );
        assert_eq!(schedule.count(Day::Monday, ShiftType::Morning), 2);
    }

    #[test]
    fn test_iteration_order_is_day_then_shift() {
        let schedule = Schedule::new();
        let keys: Vec<(Day, ShiftType)> = schedule.iter().map(|(d, s, _)| (d, s)).collect();
        assert_eq!(keys.len(), 21);
        assert_eq!(keys[0], (Day::Monday, ShiftType::Morning));
        assert_eq!(keys[1], (Day::Monday, ShiftType::Afternoon));
        assert_eq!(keys[2], (Day::Monday, ShiftType::Evening));
        assert_eq!(keys[3], (Day::Tuesday, ShiftType::Morning));
        assert_eq!(keys[20], (Day::Sunday, ShiftType::Evening));
    }

    #[test]
    fn test_shift_of_and_days_worked() {
        let schedule = sample_schedule();
        assert_eq!(
            schedule.shift_of("Alice", Day::Sunday),
            Some(ShiftType::Afternoon)
        );
        assert_eq!(schedule.shift_of("Alice", Day::Tuesday), None);
        assert_eq!(schedule.days_worked("Alice"), 2);
        assert_eq!(schedule.days_worked("Carol"), 1);
        assert_eq!(schedule.days_worked("Nobody"), 0);
        assert_eq!(schedule.total_assignments(), 4);
    }

    #[test]
    fn test_serialize_nests_days_and_shifts() {
        let schedule = sample_schedule();
        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(json["monday"]["morning"], serde_json::json!(["Alice", "Dave"]));
        assert_eq!(json["monday"]["afternoon"], serde_json::json!([]));
        assert_eq!(json["sunday"]["afternoon"], serde_json::json!(["Alice"]));
        assert_eq!(json.as_object().unwrap().len(), 7);
    }
}
