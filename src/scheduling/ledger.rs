//! Bookkeeping shared by the preference rounds and the backfill pass.
//!
//! The ledger owns the schedule under construction together with the two
//! indexes the caps are checked against: days worked per employee and the
//! set of employees already placed on each day.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::models::{Assignment, AssignmentSource, Day, Schedule, ShiftType};

#[derive(Debug)]
pub(crate) struct AssignmentLedger<'a> {
    max_days_per_employee: usize,
    schedule: Schedule,
    days_worked: HashMap<&'a str, usize>,
    assigned_today: [HashSet<&'a str>; Day::COUNT],
    assignments: Vec<Assignment>,
}

impl<'a> AssignmentLedger<'a> {
    pub(crate) fn new(max_days_per_employee: usize) -> Self {
        Self {
            max_days_per_employee,
            schedule: Schedule::new(),
            days_worked: HashMap::new(),
            assigned_today: Default::default(),
            assignments: Vec::new(),
        }
    }

    pub(crate) fn days_worked(&self, name: &str) -> usize {
        self.days_worked.get(name).copied().unwrap_or(0)
    }

    pub(crate) fn under_weekly_cap(&self, name: &str) -> bool {
        self.days_worked(name) < self.max_days_per_employee
    }

    pub(crate) fn works_on(&self, name: &str, day: Day) -> bool {
        self.assigned_today[day.index()].contains(name)
    }

    /// True if `name` is free on `day` and still under the weekly cap.
    pub(crate) fn can_assign(&self, name: &str, day: Day) -> bool {
        !self.works_on(name, day) && self.under_weekly_cap(name)
    }

    pub(crate) fn count(&self, day: Day, shift: ShiftType) -> usize {
        self.schedule.count(day, shift)
    }

    pub(crate) fn placements(&self) -> usize {
        self.assignments.len()
    }

    /// Records a placement. Callers check [`Self::can_assign`] first.
    pub(crate) fn assign(
        &mut self,
        name: &'a str,
        day: Day,
        shift: ShiftType,
        source: AssignmentSource,
        round: Option<usize>,
    ) {
        debug_assert!(self.can_assign(name, day));

        self.schedule.push(day, shift, name);
        self.assigned_today[day.index()].insert(name);
        *self.days_worked.entry(name).or_insert(0) += 1;
        self.assignments.push(Assignment {
            employee: name.to_string(),
            day,
            shift,
            source,
            round,
        });

        debug!(employee = name, %day, %shift, ?source, ?round, "Placed employee");
    }

    pub(crate) fn finish(self) -> (Schedule, Vec<Assignment>) {
        (self.schedule, self.assignments)
    }
}
