//! Result models for a scheduling run.
//!
//! This module contains [`ScheduleOutcome`], which wraps the finished
//! [`Schedule`] together with the placement log, per-employee workload and
//! staffing warnings for slots left below the minimum.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::{Day, Schedule, ShiftType};

/// How an employee came to be placed in a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentSource {
    /// The employee's preferred shift for the day.
    Preferred,
    /// Another shift from the employee's priority or default order.
    Fallback,
    /// The staffing backfill pass.
    Backfill,
}

/// A single placement made while building a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    /// The employee placed.
    pub employee: String,
    /// The day of the placement.
    pub day: Day,
    /// The shift the employee was placed in.
    pub shift: ShiftType,
    /// Which stage of the builder made the placement.
    pub source: AssignmentSource,
    /// 1-based preference round, or `None` for backfill.
    pub round: Option<usize>,
}

/// A slot that finished below the staffing minimum.
///
/// # Example
///
/// ```
/// use shift_scheduler::models::{Day, ShiftType, StaffingWarning};
///
/// let warning = StaffingWarning {
///     day: Day::Monday,
///     shift: ShiftType::Evening,
///     assigned: 1,
///     required: 2,
/// };
/// assert_eq!(warning.shortfall(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffingWarning {
    /// The understaffed day.
    pub day: Day,
    /// The understaffed shift.
    pub shift: ShiftType,
    /// Employees actually assigned.
    pub assigned: usize,
    /// The configured minimum.
    pub required: usize,
}

impl StaffingWarning {
    /// Number of employees still missing.
    pub fn shortfall(&self) -> usize {
        self.required.saturating_sub(self.assigned)
    }
}

/// The complete result of one scheduling run.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleOutcome {
    /// Unique identifier for this run.
    pub schedule_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the scheduler that produced the schedule.
    pub engine_version: String,
    /// The finished schedule.
    pub schedule: Schedule,
    /// Every placement in the order it was made.
    pub assignments: Vec<Assignment>,
    /// Days worked per employee.
    pub days_worked: BTreeMap<String, usize>,
    /// Slots left below the staffing minimum.
    pub warnings: Vec<StaffingWarning>,
    /// Time spent building, in microseconds.
    pub duration_us: u64,
}

impl ScheduleOutcome {
    /// Returns true if every slot reached the staffing minimum.
    pub fn is_fully_staffed(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Placements made by `source`.
    pub fn assignments_from(
        &self,
        source: AssignmentSource,
    ) -> impl Iterator<Item = &Assignment> + '_ {
        self.assignments.iter().filter(move |a| a.source == source)
    }
}
