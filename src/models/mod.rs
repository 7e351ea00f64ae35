//! Core data models for the shift scheduler.
//!
//! This module contains all the domain models used throughout the scheduler.

mod day;
mod employee;
mod outcome;
mod schedule;
mod shift_type;

pub use day::Day;
pub use employee::{EmployeePreferences, Roster};
pub use outcome::{Assignment, AssignmentSource, ScheduleOutcome, StaffingWarning};
pub use schedule::Schedule;
pub use shift_type::{ShiftType, is_permutation};
