//! Scheduling logic for the shift scheduler.
//!
//! This module contains the [`ScheduleBuilder`], which runs the preference
//! rounds and the staffing backfill, and the staffing check applied to its
//! result.

mod backfill;
mod builder;
mod ledger;
mod staffing;

pub use builder::ScheduleBuilder;
pub use staffing::staffing_warnings;
