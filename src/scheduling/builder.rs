//! The weekly schedule builder.
//!
//! This module implements the random-greedy heuristic: a shuffle of the
//! roster, a fixed number of preference rounds, then a staffing backfill.
//! It is a bounded best-effort pass with no backtracking.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::SchedulerConfig;
use crate::models::{AssignmentSource, Day, EmployeePreferences, Roster, ScheduleOutcome};

use super::backfill::backfill;
use super::ledger::AssignmentLedger;
use super::staffing::staffing_warnings;

/// Builds a week of shift assignments from employee preferences.
///
/// The random source is injected so callers can choose between
/// reproducible (seeded) and non-reproducible runs.
///
/// # Example
///
/// ```
/// use shift_scheduler::config::SchedulerConfig;
/// use shift_scheduler::models::{Day, EmployeePreferences, Roster, ShiftType};
/// use shift_scheduler::scheduling::ScheduleBuilder;
///
/// let mut roster = Roster::new();
/// roster.add(EmployeePreferences::new("Alice", [ShiftType::Morning; 7])).unwrap();
///
/// let builder = ScheduleBuilder::new(SchedulerConfig::default());
/// let outcome = builder.build_seeded(&roster, 42);
///
/// assert_eq!(outcome.schedule.days_worked("Alice"), 5);
/// assert_eq!(outcome.schedule.shift_of("Alice", Day::Monday), Some(ShiftType::Morning));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleBuilder {
    config: SchedulerConfig,
}

impl ScheduleBuilder {
    /// Creates a builder with the given limits.
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Builds a schedule using `seed` for every random choice.
    ///
    /// Two calls with the same roster (in the same order) and the same seed
    /// produce the same schedule.
    pub fn build_seeded(&self, roster: &Roster, seed: u64) -> ScheduleOutcome {
        self.build(roster, &mut StdRng::seed_from_u64(seed))
    }

    /// Builds a schedule using thread-local OS entropy.
    pub fn build_with_entropy(&self, roster: &Roster) -> ScheduleOutcome {
        self.build(roster, &mut rand::rng())
    }

    /// Builds a schedule, drawing tie-breaks from `rng`.
    pub fn build<R: Rng + ?Sized>(&self, roster: &Roster, rng: &mut R) -> ScheduleOutcome {
        let start_time = Instant::now();
        let schedule_id = Uuid::new_v4();
        info!(
            schedule_id = %schedule_id,
            employees = roster.len(),
            "Building weekly schedule"
        );

        let mut employees: Vec<&EmployeePreferences> = roster.employees().iter().collect();
        employees.shuffle(rng);

        let mut ledger = AssignmentLedger::new(self.config.max_days_per_employee);
        self.run_preference_rounds(&employees, &mut ledger);
        backfill(
            &employees,
            &mut ledger,
            self.config.min_employees_per_shift,
            rng,
        );

        let days_worked: BTreeMap<String, usize> = roster
            .employees()
            .iter()
            .map(|e| (e.name.clone(), ledger.days_worked(&e.name)))
            .collect();
        let (schedule, assignments) = ledger.finish();

        let warnings = staffing_warnings(&schedule, self.config.min_employees_per_shift);
        for warning in &warnings {
            warn!(
                schedule_id = %schedule_id,
                day = %warning.day,
                shift = %warning.shift,
                assigned = warning.assigned,
                required = warning.required,
                "Shift below staffing minimum"
            );
        }

        let duration = start_time.elapsed();
        info!(
            schedule_id = %schedule_id,
            assignments = assignments.len(),
            understaffed_shifts = warnings.len(),
            duration_us = duration.as_micros(),
            "Schedule built"
        );

        ScheduleOutcome {
            schedule_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            schedule,
            assignments,
            days_worked,
            warnings,
            duration_us: duration.as_micros() as u64,
        }
    }

    fn run_preference_rounds<'a>(
        &self,
        employees: &[&'a EmployeePreferences],
        ledger: &mut AssignmentLedger<'a>,
    ) {
        for round in 1..=self.config.assignment_passes {
            let before = ledger.placements();
            for (index, employee) in employees.iter().copied().enumerate() {
                if ledger.under_weekly_cap(&employee.name) {
                    self.place_once(index, employee, round, ledger);
                }
            }
            debug!(
                round,
                placements = ledger.placements() - before,
                "Preference round complete"
            );
        }
    }

    /// Places `employee` on the first free day of the week, scanning from
    /// the day matching their position in the shuffled list. Returns false
    /// if every day is taken.
    fn place_once<'a>(
        &self,
        index: usize,
        employee: &'a EmployeePreferences,
        round: usize,
        ledger: &mut AssignmentLedger<'a>,
    ) -> bool {
        let name = employee.name.as_str();
        for offset in 0..Day::COUNT {
            let day = Day::from_index_wrapping(index + offset);
            if !ledger.can_assign(name, day) {
                continue;
            }

            let preferred = employee.preferred(day);
            if ledger.count(day, preferred) < self.config.preferred_shift_cap {
                ledger.assign(
                    name,
                    day,
                    preferred,
                    AssignmentSource::Preferred,
                    Some(round),
                );
                return true;
            }

            // Day and weekly caps already hold, so the first other shift wins;
            // its occupancy is not checked.
            let fallback = employee
                .fallback_order(preferred)
                .into_iter()
                .find(|shift| *shift != preferred);
            if let Some(shift) = fallback {
                ledger.assign(name, day, shift, AssignmentSource::Fallback, Some(round));
                return true;
            }
        }
        false
    }
}
