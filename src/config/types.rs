//! Configuration types for the shift scheduler.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from `scheduler.yaml`.

use serde::{Deserialize, Serialize};

use crate::error::{SchedulerError, SchedulerResult};
use crate::models::Day;

/// Default minimum number of employees per shift.
pub const DEFAULT_MIN_EMPLOYEES_PER_SHIFT: usize = 2;

/// Default maximum number of days one employee works per week.
pub const DEFAULT_MAX_DAYS_PER_EMPLOYEE: usize = 5;

/// Default number of employees a slot accepts through preferred placement.
pub const DEFAULT_PREFERRED_SHIFT_CAP: usize = 3;

/// Default number of preference rounds before backfill.
pub const DEFAULT_ASSIGNMENT_PASSES: usize = 3;

/// Tunable limits for the schedule builder.
///
/// Any field missing from the YAML file takes its default.
///
/// # Example
///
/// ```
/// use shift_scheduler::config::SchedulerConfig;
///
/// let config: SchedulerConfig = serde_yaml::from_str("max_days_per_employee: 4").unwrap();
/// assert_eq!(config.max_days_per_employee, 4);
/// assert_eq!(config.min_employees_per_shift, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulerConfig {
    /// Backfill target for every `(day, shift)`.
    pub min_employees_per_shift: usize,
    /// Weekly cap on days worked per employee.
    pub max_days_per_employee: usize,
    /// Slot capacity checked before a preferred placement.
    pub preferred_shift_cap: usize,
    /// Number of preference rounds.
    pub assignment_passes: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            min_employees_per_shift: DEFAULT_MIN_EMPLOYEES_PER_SHIFT,
            max_days_per_employee: DEFAULT_MAX_DAYS_PER_EMPLOYEE,
            preferred_shift_cap: DEFAULT_PREFERRED_SHIFT_CAP,
            assignment_passes: DEFAULT_ASSIGNMENT_PASSES,
        }
    }
}

impl SchedulerConfig {
    /// Checks every field against its allowed range.
    pub fn validate(&self) -> SchedulerResult<()> {
        if self.max_days_per_employee == 0 || self.max_days_per_employee > Day::COUNT {
            return Err(SchedulerError::InvalidConfig {
                field: "max_days_per_employee".to_string(),
                message: format!("must be between 1 and {}", Day::COUNT),
            });
        }
        if self.preferred_shift_cap == 0 {
            return Err(SchedulerError::InvalidConfig {
                field: "preferred_shift_cap".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.assignment_passes == 0 {
            return Err(SchedulerError::InvalidConfig {
                field: "assignment_passes".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SchedulerConfig::default();
        assert_eq!(config.min_employees_per_shift, 2);
        assert_eq!(config.max_days_per_employee, 5);
        assert_eq!(config.preferred_shift_cap, 3);
        assert_eq!(config.assignment_passes, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config: SchedulerConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, SchedulerConfig::default());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result: Result<SchedulerConfig, _> = serde_yaml::from_str("max_days: 4");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_week_overflow() {
        let config = SchedulerConfig {
            max_days_per_employee: 8,
            ..SchedulerConfig::default()
        };
        match config.validate() {
            Err(SchedulerError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "max_days_per_employee")
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_zero_cap_and_passes() {
        let zero_cap = SchedulerConfig {
            preferred_shift_cap: 0,
            ..SchedulerConfig::default()
        };
        assert!(zero_cap.validate().is_err());

        let zero_passes = SchedulerConfig {
            assignment_passes: 0,
            ..SchedulerConfig::default()
        };
        assert!(zero_passes.validate().is_err());
    }

    #[test]
    fn test_zero_minimum_is_allowed() {
        let config = SchedulerConfig {
            min_employees_per_shift: 0,
            ..SchedulerConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
