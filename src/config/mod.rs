//! Configuration loading and management for the shift scheduler.
//!
//! This module loads the scheduler's staffing limits from YAML and rosters
//! from YAML or JSON files.
//!
//! # Example
//!
//! ```no_run
//! use shift_scheduler::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Minimum per shift: {}", loader.config().min_employees_per_shift);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{
    DEFAULT_ASSIGNMENT_PASSES, DEFAULT_MAX_DAYS_PER_EMPLOYEE, DEFAULT_MIN_EMPLOYEES_PER_SHIFT,
    DEFAULT_PREFERRED_SHIFT_CAP, SchedulerConfig,
};
