//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading scheduler
//! configuration and roster files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{SchedulerError, SchedulerResult};
use crate::models::Roster;

use super::types::SchedulerConfig;

/// File name of the scheduler configuration inside a config directory.
pub const CONFIG_FILE_NAME: &str = "scheduler.yaml";

/// Loads and provides access to scheduler configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── scheduler.yaml   # Staffing limits and number of preference rounds
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_scheduler::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Weekly cap: {}", loader.config().max_days_per_employee);
/// # Ok::<(), shift_scheduler::error::SchedulerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SchedulerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `scheduler.yaml` is missing, is not valid YAML,
    /// or holds an out-of-range value.
    pub fn load<P: AsRef<Path>>(path: P) -> SchedulerResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let config = Self::load_yaml::<SchedulerConfig>(&config_path)?;
        config.validate()?;

        debug!(
            path = %config_path.display(),
            min_employees_per_shift = config.min_employees_per_shift,
            max_days_per_employee = config.max_days_per_employee,
            preferred_shift_cap = config.preferred_shift_cap,
            assignment_passes = config.assignment_passes,
            "Loaded scheduler configuration"
        );

        Ok(Self { config })
    }

    /// Loads a roster from a `.json`, `.yaml` or `.yml` file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shift_scheduler::config::ConfigLoader;
    ///
    /// let roster = ConfigLoader::load_roster("./config/demo/roster.yaml")?;
    /// println!("{} employees", roster.len());
    /// # Ok::<(), shift_scheduler::error::SchedulerError>(())
    /// ```
    pub fn load_roster<P: AsRef<Path>>(path: P) -> SchedulerResult<Roster> {
        let path = path.as_ref();
        let is_json = path.extension().is_some_and(|ext| ext == "json");

        let roster = if is_json {
            let content = Self::read(path)?;
            serde_json::from_str::<Roster>(&content).map_err(|e| {
                SchedulerError::ConfigParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                }
            })?
        } else {
            Self::load_yaml::<Roster>(path)?
        };

        debug!(path = %path.display(), employees = roster.len(), "Loaded roster");
        Ok(roster)
    }

    fn read(path: &Path) -> SchedulerResult<String> {
        fs::read_to_string(path).map_err(|_| SchedulerError::ConfigNotFound {
            path: path.display().to_string(),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> SchedulerResult<T> {
        let content = Self::read(path)?;

        serde_yaml::from_str(&content).map_err(|e| SchedulerError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }
}
