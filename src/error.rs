//! Error types for the shift scheduler.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the layers around the schedule builder can report.
//! The builder itself never fails: an infeasible week is reported through
//! staffing warnings, not errors.

use thiserror::Error;

/// The main error type for the shift scheduler.
///
/// # Example
///
/// ```
/// use shift_scheduler::error::SchedulerError;
///
/// let error = SchedulerError::UnknownShift {
///     value: "night".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Unknown shift 'night' (expected morning, afternoon or evening)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration or roster file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value is outside its allowed range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// An employee entry was rejected while building a roster.
    #[error("Invalid employee '{name}': {message}")]
    InvalidEmployee {
        /// The employee name as given.
        name: String,
        /// Why the entry was rejected.
        message: String,
    },

    /// A shift name did not match any shift type.
    #[error("Unknown shift '{value}' (expected morning, afternoon or evening)")]
    UnknownShift {
        /// The text that failed to parse.
        value: String,
    },

    /// The user asked to exit, or input ended before the roster was complete.
    #[error("Cancelled by user")]
    Cancelled,

    /// Reading from or writing to the console failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl SchedulerError {
    /// Returns true if this error is a user-requested cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SchedulerError::Cancelled)
    }
}

/// A type alias for Results that return SchedulerError.
pub type SchedulerResult<T> = Result<T, SchedulerError>;
