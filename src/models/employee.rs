//! Employee preferences and the roster of employees to schedule.
//!
//! A [`Roster`] keeps employees in insertion order so that a seeded run over
//! the same roster always visits employees in the same order before
//! shuffling.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{SchedulerError, SchedulerResult};

use super::shift_type::is_permutation;
use super::{Day, ShiftType};

/// One employee's requested shifts for the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePreferences {
    /// Unique employee name.
    pub name: String,
    /// Preferred shift for each day, Monday first.
    pub daily: [ShiftType; Day::COUNT],
    /// Optional fallback ranking, most preferred first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<[ShiftType; ShiftType::COUNT]>,
}

impl EmployeePreferences {
    /// Creates preferences without a priority ranking.
    pub fn new(name: impl Into<String>, daily: [ShiftType; Day::COUNT]) -> Self {
        Self {
            name: name.into(),
            daily,
            priority: None,
        }
    }

    /// Sets the priority ranking.
    pub fn with_priority(mut self, priority: [ShiftType; ShiftType::COUNT]) -> Self {
        self.priority = Some(priority);
        self
    }

    /// The preferred shift on `day`.
    pub fn preferred(&self, day: Day) -> ShiftType {
        self.daily[day.index()]
    }

    /// The order in which shifts are tried when `preferred` is full.
    ///
    /// Uses the priority ranking when present, otherwise
    /// [`ShiftType::default_order`].
    pub fn fallback_order(&self, preferred: ShiftType) -> [ShiftType; ShiftType::COUNT] {
        self.priority.unwrap_or_else(|| preferred.default_order())
    }

    fn validate(&self) -> SchedulerResult<()> {
        if self.name.trim().is_empty() {
            return Err(SchedulerError::InvalidEmployee {
                name: self.name.clone(),
                message: "name must not be empty".to_string(),
            });
        }
        if let Some(priority) = &self.priority {
            if !is_permutation(priority) {
                return Err(SchedulerError::InvalidEmployee {
                    name: self.name.clone(),
                    message: "priority order must rank each shift exactly once".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// The ordered set of employees to schedule.
///
/// # Example
///
/// ```
/// use shift_scheduler::models::{EmployeePreferences, Roster, ShiftType};
///
/// let mut roster = Roster::new();
/// roster
///     .add(EmployeePreferences::new("Alice", [ShiftType::Morning; 7]))
///     .unwrap();
/// assert_eq!(roster.len(), 1);
/// assert!(roster.add(EmployeePreferences::new("Alice", [ShiftType::Evening; 7])).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RosterFile", into = "RosterFile")]
pub struct Roster {
    employees: Vec<EmployeePreferences>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a list of employees already known to be valid and uniquely
    /// named, such as the built-in sample data.
    pub(crate) fn from_validated(employees: Vec<EmployeePreferences>) -> Self {
        debug_assert!(employees.iter().all(|e| e.validate().is_ok()));
        debug_assert!(
            employees
                .iter()
                .enumerate()
                .all(|(i, e)| employees[..i].iter().all(|other| other.name != e.name))
        );
        Self { employees }
    }

    /// Adds an employee, rejecting empty or duplicate names and invalid
    /// priority orders.
    pub fn add(&mut self, employee: EmployeePreferences) -> SchedulerResult<()> {
        employee.validate()?;
        if self.contains(&employee.name) {
            return Err(SchedulerError::InvalidEmployee {
                name: employee.name,
                message: "duplicate name".to_string(),
            });
        }
        self.employees.push(employee);
        Ok(())
    }

    /// Builds a roster from a preference mapping and an optional priority
    /// mapping.
    ///
    /// Every key of `priority_orders` must name an employee in
    /// `preferences`. Employees missing from `priority_orders` use the
    /// default fallback order.
    pub fn from_maps<I>(
        preferences: I,
        priority_orders: Option<&HashMap<String, [ShiftType; ShiftType::COUNT]>>,
    ) -> SchedulerResult<Self>
    where
        I: IntoIterator<Item = (String, [ShiftType; Day::COUNT])>,
    {
        let mut roster = Roster::new();
        for (name, daily) in preferences {
            let priority = priority_orders.and_then(|orders| orders.get(&name).copied());
            roster.add(EmployeePreferences {
                name,
                daily,
                priority,
            })?;
        }

        if let Some(orders) = priority_orders {
            if let Some(unknown) = orders.keys().find(|name| !roster.contains(name)) {
                return Err(SchedulerError::InvalidEmployee {
                    name: unknown.clone(),
                    message: "priority order given for an employee without preferences"
                        .to_string(),
                });
            }
        }

        Ok(roster)
    }

    /// Returns true if an employee called `name` is on the roster.
    pub fn contains(&self, name: &str) -> bool {
        self.employees.iter().any(|e| e.name == name)
    }

    /// Looks up an employee by name.
    pub fn get(&self, name: &str) -> Option<&EmployeePreferences> {
        self.employees.iter().find(|e| e.name == name)
    }

    /// Employees in insertion order.
    pub fn employees(&self) -> &[EmployeePreferences] {
        &self.employees
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the roster has no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

/// On-disk shape of a roster file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RosterFile {
    #[serde(default)]
    employees: Vec<EmployeePreferences>,
}

impl TryFrom<RosterFile> for Roster {
    type Error = SchedulerError;

    fn try_from(file: RosterFile) -> Result<Self, Self::Error> {
        let mut roster = Roster::new();
        for employee in file.employees {
            roster.add(employee)?;
        }
        Ok(roster)
    }
}

impl From<Roster> for RosterFile {
    fn from(roster: Roster) -> Self {
        Self {
            employees: roster.employees,
        }
    }
}
