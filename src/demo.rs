//! Built-in sample roster for trying the scheduler without typing input.

use crate::models::ShiftType::{Afternoon, Evening, Morning};
use crate::models::{Day, EmployeePreferences, Roster, ShiftType};

const SAMPLE: [(&str, [ShiftType; Day::COUNT], [ShiftType; ShiftType::COUNT]); 10] = [
    ("Alice", [Morning; 7], [Morning, Afternoon, Evening]),
    ("Bob", [Afternoon; 7], [Afternoon, Morning, Evening]),
    ("Carol", [Evening; 7], [Evening, Afternoon, Morning]),
    (
        "Dave",
        [
            Morning, Afternoon, Evening, Morning, Afternoon, Evening, Morning,
        ],
        [Morning, Afternoon, Evening],
    ),
    (
        "Eve",
        [
            Afternoon, Evening, Morning, Afternoon, Evening, Morning, Afternoon,
        ],
        [Afternoon, Evening, Morning],
    ),
    (
        "Frank",
        [
            Morning, Morning, Afternoon, Afternoon, Evening, Evening, Morning,
        ],
        [Morning, Afternoon, Evening],
    ),
    (
        "Grace",
        [
            Evening, Morning, Afternoon, Evening, Morning, Afternoon, Afternoon,
        ],
        [Evening, Morning, Afternoon],
    ),
    (
        "Henry",
        [
            Afternoon, Evening, Morning, Afternoon, Evening, Morning, Evening,
        ],
        [Afternoon, Evening, Morning],
    ),
    (
        "Ivy",
        [
            Morning, Afternoon, Evening, Morning, Afternoon, Evening, Morning,
        ],
        [Morning, Afternoon, Evening],
    ),
    (
        "Jack",
        [
            Evening, Morning, Afternoon, Evening, Morning, Afternoon, Evening,
        ],
        [Evening, Morning, Afternoon],
    ),
];

/// Ten employees with daily preferences and priority rankings.
pub fn sample_roster() -> Roster {
    let employees = SAMPLE
        .into_iter()
        .map(|(name, daily, priority)| {
            EmployeePreferences::new(name, daily).with_priority(priority)
        })
        .collect();
    Roster::from_validated(employees)
}
