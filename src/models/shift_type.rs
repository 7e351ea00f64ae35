//! Shift type model.
//!
//! This module defines the three recurring shift categories worked every day
//! and the default fallback order used when an employee has no priority
//! ranking.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;

/// A recurring daily shift category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// The morning shift.
    Morning,
    /// The afternoon shift.
    Afternoon,
    /// The evening shift.
    Evening,
}

impl ShiftType {
    /// Number of shift types worked each day.
    pub const COUNT: usize = 3;

    /// All shift types in declared order.
    pub const ALL: [ShiftType; ShiftType::COUNT] =
        [ShiftType::Morning, ShiftType::Afternoon, ShiftType::Evening];

    /// Zero-based position in declared order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            ShiftType::Morning => "morning",
            ShiftType::Afternoon => "afternoon",
            ShiftType::Evening => "evening",
        }
    }

    /// Capitalized name used in printed schedules.
    pub fn label(self) -> &'static str {
        match self {
            ShiftType::Morning => "Morning",
            ShiftType::Afternoon => "Afternoon",
            ShiftType::Evening => "Evening",
        }
    }

    /// Fallback order for an employee without a priority ranking.
    ///
    /// The preferred shift comes first, followed by the remaining shifts in
    /// declared order.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_scheduler::models::ShiftType;
    ///
    /// assert_eq!(
    ///     ShiftType::Afternoon.default_order(),
    ///     [ShiftType::Afternoon, ShiftType::Morning, ShiftType::Evening]
    /// );
    /// ```
    pub fn default_order(self) -> [ShiftType; ShiftType::COUNT] {
        let mut order = [self; ShiftType::COUNT];
        let rest = ShiftType::ALL.into_iter().filter(|s| *s != self);
        for (slot, shift) in order[1..].iter_mut().zip(rest) {
            *slot = shift;
        }
        order
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftType {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(ShiftType::Morning),
            "afternoon" => Ok(ShiftType::Afternoon),
            "evening" => Ok(ShiftType::Evening),
            _ => Err(SchedulerError::UnknownShift {
                value: s.trim().to_string(),
            }),
        }
    }
}

/// Returns true if `order` names every shift type exactly once.
pub fn is_permutation(order: &[ShiftType; ShiftType::COUNT]) -> bool {
    ShiftType::ALL.iter().all(|shift| order.contains(shift))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!("morning".parse::<ShiftType>().unwrap(), ShiftType::Morning);
        assert_eq!(
            "  AFTERNOON ".parse::<ShiftType>().unwrap(),
            ShiftType::Afternoon
        );
        assert_eq!("Evening".parse::<ShiftType>().unwrap(), ShiftType::Evening);
    }

    #[test]
    fn test_parse_unknown_shift_returns_error() {
        match "night".parse::<ShiftType>() {
            Err(SchedulerError::UnknownShift { value }) => assert_eq!(value, "night"),
            other => panic!("Expected UnknownShift error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_order_puts_preferred_first() {
        assert_eq!(
            ShiftType::Morning.default_order(),
            [ShiftType::Morning, ShiftType::Afternoon, ShiftType::Evening]
        );
        assert_eq!(
            ShiftType::Evening.default_order(),
            [ShiftType::Evening, ShiftType::Morning, ShiftType::Afternoon]
        );
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[
            ShiftType::Evening,
            ShiftType::Morning,
            ShiftType::Afternoon
        ]));
        assert!(!is_permutation(&[
            ShiftType::Evening,
            ShiftType::Evening,
            ShiftType::Afternoon
        ]));
    }

    #[test]
    fn test_shift_type_serialization() {
        assert_eq!(
            serde_json::to_string(&ShiftType::Afternoon).unwrap(),
            "\"afternoon\""
        );
        let shift: ShiftType = serde_yaml::from_str("evening").unwrap();
        assert_eq!(shift, ShiftType::Evening);
    }

    #[test]
    fn test_label_is_capitalized() {
        let labels: Vec<&str> = ShiftType::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Morning", "Afternoon", "Evening"]);
    }
}
