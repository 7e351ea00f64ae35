//! Day of the scheduling week.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// One of the seven days of the scheduling week, Monday first.
///
/// # Example
///
/// ```
/// use shift_scheduler::models::Day;
/// use chrono::Weekday;
///
/// assert_eq!(Day::Wednesday.index(), 2);
/// assert_eq!(Day::from(Weekday::Sun), Day::Sunday);
/// assert_eq!(Day::Friday.to_string(), "Friday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Day {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl Day {
    /// Number of days in the scheduling week.
    pub const COUNT: usize = 7;

    /// All days in week order.
    pub const ALL: [Day; Day::COUNT] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Zero-based position in the week (Monday = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the day at `index`, wrapping past Sunday back to Monday.
    pub fn from_index_wrapping(index: usize) -> Day {
        Day::ALL[index % Day::COUNT]
    }

    /// Full English name of the day.
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        Day::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl From<Day> for Weekday {
    fn from(day: Day) -> Self {
        match day {
            Day::Monday => Weekday::Mon,
            Day::Tuesday => Weekday::Tue,
            Day::Wednesday => Weekday::Wed,
            Day::Thursday => Weekday::Thu,
            Day::Friday => Weekday::Fri,
            Day::Saturday => Weekday::Sat,
            Day::Sunday => Weekday::Sun,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_days_are_in_week_order() {
        for (i, day) in Day::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
        }
        assert!(Day::Monday < Day::Sunday);
    }

    #[test]
    fn test_from_index_wrapping() {
        assert_eq!(Day::from_index_wrapping(0), Day::Monday);
        assert_eq!(Day::from_index_wrapping(6), Day::Sunday);
        assert_eq!(Day::from_index_wrapping(7), Day::Monday);
        assert_eq!(Day::from_index_wrapping(15), Day::Tuesday);
    }

    #[test]
    fn test_weekday_conversion_round_trips_every_day() {
        for day in Day::ALL {
            let weekday: Weekday = day.into();
            assert_eq!(Day::from(weekday), day);
        }
    }

    #[test]
    fn test_day_from_calendar_date() {
        use chrono::{Datelike, NaiveDate};

        // 2026-01-15 is a Thursday
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert_eq!(Day::from(date.weekday()), Day::Thursday);
    }

    #[test]
    fn test_day_serialization() {
        assert_eq!(serde_json::to_string(&Day::Saturday).unwrap(), "\"saturday\"");
        let day: Day = serde_json::from_str("\"monday\"").unwrap();
        assert_eq!(day, Day::Monday);
    }
}
