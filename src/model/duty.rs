use std::collections::BTreeMap;
use std::fmt;
use std::ops::Bound;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The instructor on duty for a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyInstructor {
    pub name: String,
    pub rank: String,
    pub duty_date: NaiveDate,
}

impl fmt::Display for DutyInstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rank, self.name)
    }
}

/// Duty rotation: at most one instructor per date. Inserting a second entry
/// for the same date overwrites the first (last writer wins).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutySchedule {
    entries: BTreeMap<NaiveDate, DutyInstructor>,
}

impl DutySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, instructor: DutyInstructor) {
        self.entries.insert(instructor.duty_date, instructor);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Instructor on duty for exactly the given date.
    pub fn current(&self, date: NaiveDate) -> Option<&DutyInstructor> {
        self.entries.get(&date)
    }

    /// Instructor for the earliest date strictly after the given date.
    pub fn next(&self, date: NaiveDate) -> Option<&DutyInstructor> {
        self.entries
            .range((Bound::Excluded(date), Bound::Unbounded))
            .map(|(_, instructor)| instructor)
            .next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instructor(name: &str, date: NaiveDate) -> DutyInstructor {
        DutyInstructor {
            name: name.into(),
            rank: "ME3".into(),
            duty_date: date,
        }
    }

    fn day(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, day).unwrap()
    }

    #[test]
    fn current_is_an_exact_lookup() {
        let mut schedule = DutySchedule::new();
        schedule.insert(instructor("Cheong", day(10)));

        assert_eq!(schedule.current(day(10)).unwrap().name, "Cheong");
        assert!(schedule.current(day(11)).is_none());
    }

    #[test]
    fn next_picks_the_earliest_strictly_later_date() {
        let mut schedule = DutySchedule::new();
        schedule.insert(instructor("Cheong", day(10)));
        schedule.insert(instructor("Lim", day(14)));
        schedule.insert(instructor("Tan", day(20)));

        assert_eq!(schedule.next(day(10)).unwrap().name, "Lim");
        assert_eq!(schedule.next(day(9)).unwrap().name, "Cheong");
        assert!(schedule.next(day(20)).is_none());
    }

    #[test]
    fn next_on_an_empty_schedule_is_none() {
        assert!(DutySchedule::new().next(day(1)).is_none());
    }

    #[test]
    fn duplicate_dates_keep_the_last_writer() {
        let mut schedule = DutySchedule::new();
        schedule.insert(instructor("Cheong", day(10)));
        schedule.insert(instructor("Lim", day(10)));

        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.current(day(10)).unwrap().name, "Lim");
    }
}
