use chrono::NaiveDate;

use crate::model::duty::DutyInstructor;
use crate::model::staff::{Period, Roster};

/// A fully-assembled parade state, ready to render.
///
/// The AM/PM present counts are computed once from the roster when the value
/// is built and never updated afterwards, so they can never drift out of
/// sync with the roster content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub report_date: NaiveDate,
    pub roster: Roster,
    pub current_duty: Option<DutyInstructor>,
    pub next_duty: Option<DutyInstructor>,
    pub am_present_count: usize,
    pub pm_present_count: usize,
}

impl Report {
    /// Builds a report, computing the half-day present counts from the
    /// roster as supplied.
    pub fn build(
        report_date: NaiveDate,
        roster: Roster,
        current_duty: Option<DutyInstructor>,
        next_duty: Option<DutyInstructor>,
    ) -> Self {
        let am_present_count = roster.count_present(Some(Period::Am));
        let pm_present_count = roster.count_present(Some(Period::Pm));
        Self {
            report_date,
            roster,
            current_duty,
            next_duty,
            am_present_count,
            pm_present_count,
        }
    }
}
