use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use tracing::warn;

use crate::model::duty::{DutyInstructor, DutySchedule};

/// Marker identifying a duty-list announcement, matched case-insensitively.
pub const DUTY_LIST_MARKER: &str = "/DI LIST";

/// One schedule line: a `DD/MM` or `DD/MM/YYYY` date, a separator, a rank
/// token, then the instructor's name up to the end of the line. Example:
/// `29/04/2025: ME3 Edmund Cheong`.
static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2}/\d{1,2}(?:/\d{4})?)[:\s]+(\w+)\s+([^\n]+)").expect("valid regex")
});

/// Parses a duty-list announcement into a schedule.
///
/// Lines with unparseable dates are skipped with a warning rather than
/// failing the whole message; duplicate dates keep the last entry parsed.
/// Dates without a year take the year of `today` as written, with no
/// wraparound (unlike `TILL` clauses, duty lists are posted with the year
/// they cover).
pub fn parse_duty_list(text: &str, today: NaiveDate) -> DutySchedule {
    let mut schedule = DutySchedule::new();

    for captures in ENTRY_RE.captures_iter(text) {
        let date_token = &captures[1];
        let Some(duty_date) = parse_duty_date(date_token, today) else {
            warn!(token = date_token, "skipping duty entry with bad date");
            continue;
        };

        schedule.insert(DutyInstructor {
            name: captures[3].trim().to_string(),
            rank: captures[2].to_string(),
            duty_date,
        });
    }

    schedule
}

fn parse_duty_date(token: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = token.split('/').collect();
    let (day, month, year) = match parts.as_slice() {
        [day, month] => (
            day.parse().ok()?,
            month.parse().ok()?,
            today.year(),
        ),
        [day, month, year] => (
            day.parse().ok()?,
            month.parse().ok()?,
            year.parse().ok()?,
        ),
        _ => return None,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 28).unwrap()
    }

    #[test]
    fn parses_dated_entries_with_and_without_year() {
        let message = "/DI LIST\n29/04/2025: ME3 Edmund Cheong\n30/04 LTA Tan Wei Ming";
        let schedule = parse_duty_list(message, today());

        assert_eq!(schedule.len(), 2);

        let first = schedule
            .current(NaiveDate::from_ymd_opt(2025, 4, 29).unwrap())
            .unwrap();
        assert_eq!(first.rank, "ME3");
        assert_eq!(first.name, "Edmund Cheong");

        let second = schedule
            .current(NaiveDate::from_ymd_opt(2025, 4, 30).unwrap())
            .unwrap();
        assert_eq!(second.rank, "LTA");
        assert_eq!(second.name, "Tan Wei Ming");
    }

    #[test]
    fn bad_dates_skip_the_entry_only() {
        let message = "/DI LIST\n31/02/2025: ME3 Nobody\n01/05/2025: CPT Lim";
        let schedule = parse_duty_list(message, today());

        assert_eq!(schedule.len(), 1);
        assert!(
            schedule
                .current(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap())
                .is_some()
        );
    }

    #[test]
    fn duplicate_dates_keep_the_last_entry() {
        let message = "/DI LIST\n01/05/2025: CPT Lim\n01/05/2025: MAJ Ong";
        let schedule = parse_duty_list(message, today());

        assert_eq!(schedule.len(), 1);
        let entry = schedule
            .current(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap())
            .unwrap();
        assert_eq!(entry.rank, "MAJ");
        assert_eq!(entry.name, "Ong");
    }

    #[test]
    fn message_without_entries_yields_an_empty_schedule() {
        assert!(parse_duty_list("/DI LIST\nto be confirmed", today()).is_empty());
    }
}
