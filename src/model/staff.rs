use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::status::{StatusKind, StatusRecord};

/// Appointment markers that make the whole name cell a position title
/// rather than a rank-plus-name pair.
pub const TITLE_MARKERS: [&str; 3] = ["Sch Comd", "OC", "CC"];

/// Half of the day a count or status applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

/// One tracked staff member on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// 1-based position over the sorted active-row list. Stable within a
    /// single report generation only.
    pub sequence_id: u32,
    pub name: String,
    pub rank: Option<String>,
    pub position: Option<String>,
    pub status: StatusRecord,
}

impl Person {
    /// Name as displayed on the report: the position verbatim when it carries
    /// a title marker, otherwise rank-prefixed name.
    pub fn display_name(&self) -> String {
        if let Some(position) = &self.position
            && TITLE_MARKERS.iter().any(|marker| position.contains(marker))
        {
            return position.clone();
        }
        self.to_string()
    }

    /// Formatted roster line body, `<display-name> - <formatted status>`.
    pub fn roster_entry(&self) -> String {
        format!("{} - {}", self.display_name(), self.status.format_status())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rank {
            Some(rank) => write!(f, "{rank} {}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// Ordered collection of staff members; the order is the display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub people: Vec<Person>,
}

impl Roster {
    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Counts present staff for the given period.
    ///
    /// A person participates in the AM or PM count only once their status has
    /// actually diverged by half-day; a whole-day PRESENT person counts only
    /// toward the unsplit (`None`) total.
    pub fn count_present(&self, period: Option<Period>) -> usize {
        self.people
            .iter()
            .filter(|person| {
                let status = &person.status;
                match period {
                    Some(Period::Am) => {
                        status.split && status.am_kind == Some(StatusKind::Present)
                    }
                    Some(Period::Pm) => {
                        status.split && status.pm_kind == Some(StatusKind::Present)
                    }
                    None => !status.split && status.kind == StatusKind::Present,
                }
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::status::StatusRecord;

    fn person(sequence_id: u32, status: StatusRecord) -> Person {
        Person {
            sequence_id,
            name: format!("Person {sequence_id}"),
            rank: None,
            position: None,
            status,
        }
    }

    fn split_status(am: StatusKind, pm: StatusKind) -> StatusRecord {
        let mut status = StatusRecord::of(am);
        status.split = true;
        status.am_kind = Some(am);
        status.pm_kind = Some(pm);
        status
    }

    #[test]
    fn whole_day_present_counts_only_toward_unsplit_total() {
        let roster = Roster {
            people: vec![person(1, StatusRecord::present())],
        };
        assert_eq!(roster.count_present(None), 1);
        assert_eq!(roster.count_present(Some(Period::Am)), 0);
        assert_eq!(roster.count_present(Some(Period::Pm)), 0);
    }

    #[test]
    fn split_statuses_count_per_half_day() {
        let roster = Roster {
            people: vec![
                person(1, split_status(StatusKind::Present, StatusKind::MedicalCert)),
                person(2, split_status(StatusKind::LocalLeave, StatusKind::Present)),
                person(3, StatusRecord::present()),
            ],
        };
        assert_eq!(roster.count_present(Some(Period::Am)), 1);
        assert_eq!(roster.count_present(Some(Period::Pm)), 1);
        assert_eq!(roster.count_present(None), 1);
    }

    #[test]
    fn display_name_prefers_titled_position() {
        let mut member = person(1, StatusRecord::present());
        member.name = "Tan".into();
        member.rank = Some("ME3".into());
        assert_eq!(member.display_name(), "ME3 Tan");

        member.position = Some("OC MECH".into());
        assert_eq!(member.display_name(), "OC MECH");

        // A position without a title marker falls back to rank + name.
        member.position = Some("Storeman".into());
        assert_eq!(member.display_name(), "ME3 Tan");
    }
}
