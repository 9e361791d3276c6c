use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Closed set of recognised attendance codes.
///
/// `Unrecognized` is the catch-all for non-empty cell text that matches no
/// known code; the original text is preserved on the owning
/// [`StatusRecord`] rather than discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusKind {
    /// Present for duty.
    Present,
    /// On course.
    Course,
    /// Course preparation exercise.
    CoursePrep,
    /// Overseas leave.
    OverseasLeave,
    /// Off medical leave.
    OffMedicalLeave,
    /// Local leave.
    LocalLeave,
    /// Hospitalisation leave.
    HospitalizationLeave,
    /// Working from home.
    WorkFromHome,
    /// Medical certificate.
    MedicalCert,
    /// Off in lieu.
    OffInLieu,
    /// Day off.
    DayOff,
    /// Annual cohesion exercise.
    CohesionExercise,
    /// Family care leave.
    FamilyCareLeave,
    /// Medical appointment.
    MedicalAppointment,
    /// Regular screening.
    RegularScreening,
    /// Out of bounds / official business.
    OutOfBounds,
    /// Attached out to another unit.
    AttachedOut,
    /// Other, known-but-unclassified.
    Other,
    /// Duty staff off.
    DutyStaff,
    /// Catch-all for unrecognised cell text.
    Unrecognized,
}

impl StatusKind {
    /// Fixed scan order used when a status code is matched as a substring of
    /// a larger cell fragment (the `@` and `TILL` rules). The order is part
    /// of the observable contract: overlapping codes (for example `P` inside
    /// `CPE`) resolve to the first entry listed here, not the longest match.
    pub const SCAN_ORDER: [StatusKind; 20] = [
        StatusKind::Present,
        StatusKind::Course,
        StatusKind::CoursePrep,
        StatusKind::OverseasLeave,
        StatusKind::OffMedicalLeave,
        StatusKind::LocalLeave,
        StatusKind::HospitalizationLeave,
        StatusKind::WorkFromHome,
        StatusKind::MedicalCert,
        StatusKind::OffInLieu,
        StatusKind::DayOff,
        StatusKind::CohesionExercise,
        StatusKind::FamilyCareLeave,
        StatusKind::MedicalAppointment,
        StatusKind::RegularScreening,
        StatusKind::OutOfBounds,
        StatusKind::AttachedOut,
        StatusKind::Other,
        StatusKind::DutyStaff,
        StatusKind::Unrecognized,
    ];

    /// Short code as it appears in attendance cells and rendered reports.
    pub fn code(&self) -> &'static str {
        match self {
            StatusKind::Present => "P",
            StatusKind::Course => "CSE",
            StatusKind::CoursePrep => "CPE",
            StatusKind::OverseasLeave => "OL",
            StatusKind::OffMedicalLeave => "OML",
            StatusKind::LocalLeave => "LL",
            StatusKind::HospitalizationLeave => "HL",
            StatusKind::WorkFromHome => "WFH",
            StatusKind::MedicalCert => "MC",
            StatusKind::OffInLieu => "OIL",
            StatusKind::DayOff => "DO",
            StatusKind::CohesionExercise => "ACE",
            StatusKind::FamilyCareLeave => "FCL",
            StatusKind::MedicalAppointment => "MA",
            StatusKind::RegularScreening => "RS",
            StatusKind::OutOfBounds => "OB",
            StatusKind::AttachedOut => "AO",
            StatusKind::Other => "OTH",
            StatusKind::DutyStaff => "DS",
            StatusKind::Unrecognized => "OTHERS",
        }
    }

    /// Exact match against a short code.
    pub fn from_code(code: &str) -> Option<StatusKind> {
        StatusKind::SCAN_ORDER
            .iter()
            .copied()
            .find(|kind| kind.code() == code)
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Optional location or free detail attached to a status. At least one field
/// is populated whenever the value exists.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocationDetail {
    pub location: Option<String>,
    pub detail: Option<String>,
}

impl LocationDetail {
    /// Builds a location-only detail.
    pub fn at(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            detail: None,
        }
    }
}

impl fmt::Display for LocationDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.location, &self.detail) {
            (Some(location), Some(detail)) => write!(f, "@ {location} ({detail})"),
            (Some(location), None) => write!(f, "@ {location}"),
            (None, Some(detail)) => write!(f, "({detail})"),
            (None, None) => Ok(()),
        }
    }
}

/// One person's status for a day, either whole-day or split into AM and PM
/// halves.
///
/// Invariant: when `split` is false the `am_*`/`pm_*` fields are unset; when
/// true both halves are set and `kind` mirrors `am_kind` so that consumers
/// reading only the single value keep working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub kind: StatusKind,
    /// Inclusive validity end from a `TILL DD/MM` clause.
    pub end_date: Option<NaiveDate>,
    /// Free-form detail; carries the original cell text for unrecognised
    /// statuses.
    pub detail: Option<String>,
    pub location: Option<LocationDetail>,
    pub split: bool,
    pub am_kind: Option<StatusKind>,
    pub am_location: Option<LocationDetail>,
    pub pm_kind: Option<StatusKind>,
    pub pm_location: Option<LocationDetail>,
}

impl StatusRecord {
    /// Whole-day record with the given kind and no auxiliary fields.
    pub fn of(kind: StatusKind) -> Self {
        Self {
            kind,
            end_date: None,
            detail: None,
            location: None,
            split: false,
            am_kind: None,
            am_location: None,
            pm_kind: None,
            pm_location: None,
        }
    }

    /// Whole-day present, the default for blank cells.
    pub fn present() -> Self {
        Self::of(StatusKind::Present)
    }

    /// Formats the status for display in the parade state message.
    pub fn format_status(&self) -> String {
        if !self.split {
            if self.kind == StatusKind::Present {
                let mut result = self.kind.code().to_string();
                if let Some(detail) = &self.detail {
                    result.push(' ');
                    result.push_str(detail);
                }
                return result;
            }

            let mut result = self.kind.code().to_string();
            if let Some(location) = &self.location {
                result.push(' ');
                result.push_str(&location.to_string());
            }
            if let Some(detail) = &self.detail {
                result.push(' ');
                result.push_str(detail);
            }
            if let Some(end_date) = self.end_date {
                result.push_str(&format!(" TILL {}", end_date.format("%d/%m")));
            }
            return result;
        }

        let mut am_part = self.am_kind.unwrap_or(self.kind).code().to_string();
        if let Some(location) = &self.am_location {
            am_part.push(' ');
            am_part.push_str(&location.to_string());
        }

        let mut pm_part = self.pm_kind.unwrap_or(self.kind).code().to_string();
        if let Some(location) = &self.pm_location {
            pm_part.push(' ');
            pm_part.push_str(&location.to_string());
        }

        let mut result = format!("{am_part}(AM), {pm_part}(PM)");
        if let Some(end_date) = self.end_date {
            result.push_str(&format!(" TILL {}", end_date.format("%d/%m")));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_exact_match() {
        for kind in StatusKind::SCAN_ORDER {
            assert_eq!(StatusKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn location_display_covers_all_shapes() {
        let both = LocationDetail {
            location: Some("SGH".into()),
            detail: Some("ward 5".into()),
        };
        assert_eq!(both.to_string(), "@ SGH (ward 5)");
        assert_eq!(LocationDetail::at("SGH").to_string(), "@ SGH");

        let detail_only = LocationDetail {
            location: None,
            detail: Some("review".into()),
        };
        assert_eq!(detail_only.to_string(), "(review)");
        assert_eq!(LocationDetail::default().to_string(), "");
    }

    #[test]
    fn present_formats_with_optional_detail() {
        assert_eq!(StatusRecord::present().format_status(), "P");

        let mut with_detail = StatusRecord::present();
        with_detail.detail = Some("(DS OFF)".into());
        assert_eq!(with_detail.format_status(), "P (DS OFF)");
    }

    #[test]
    fn non_present_formats_location_detail_and_end_date() {
        let mut record = StatusRecord::of(StatusKind::MedicalCert);
        record.location = Some(LocationDetail::at("SGH"));
        record.end_date = NaiveDate::from_ymd_opt(2024, 5, 15);
        assert_eq!(record.format_status(), "MC @ SGH TILL 15/05");
    }

    #[test]
    fn split_formats_both_halves() {
        let mut record = StatusRecord::of(StatusKind::Present);
        record.split = true;
        record.am_kind = Some(StatusKind::Present);
        record.pm_kind = Some(StatusKind::MedicalCert);
        record.pm_location = Some(LocationDetail::at("SGH"));
        assert_eq!(record.format_status(), "P(AM), MC @ SGH(PM)");
    }
}
