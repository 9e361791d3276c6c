//! Typed representations of the parade state domain: attendance statuses,
//! staff members, the duty rotation, and the assembled report.

pub mod duty;
pub mod report;
pub mod staff;
pub mod status;

pub use duty::{DutyInstructor, DutySchedule};
pub use report::Report;
pub use staff::{Period, Person, Roster, TITLE_MARKERS};
pub use status::{LocationDetail, StatusKind, StatusRecord};
