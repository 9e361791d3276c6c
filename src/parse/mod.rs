//! Parsers for the two loosely-structured text formats the system consumes:
//! attendance cell text and duty-list announcement messages.

pub mod duty_list;
pub mod status;

pub use duty_list::{DUTY_LIST_MARKER, parse_duty_list};
pub use status::{combine, kind_in_fragment, parse};
