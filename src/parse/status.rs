use chrono::{Datelike, NaiveDate};
use tracing::warn;

use crate::model::status::{LocationDetail, StatusKind, StatusRecord};

/// Cell aliases checked before any structural rule, as exact matches on the
/// trimmed cell text. The optional third column is a free-form detail echoed
/// into the rendered report.
const ALIASES: [(&str, StatusKind, Option<&str>); 4] = [
    ("1", StatusKind::Present, None),
    ("DS OFF", StatusKind::OffInLieu, Some("(DS OFF)")),
    ("DO Off", StatusKind::OffInLieu, Some("(DO OFF)")),
    ("OFF", StatusKind::OffInLieu, None),
];

/// Spreadsheet exports stringify empty cells as this literal.
const BLANK_LITERAL: &str = "nan";

const TILL_TOKEN: &str = "TILL";

/// Parses one raw attendance cell into a status record.
///
/// Total over all inputs: anything unrecognised degrades to
/// [`StatusKind::Unrecognized`] with the original text preserved, never an
/// error. `today` anchors the year resolution for `TILL DD/MM` clauses and
/// is threaded explicitly so parsing stays deterministic under test.
pub fn parse(raw: &str, today: NaiveDate) -> StatusRecord {
    let trimmed = raw.trim();

    // Blank cells default to present. Business rule, not an omission.
    if trimmed.is_empty() || trimmed == BLANK_LITERAL {
        return StatusRecord::present();
    }

    for (alias, kind, detail) in ALIASES {
        if trimmed == alias {
            let mut record = StatusRecord::of(kind);
            record.detail = detail.map(str::to_string);
            return record;
        }
    }

    if let Some((kind_part, location_part)) = trimmed.split_once('@') {
        let kind = kind_in_fragment(kind_part.trim()).unwrap_or(StatusKind::Present);
        let mut record = StatusRecord::of(kind);
        record.location = Some(LocationDetail::at(location_part.trim()));
        return record;
    }

    if let Some((kind_part, date_part)) = trimmed.split_once(TILL_TOKEN) {
        let kind = kind_in_fragment(kind_part.trim()).unwrap_or(StatusKind::Present);
        let mut record = StatusRecord::of(kind);
        record.end_date = parse_till_date(date_part.trim(), today);
        return record;
    }

    if let Some(kind) = StatusKind::from_code(trimmed) {
        return StatusRecord::of(kind);
    }

    let mut record = StatusRecord::of(StatusKind::Unrecognized);
    record.detail = Some(trimmed.to_string());
    record
}

/// Finds the first status kind whose short code appears as a substring of
/// the fragment, scanning in [`StatusKind::SCAN_ORDER`].
///
/// Overlapping codes resolve by scan position, not match length: `P` wins
/// inside `CPE` because it is listed first. Known edge case, kept as the
/// documented policy.
pub fn kind_in_fragment(fragment: &str) -> Option<StatusKind> {
    StatusKind::SCAN_ORDER
        .iter()
        .copied()
        .find(|kind| fragment.contains(kind.code()))
}

/// Resolves a `DD/MM` token against the reference date. The year is the
/// current one unless the month has already passed, in which case the leave
/// runs into next year (December into January wraparound).
fn parse_till_date(token: &str, today: NaiveDate) -> Option<NaiveDate> {
    let (day, month) = token.split_once('/')?;
    let day: u32 = match day.trim().parse() {
        Ok(day) => day,
        Err(_) => {
            warn!(token, "could not parse day from TILL clause");
            return None;
        }
    };
    let month: u32 = match month.trim().parse() {
        Ok(month) => month,
        Err(_) => {
            warn!(token, "could not parse month from TILL clause");
            return None;
        }
    };

    let year = if month < today.month() {
        today.year() + 1
    } else {
        today.year()
    };
    let resolved = NaiveDate::from_ymd_opt(year, month, day);
    if resolved.is_none() {
        warn!(token, "TILL clause is not a valid calendar date");
    }
    resolved
}

/// Combines the AM and PM cell parses for one person into a single record.
///
/// Equal cells, or one blank cell, collapse to a whole-day record from the
/// non-blank half. Diverging non-blank cells produce a split record whose
/// `kind` mirrors the AM half for single-value readers.
pub fn combine(am_raw: &str, pm_raw: &str, today: NaiveDate) -> StatusRecord {
    let am = am_raw.trim();
    let pm = pm_raw.trim();

    if am == pm || am.is_empty() || pm.is_empty() {
        let chosen = if am.is_empty() { pm } else { am };
        return parse(chosen, today);
    }

    let am_record = parse(am, today);
    let pm_record = parse(pm, today);

    let mut combined = StatusRecord::of(am_record.kind);
    combined.split = true;
    combined.am_kind = Some(am_record.kind);
    combined.am_location = am_record.location;
    combined.pm_kind = Some(pm_record.kind);
    combined.pm_location = pm_record.location;
    combined.end_date = pm_record.end_date.or(am_record.end_date);
    combined
}
