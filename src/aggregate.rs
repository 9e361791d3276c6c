use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::warn;

use crate::config::RosterConfig;
use crate::io::sheet::SheetTable;
use crate::model::staff::{Person, Roster, TITLE_MARKERS};
use crate::parse::status;

/// Rank prefix at the start of a name cell: `ME<digit>` grades or one of
/// the commissioned rank abbreviations, followed by the name proper.
static RANK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(ME\d+|LTC|MAJ|CPT|LTA)\s+(.+)$").expect("valid regex"));

/// Builds the roster from the fetched table.
///
/// Active rows are processed in ascending row order and numbered from 1.
/// Rows outside the table are skipped with a warning so one misconfigured
/// row never fails the batch. `columns` is the resolved (AM, PM) pair;
/// `today` anchors TILL-clause year resolution.
pub fn build_roster(
    table: &SheetTable,
    config: &RosterConfig,
    columns: (usize, usize),
    today: NaiveDate,
) -> Roster {
    let (am_column, pm_column) = columns;
    let mut active_rows = config.active_rows.clone();
    active_rows.sort_unstable();

    let mut roster = Roster::default();

    for (position, row_number) in active_rows.into_iter().enumerate() {
        // Sequence ids follow the sorted active-row list, so a skipped row
        // leaves a gap rather than renumbering everyone after it.
        let sequence_id = (position + 1) as u32;

        // Row numbers are 1-indexed against the data rows under the header.
        let Some(row_index) = row_number.checked_sub(1) else {
            warn!(row_number, "active row numbers are 1-indexed, skipping 0");
            continue;
        };
        if row_index >= table.rows.len() {
            warn!(row_number, "row is out of range for the sheet data");
            continue;
        }
        let name_cell = table.cell(row_index, config.name_column).unwrap_or("");
        let (name, rank, position) = split_name(name_cell);

        let am_raw = table.cell(row_index, am_column).unwrap_or("");
        let pm_raw = table.cell(row_index, pm_column).unwrap_or("");

        roster.people.push(Person {
            sequence_id,
            name,
            rank,
            position,
            status: status::combine(am_raw, pm_raw, today),
        });
    }

    if roster.is_empty() {
        warn!("no active staff members were found in the configured rows");
    }
    roster
}

/// Splits a raw name cell into (name, rank, position).
///
/// Cells carrying a title marker are appointment holders: the whole cell
/// becomes the position and the name is left as-is. Otherwise a leading
/// rank token, when present, is stripped into the rank field.
pub fn split_name(cell: &str) -> (String, Option<String>, Option<String>) {
    let cell = cell.trim();

    if TITLE_MARKERS.iter().any(|marker| cell.contains(marker)) {
        return (cell.to_string(), None, Some(cell.to_string()));
    }

    if let Some(captures) = RANK_RE.captures(cell) {
        return (
            captures[2].trim().to_string(),
            Some(captures[1].to_string()),
            None,
        );
    }

    (cell.to_string(), None, None)
}
