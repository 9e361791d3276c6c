use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use crate::aggregate::build_roster;
use crate::config::RosterConfig;
use crate::error::Result;
use crate::io::messages::{MessageHistorySource, MessageSink, find_duty_list};
use crate::io::sheet::{SheetSource, find_date_columns};
use crate::model::duty::DutySchedule;
use crate::model::report::Report;
use crate::parse::duty_list::parse_duty_list;
use crate::render::render;

/// Assembles a parade state for the given date.
///
/// Collaborator failures (source unreachable, history fetch failed)
/// propagate and abort the invocation; per-cell and per-row problems degrade
/// locally inside the parsers and aggregator.
#[instrument(level = "info", skip_all, fields(sheet, date = %report_date))]
pub fn build_report(
    source: &dyn SheetSource,
    history: &dyn MessageHistorySource,
    config: &RosterConfig,
    sheet: &str,
    report_date: NaiveDate,
) -> Result<Report> {
    let table = source.fetch(sheet)?;
    debug!(rows = table.rows.len(), "fetched attendance table");

    let columns = find_date_columns(&table, report_date, config.fallback_columns);
    let roster = build_roster(&table, config, columns, report_date);
    info!(people = roster.len(), "roster assembled");

    let schedule = match find_duty_list(history, config.history_limit)? {
        Some(text) => parse_duty_list(&text, report_date),
        None => DutySchedule::new(),
    };
    debug!(entries = schedule.len(), "duty schedule resolved");

    let current = schedule.current(report_date).cloned();
    let next = schedule.next(report_date).cloned();
    Ok(Report::build(report_date, roster, current, next))
}

/// Builds and renders the parade state message.
pub fn generate_message(
    source: &dyn SheetSource,
    history: &dyn MessageHistorySource,
    config: &RosterConfig,
    sheet: &str,
    report_date: NaiveDate,
) -> Result<String> {
    let report = build_report(source, history, config, sheet, report_date)?;
    Ok(render(&report))
}

/// Builds, renders, and delivers the parade state. Nothing is sent unless
/// the whole report assembled cleanly; a send failure is the terminal
/// failure of the invocation.
#[instrument(level = "info", skip_all, fields(sheet, date = %report_date))]
pub fn send_report(
    source: &dyn SheetSource,
    history: &dyn MessageHistorySource,
    sink: &dyn MessageSink,
    config: &RosterConfig,
    sheet: &str,
    report_date: NaiveDate,
) -> Result<()> {
    let message = generate_message(source, history, config, sheet, report_date)?;
    sink.send(&message)?;
    info!("parade state delivered");
    Ok(())
}
