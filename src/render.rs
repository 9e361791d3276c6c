use crate::model::report::Report;

/// Renders the parade state message. Pure and deterministic: the same
/// report always yields byte-identical text.
///
/// Blank lines are structural. The DI lines are omitted entirely when the
/// schedule has no entry for them, but the blank line closing the DI
/// section always remains.
pub fn render(report: &Report) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "Parade State for {}",
        report.report_date.format("%d/%m/%Y")
    ));
    lines.push(report.report_date.format("%A").to_string());
    lines.push(String::new());

    if let Some(current) = &report.current_duty {
        lines.push(format!("Today's DI: {current}"));
    }
    if let Some(next) = &report.next_duty {
        lines.push(format!("Next DI: {next}"));
    }
    lines.push(String::new());

    for (index, person) in report.roster.people.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, person.roster_entry()));
    }
    lines.push(String::new());

    lines.push(format!(
        "Today's number: {}(AM), {}(PM)",
        report.am_present_count, report.pm_present_count
    ));

    lines.join("\n")
}
